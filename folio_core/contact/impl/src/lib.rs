use folio_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use folio_di::Build;
use folio_models::contact::{ContactSubmission, ContactSubmissionDraft};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, Build)]
pub struct ContactFeatureServiceImpl;

impl ContactFeatureService for ContactFeatureServiceImpl {
    async fn submit(
        &self,
        draft: ContactSubmissionDraft,
    ) -> Result<ContactSubmission, ContactSubmitError> {
        let submission = ContactSubmission::try_from(draft).inspect_err(|err| {
            debug!(violations = %err, "Rejected contact submission");
        })?;

        info!(
            name = %submission.name.as_str(),
            email = %submission.email.as_str(),
            message_chars = submission.message.chars().count(),
            "Contact form submission"
        );

        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use folio_models::contact::{ContactField, InvalidContactSubmission, Violation, ViolationKind};
    use folio_utils::assert_matches;

    use super::*;

    fn draft(name: &str, email: &str, message: &str) -> ContactSubmissionDraft {
        ContactSubmissionDraft {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let sut = ContactFeatureServiceImpl;

        // Act
        let result = sut
            .submit(draft("Ada", "ada@example.com", "Hello"))
            .await;

        // Assert
        let submission = result.unwrap();
        assert_eq!(*submission.name, "Ada");
        assert_eq!(*submission.email, "ada@example.com");
        assert_eq!(*submission.message, "Hello");
    }

    #[tokio::test]
    async fn invalid() {
        // Arrange
        let sut = ContactFeatureServiceImpl;

        // Act
        let result = sut.submit(draft("", "ada@example.com", "Hello")).await;

        // Assert
        assert_matches!(
            result,
            Err(ContactSubmitError::Invalid(InvalidContactSubmission(violations)))
                if violations == &[Violation {
                    field: ContactField::Name,
                    kind: ViolationKind::TooShort { min_chars: 1 },
                }]
        );
    }

    #[tokio::test]
    async fn same_draft_is_accepted_twice() {
        // Arrange
        let sut = ContactFeatureServiceImpl;
        let draft = draft("Ada", "ada@example.com", "Hello");

        // Act
        let (first, second) =
            tokio::join!(sut.submit(draft.clone()), sut.submit(draft.clone()));

        // Assert
        assert_eq!(first.unwrap(), second.unwrap());
    }
}
