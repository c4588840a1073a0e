use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::macros::nutype_string;

pub const NAME_MAX_CHARS: usize = 200;
pub const EMAIL_MAX_CHARS: usize = 320;
pub const MESSAGE_MAX_CHARS: usize = 5000;

/// The unvalidated contact payload, as typed into the form and sent over the
/// wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmissionDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmissionDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }
}

/// A contact submission that satisfied every rule in
/// [`CONTACT_SUBMISSION_RULES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub message: ContactMessageText,
}

nutype_string!(ContactName(validate(
    predicate = |name| NAME_RULE.accepts(name)
)));

nutype_string!(ContactEmail(validate(
    predicate = |email| EMAIL_RULE.accepts(email)
)));

nutype_string!(ContactMessageText(validate(
    predicate = |message| MESSAGE_RULE.accepts(message)
)));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid contact submission: {}", DisplayViolations(.0))]
pub struct InvalidContactSubmission(pub Vec<Violation>);

impl TryFrom<ContactSubmissionDraft> for ContactSubmission {
    type Error = InvalidContactSubmission;

    fn try_from(draft: ContactSubmissionDraft) -> Result<Self, Self::Error> {
        match (
            ContactName::try_new(draft.name.clone()),
            ContactEmail::try_new(draft.email.clone()),
            ContactMessageText::try_new(draft.message.clone()),
        ) {
            (Ok(name), Ok(email), Ok(message)) => Ok(Self {
                name,
                email,
                message,
            }),
            _ => Err(InvalidContactSubmission(validate(&draft))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Email,
}

/// Constraints for a single field of a contact submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: ContactField,
    pub min_chars: usize,
    pub max_chars: usize,
    pub format: Option<FieldFormat>,
}

pub const NAME_RULE: FieldRule = FieldRule {
    field: ContactField::Name,
    min_chars: 1,
    max_chars: NAME_MAX_CHARS,
    format: None,
};

pub const EMAIL_RULE: FieldRule = FieldRule {
    field: ContactField::Email,
    min_chars: 0,
    max_chars: EMAIL_MAX_CHARS,
    format: Some(FieldFormat::Email),
};

pub const MESSAGE_RULE: FieldRule = FieldRule {
    field: ContactField::Message,
    min_chars: 1,
    max_chars: MESSAGE_MAX_CHARS,
    format: None,
};

pub const CONTACT_SUBMISSION_RULES: [FieldRule; 3] = [NAME_RULE, EMAIL_RULE, MESSAGE_RULE];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub field: ContactField,
    pub kind: ViolationKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    TooShort { min_chars: usize },
    TooLong { max_chars: usize },
    InvalidFormat(FieldFormat),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::TooShort { min_chars } => {
                write!(f, "{} must have at least {min_chars} characters", self.field)
            }
            ViolationKind::TooLong { max_chars } => {
                write!(f, "{} must have at most {max_chars} characters", self.field)
            }
            ViolationKind::InvalidFormat(FieldFormat::Email) => {
                write!(f, "{} is not a valid email address", self.field)
            }
        }
    }
}

struct DisplayViolations<'a>(&'a [Violation]);

impl fmt::Display for DisplayViolations<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            violation.fmt(f)?;
        }
        Ok(())
    }
}

impl FieldRule {
    /// Returns every constraint of this rule that `value` violates.
    pub fn check(&self, value: &str) -> Vec<Violation> {
        let chars = value.chars().count();
        let mut violations = Vec::new();
        let mut violate = |kind| {
            violations.push(Violation {
                field: self.field,
                kind,
            })
        };

        if chars < self.min_chars {
            violate(ViolationKind::TooShort {
                min_chars: self.min_chars,
            });
        }
        if chars > self.max_chars {
            violate(ViolationKind::TooLong {
                max_chars: self.max_chars,
            });
        }
        match self.format {
            Some(FieldFormat::Email) if !is_email_address(value) => {
                violate(ViolationKind::InvalidFormat(FieldFormat::Email));
            }
            _ => {}
        }

        violations
    }

    pub fn accepts(&self, value: &str) -> bool {
        self.check(value).is_empty()
    }
}

/// Validates all fields of `draft` against [`CONTACT_SUBMISSION_RULES`].
pub fn validate(draft: &ContactSubmissionDraft) -> Vec<Violation> {
    CONTACT_SUBMISSION_RULES
        .iter()
        .flat_map(|rule| rule.check(draft.get(rule.field)))
        .collect()
}

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .unwrap()
});

/// Checks the syntax of an email address.
///
/// The local part may not start with a dot and no two dots may follow each
/// other anywhere in the address.
pub fn is_email_address(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_REGEX.is_match(value)
}
