use anyhow::bail;
use clap::Args;
use folio_config::Config;
use folio_di::Provide;
use folio_form::{SubmissionForm, SubmissionStatus, SubmitOutcome};
use url::Url;

use crate::environment::{types::ContactApi, Provider};

#[derive(Debug, Args)]
pub struct SendCommand {
    /// Name of the sender
    #[arg(long)]
    name: String,
    /// Email address to reply to
    #[arg(long)]
    email: String,
    /// Content of the message
    #[arg(long)]
    message: String,
    /// Contact endpoint to post to, overriding `client.endpoint`
    #[arg(long, env = "FOLIO_ENDPOINT")]
    endpoint: Option<Url>,
}

impl SendCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let mut provider = Provider::new(&config);
        if let Some(endpoint) = self.endpoint {
            provider = provider.with_client_endpoint(endpoint);
        }

        let form = SubmissionForm::new(provider.provide::<ContactApi>());
        form.set_name(self.name);
        form.set_email(self.email);
        form.set_message(self.message);

        match form.submit().await {
            SubmitOutcome::Settled(SubmissionStatus::Success) => {
                println!("{}", form.status_message().unwrap_or_default());
                Ok(())
            }
            SubmitOutcome::Settled(_) => {
                bail!("{}", form.status_message().unwrap_or_default())
            }
            SubmitOutcome::MissingFields(fields) => {
                let fields = fields
                    .iter()
                    .map(|field| field.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                bail!("Please fill out all required fields: {fields}")
            }
            SubmitOutcome::Ignored => bail!("A submission is already in progress"),
        }
    }
}
