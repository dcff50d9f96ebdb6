use anyhow::{ensure, Context};
use clap::Subcommand;
use embassy_config::Config;
use embassy_email_contracts::{Email, EmailService};
use embassy_email_impl::EmailServiceImpl;
use embassy_models::email_address::EmailAddress;

use crate::environment;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: EmailAddress },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddress) -> anyhow::Result<()> {
    let email_service_config = environment::email_service_config(&config.email)?
        .context("No email API key configured")?;
    let email_service = EmailServiceImpl::new(email_service_config)?;

    let ok = email_service
        .send(Email {
            recipient,
            subject: "Email Deliverability Test".into(),
            text: "Email deliverability seems to be working!".into(),
            html: "<p>Email deliverability seems to be working!</p>".into(),
            reply_to: None,
        })
        .await?;

    ensure!(ok, "Failed to send email");

    Ok(())
}
