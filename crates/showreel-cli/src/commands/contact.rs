use anyhow::{Context, Result};

use showreel_core::contact::{submitter_from_config, ContactSubmission};
use showreel_core::AppConfig;

pub async fn run(
    config: &AppConfig,
    name: &str,
    email: &str,
    phone: Option<&str>,
    message: &str,
) -> Result<()> {
    let submission = ContactSubmission::new(name, email, phone, message);
    submission.validate()?;

    let submitter = submitter_from_config(&config.contact)?;
    let ack = submitter
        .submit(&submission)
        .await
        .context("There was an error sending your message")?;

    if ack.ok {
        println!("Message sent (id {}).", ack.id);
    } else {
        println!("The contact endpoint did not accept the message.");
    }

    Ok(())
}
