use anyhow::Result;

use folio_core::{AppConfig, ContactSubmission, SiteClient};

pub async fn run(
    config: &AppConfig,
    name: String,
    email: String,
    subject: Option<String>,
    message: String,
) -> Result<()> {
    let submission = ContactSubmission::new(name, email, subject, message);
    submission.validate()?;

    let client = SiteClient::from_config(config)?;
    println!("Sending message to {}...", client.base_url());

    let reply = client.submit_contact(&submission).await?;
    println!("{}", reply);

    Ok(())
}
