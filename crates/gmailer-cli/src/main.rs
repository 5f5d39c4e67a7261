//! Gmailer - send an HTML email through Gmail with OAuth2 credentials

mod args;

use anyhow::Result;
use args::Args;
use clap::Parser;
use gmailer_smtp::MailClient;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(
            "gmailer=debug".parse().expect("static directive is valid"),
        ))
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let client = MailClient::from_credentials(args.load_credentials()?);
    tracing::info!("Sending as {}", client.user());

    let recipients = args.recipients();
    let content = args.content()?;
    let sent = client
        .send_email(&args.from, Some(&recipients), &args.subject, &content)
        .await?;

    if let Some(response) = sent.response {
        tracing::debug!("Server response: {}", response);
    }
    Ok(())
}
