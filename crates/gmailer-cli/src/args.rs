//! Command-line arguments

use anyhow::{bail, Context, Result};
use clap::Parser;
use gmailer_auth::{CredentialsConfig, OAuth2Credentials};
use gmailer_smtp::Recipients;
use std::path::PathBuf;

/// Send one HTML email through Gmail using OAuth2 credentials
#[derive(Debug, Parser)]
#[command(name = "gmailer", version)]
pub struct Args {
    /// Sender address
    #[arg(long)]
    pub from: String,

    /// Direct recipient (repeatable)
    #[arg(long, required = true)]
    pub to: Vec<String>,

    /// Carbon-copy recipient (repeatable)
    #[arg(long)]
    pub cc: Vec<String>,

    /// Blind-carbon-copy recipient (repeatable)
    #[arg(long)]
    pub bcc: Vec<String>,

    /// Subject line
    #[arg(long)]
    pub subject: String,

    /// HTML body
    #[arg(long, conflicts_with = "html_file", required_unless_present = "html_file")]
    pub html: Option<String>,

    /// Read the HTML body from a file
    #[arg(long)]
    pub html_file: Option<PathBuf>,

    /// JSON credentials file; GMAILER_* environment variables are used when absent
    #[arg(long, env = "GMAILER_CREDENTIALS")]
    pub credentials: Option<PathBuf>,
}

impl Args {
    pub fn recipients(&self) -> Recipients {
        Recipients::to(self.to.iter().cloned())
            .with_cc(self.cc.iter().cloned())
            .with_bcc(self.bcc.iter().cloned())
    }

    pub fn content(&self) -> Result<String> {
        match (&self.html, &self.html_file) {
            (Some(html), _) => Ok(html.clone()),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("reading HTML body from {}", path.display())),
            (None, None) => bail!("either --html or --html-file is required"),
        }
    }

    pub fn load_credentials(&self) -> Result<OAuth2Credentials> {
        let config = match &self.credentials {
            Some(path) => CredentialsConfig::from_file(path)
                .with_context(|| format!("loading credentials from {}", path.display()))?,
            None => CredentialsConfig::from_env(),
        };
        Ok(config.into_credentials()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_recipients() {
        let args = Args::try_parse_from([
            "gmailer", "--from", "s@x.com", "--to", "a@x.com", "--to", "b@x.com", "--bcc",
            "d@x.com", "--subject", "Subj", "--html", "<p>Body</p>",
        ])
        .unwrap();

        let recipients = args.recipients();
        assert_eq!(
            recipients.to,
            Some(vec!["a@x.com".to_string(), "b@x.com".to_string()])
        );
        assert_eq!(recipients.cc, Some(vec![]));
        assert_eq!(recipients.bcc, Some(vec!["d@x.com".to_string()]));
        assert_eq!(args.content().unwrap(), "<p>Body</p>");
    }

    #[test]
    fn test_to_is_required() {
        let result = Args::try_parse_from([
            "gmailer", "--from", "s@x.com", "--subject", "Subj", "--html", "<p>Body</p>",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_body_is_required() {
        let result = Args::try_parse_from([
            "gmailer", "--from", "s@x.com", "--to", "a@x.com", "--subject", "Subj",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_content_without_body_is_an_error() {
        let args = Args {
            from: "s@x.com".to_string(),
            to: vec!["a@x.com".to_string()],
            cc: vec![],
            bcc: vec![],
            subject: "Subj".to_string(),
            html: None,
            html_file: None,
            credentials: None,
        };

        let err = args.content().unwrap_err();
        assert!(err.to_string().contains("--html"));
    }

    #[test]
    fn test_html_and_html_file_conflict() {
        let result = Args::try_parse_from([
            "gmailer",
            "--from",
            "s@x.com",
            "--to",
            "a@x.com",
            "--subject",
            "Subj",
            "--html",
            "<p>Body</p>",
            "--html-file",
            "body.html",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_credentials_file() {
        let args = Args::try_parse_from([
            "gmailer",
            "--from",
            "s@x.com",
            "--to",
            "a@x.com",
            "--subject",
            "Subj",
            "--html",
            "<p>Body</p>",
            "--credentials",
            "/nonexistent/gmailer.json",
        ])
        .unwrap();

        let err = args.load_credentials().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/gmailer.json"));
    }
}
