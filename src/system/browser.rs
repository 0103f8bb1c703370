//! Browser hand-off
//!
//! Provider account pages live on the web; this module hands their URLs
//! to the platform's default browser.

use async_trait::async_trait;
use std::process::{Command, Stdio};
use thiserror::Error;

/// Errors that can occur when opening a URL
#[derive(Debug, Error)]
pub enum BrowseError {
    #[error("Refusing to open non-http(s) URL: {0}")]
    InvalidUrl(String),
    #[error("Failed to launch browser: {0}")]
    Launch(#[from] std::io::Error),
}

/// Hands a URL off to an external viewer
#[async_trait]
pub trait Browser: Send + Sync {
    async fn open(&self, url: &str) -> Result<(), BrowseError>;
}

/// Opens URLs with the platform's default browser
pub struct SystemBrowser;

#[async_trait]
impl Browser for SystemBrowser {
    async fn open(&self, url: &str) -> Result<(), BrowseError> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(BrowseError::InvalidUrl(url.to_string()));
        }

        let program = if cfg!(target_os = "windows") {
            "explorer"
        } else if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        };

        let mut cmd = Command::new(program);
        cmd.arg(url);
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::null());

        // Fire and forget, the browser outlives us
        cmd.spawn()?;

        tracing::info!("Opened {} in the system browser", url);
        Ok(())
    }
}
