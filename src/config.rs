use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Consultation form forwarding (Google Apps Script endpoint)
    pub sheets_script_url: String,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Spreadsheet-backed endpoint the consultation form posts to
            sheets_script_url: std::env::var("SHEETS_SCRIPT_URL")
                .context("SHEETS_SCRIPT_URL not set")?,

            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }
}
