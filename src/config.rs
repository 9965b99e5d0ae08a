use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::prompt::Prompter;

/// Deployment credentials, stored on disk in the same JSON shape
/// `a0deploy` reads as its config file.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Credentials {
    #[serde(rename = "AUTH0_DOMAIN", default)]
    pub domain: String,
    #[serde(rename = "AUTH0_CLIENT_ID", default)]
    pub client_id: String,
    #[serde(rename = "AUTH0_CLIENT_SECRET", default)]
    pub client_secret: String,
    #[serde(rename = "AUTH0_ALLOW_DELETE", default)]
    pub allow_delete: bool,
}

impl Credentials {
    /// Usable only when all three fields are present.
    pub fn is_complete(&self) -> bool {
        !self.domain.is_empty() && !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

/// Reuses a stored credential file when it parses and passes the
/// non-empty check; any other state (missing, unreadable, incomplete)
/// triggers interactive re-collection and a full rewrite of the file.
pub fn resolve(path: &Path, prompter: &mut dyn Prompter) -> Result<Credentials> {
    if let Some(credentials) = load(path) {
        println!("Using stored credentials from {}", path.display());
        return Ok(credentials);
    }
    let credentials = collect(prompter)?;
    store(path, &credentials)?;
    Ok(credentials)
}

fn load(path: &Path) -> Option<Credentials> {
    let data = fs::read_to_string(path).ok()?;
    let credentials: Credentials = serde_json::from_str(&data).ok()?;
    credentials.is_complete().then_some(credentials)
}

fn collect(prompter: &mut dyn Prompter) -> Result<Credentials> {
    println!("A machine-to-machine application authorized for the Management API is required.");
    let domain = prompter.input("Tenant domain (e.g. example.eu.auth0.com)")?;
    let client_id = prompter.input("Client ID")?;
    let client_secret = prompter.password("Client secret")?;
    Ok(Credentials {
        domain,
        client_id,
        client_secret,
        allow_delete: true,
    })
}

/// Full rewrite; the record is never mutated in place.
pub fn store(path: &Path, credentials: &Credentials) -> Result<()> {
    let data = serde_json::to_string_pretty(credentials)?;
    fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
