use serde::{Deserialize, Serialize};
use std::fs;

use crate::errors::SweepError;

/// Trello API credentials plus the card this tool sweeps.
///
/// The file uses PascalCase keys (`Key`, `Token`, `CardID`). All three
/// fields are required; a file missing any of them is rejected at load
/// time.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct Credentials {
    pub key: String,
    pub token: String,
    #[serde(rename = "CardID")]
    pub card_id: String,
}

impl Credentials {
    pub fn load(path: &str) -> Result<Self, SweepError> {
        let content = fs::read_to_string(path)
            .map_err(|e| SweepError::CredentialsRead(path.to_string(), e))?;
        let creds: Credentials = serde_json::from_str(&content)
            .map_err(|e| SweepError::CredentialsParse(path.to_string(), e))?;
        Ok(creds)
    }
}
