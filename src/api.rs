use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Credentials;
use crate::errors::SweepError;
use crate::filter::DeletionTarget;

pub const TRELLO_API_BASE: &str = "https://api.trello.com/1";

/// Per-request ceiling; a call hung past this is abandoned
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Checklist {
    #[serde(default)]
    pub id: String,
    pub name: Option<String>,

    #[serde(default, rename = "checkItems")]
    pub check_items: Vec<CheckItem>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CheckItem {
    pub id: Option<String>,

    #[serde(rename = "idChecklist")]
    pub id_checklist: Option<String>,

    /// "complete" or "incomplete" from the API
    pub state: Option<String>,

    pub name: Option<String>,
    pub pos: Option<serde_json::Value>, // float or "top"/"bottom" depending on endpoint
}

/// Thin authenticated client for the Trello v1 REST API.
#[derive(Debug, Clone)]
pub struct TrelloClient {
    base_url: String,
    creds: Credentials,
    client: reqwest::Client,
}

impl TrelloClient {
    pub fn new(creds: Credentials) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("trello-sweep/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: TRELLO_API_BASE.to_string(),
            creds,
            client,
        }
    }

    /// Point the client at a different API root (mock servers in tests).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = if base_url.ends_with('/') {
            base_url[..base_url.len() - 1].to_string()
        } else {
            base_url
        };
        self
    }

    /// Base + "/"-joined segments + auth query. Segments are concatenated
    /// literally; IDs that would need percent-encoding are not supported.
    fn build_url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.push_str(segment);
        }
        format!("{}?key={}&token={}", url, self.creds.key, self.creds.token)
    }

    fn card_checklists_url(&self) -> String {
        self.build_url(&["cards", &self.creds.card_id, "checklists"])
    }

    fn check_item_url(&self, checklist_id: &str, check_item_id: &str) -> String {
        self.build_url(&["checklists", checklist_id, "checkItems", check_item_id])
    }

    /// Fetch every checklist on the configured card, in API order.
    pub async fn get_checklists(&self) -> Result<Vec<Checklist>, SweepError> {
        let url = self.card_checklists_url();
        log::debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SweepError::Transport("GET", e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SweepError::ServerStatus(
                status.as_u16(),
                self.creds.card_id.clone(),
            ));
        }

        let checklists: Vec<Checklist> = resp.json().await.map_err(SweepError::Decode)?;
        log::debug!("Fetched {} checklists", checklists.len());
        Ok(checklists)
    }

    /// Delete a single check item. The response body is discarded unread;
    /// a server-side rejection is logged but does not stop the sweep.
    pub async fn delete_check_item(
        &self,
        checklist_id: &str,
        check_item_id: &str,
    ) -> Result<(), SweepError> {
        let url = self.check_item_url(checklist_id, check_item_id);
        log::debug!("DELETE {}", url);

        let resp = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| SweepError::Transport("DELETE", e))?;

        if !resp.status().is_success() {
            log::warn!(
                "Delete of item {} in checklist {} returned {}",
                check_item_id,
                checklist_id,
                resp.status()
            );
        }
        Ok(())
    }

    /// Delete each target in order, one at a time, announcing each on stdout.
    pub async fn clean_checklists(&self, targets: &[DeletionTarget]) -> Result<(), SweepError> {
        for target in targets {
            println!(
                "Deleting completed entry [Checklist: {}] [ItemID: {}]",
                target.checklist_id, target.check_item_id
            );
            self.delete_check_item(&target.checklist_id, &target.check_item_id)
                .await?;
        }
        Ok(())
    }
}
