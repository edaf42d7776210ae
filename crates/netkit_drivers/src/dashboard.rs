use crate::{config, SsidLister};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use netkit_model::Ssid;
use reqwest::Client;
use tracing::info;

pub const DEFAULT_BASE_URL: &str = "https://api.meraki.com/api/v1";

/// Read-only Meraki Dashboard API client.
pub struct MerakiDashboard {
    http: Client,
    base_url: String,
    api_key: String,
}

impl MerakiDashboard {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at a different dashboard endpoint, e.g. a local
    /// stub server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(config::http_timeout())
            .build()
            .context("building dashboard http client")?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn ssids_url(&self, network_id: &str) -> String {
        format!("{}/networks/{}/wireless/ssids", self.base_url, network_id)
    }
}

#[async_trait]
impl SsidLister for MerakiDashboard {
    async fn list_ssids(&self, network_id: &str) -> Result<Vec<Ssid>> {
        let url = self.ssids_url(network_id);
        info!(target: "dashboard::meraki", "GET {}", url);
        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .with_context(|| format!("dashboard request for network {}", network_id))?;
        let status = resp.status();
        let body = resp.text().await.context("dashboard response body")?;
        if !status.is_success() {
            bail!(
                "dashboard returned {} for network {}: {}",
                status,
                network_id,
                body.trim()
            );
        }
        serde_json::from_str(&body)
            .with_context(|| format!("parsing ssid list for network {}", network_id))
    }
}
