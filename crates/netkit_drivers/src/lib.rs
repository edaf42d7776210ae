pub mod config;
pub mod dashboard;
pub mod fortios;
pub mod mock;
pub mod ssh;

use anyhow::Result;
use async_trait::async_trait;
use netkit_model::Ssid;

/// An administrative configuration session on a managed device.
///
/// The vendor transport sits behind this trait so callers can be tested
/// against an in-memory session.
#[async_trait]
pub trait ConfigSession: Send + Sync {
    /// The device prompt as the remote shell would render it, e.g. `lab-fw #`.
    async fn find_prompt(&self) -> Result<String>;

    /// Push an ordered batch of configuration lines as one
    /// configuration-mode transaction and return the raw device output.
    async fn send_config_set(&self, commands: &[&str]) -> Result<String>;

    /// Run a single read-only command and return the raw output.
    async fn send_command(&self, command: &str) -> Result<String>;
}

/// Read-only view of the wireless networks a dashboard manages.
#[async_trait]
pub trait SsidLister: Send + Sync {
    async fn list_ssids(&self, network_id: &str) -> Result<Vec<Ssid>>;
}
