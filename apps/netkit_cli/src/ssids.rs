use anyhow::{Context, Result};
use netkit_drivers::dashboard::MerakiDashboard;
use netkit_drivers::SsidLister;
use std::io::{self, Write};
use tracing::info;

pub const OPEN_PASSWORD_PLACEHOLDER: &str = "OPEN - NO PASSWORD REQUIRED";
const SEPARATOR_WIDTH: usize = 25;

/// Reporter configuration, validated up front so a missing value fails
/// before any network traffic.
pub struct ReporterConfig {
    pub api_key: String,
    pub network_id: String,
}

impl ReporterConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: require_env("MERAKI_API_KEY")?,
            network_id: require_env("MERAKI_NETWORK_ID")?,
        })
    }
}

fn require_env(var: &str) -> Result<String> {
    std::env::var(var).with_context(|| format!("{} is not set", var))
}

pub async fn run() -> Result<()> {
    let config = ReporterConfig::from_env()?;
    let dashboard = MerakiDashboard::new(config.api_key)?;
    info!("querying ssids for network {}", config.network_id);
    let mut stdout = io::stdout();
    report(&dashboard, &config.network_id, &mut stdout).await
}

/// Print one block per SSID, in the order the service returned them.
pub async fn report(lister: &dyn SsidLister, network_id: &str, out: &mut dyn Write) -> Result<()> {
    let ssids = lister.list_ssids(network_id).await?;
    for ssid in &ssids {
        writeln!(out, "{}", "*".repeat(SEPARATOR_WIDTH))?;
        writeln!(out, "SSID Name: {}", ssid.name)?;
        writeln!(out, "Is Enabled: {}", ssid.enabled)?;
        writeln!(out, "Is visible to users: {}", ssid.visible)?;
        if ssid.is_open() {
            writeln!(out, "Password: {}", OPEN_PASSWORD_PLACEHOLDER)?;
        } else {
            writeln!(out, "Password: {}", ssid.psk.as_deref().unwrap_or(""))?;
        }
        writeln!(out, "IP Address Assignment Mode: {}", ssid.ip_assignment_mode)?;
    }
    Ok(())
}
