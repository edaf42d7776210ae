use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceType {
    Fortinet,
}

impl FromStr for DeviceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fortinet" | "fortios" => Ok(DeviceType::Fortinet),
            other => Err(format!("unknown device type '{}'", other)),
        }
    }
}

/// Credentials and target for one administrative session. Collected
/// interactively and held only for the lifetime of that session.
#[derive(Clone)]
pub struct DeviceLogin {
    pub device_type: DeviceType,
    pub host: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for DeviceLogin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceLogin")
            .field("device_type", &self.device_type)
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"******")
            .finish()
    }
}

/// One wireless network entry as returned by the dashboard API.
/// Extra fields in the payload are ignored.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ssid {
    pub name: String,
    pub enabled: bool,
    pub visible: bool,
    pub auth_mode: String,
    #[serde(default)]
    pub psk: Option<String>,
    pub ip_assignment_mode: String,
}

impl Ssid {
    /// The dashboard reports open networks with the literal auth mode "open".
    pub fn is_open(&self) -> bool {
        self.auth_mode == "open"
    }
}

impl fmt::Debug for Ssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ssid")
            .field("name", &self.name)
            .field("enabled", &self.enabled)
            .field("visible", &self.visible)
            .field("auth_mode", &self.auth_mode)
            .field("psk", &self.psk.as_ref().map(|_| "******"))
            .field("ip_assignment_mode", &self.ip_assignment_mode)
            .finish()
    }
}
