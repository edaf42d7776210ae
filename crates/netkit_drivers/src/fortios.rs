use crate::ssh::{self, DEFAULT_SSH_PORT};
use crate::ConfigSession;
use anyhow::{Context, Result};
use async_ssh2_tokio::Client;
use async_trait::async_trait;
use netkit_model::DeviceLogin;
use tracing::info;

/// Administrative session against a FortiGate appliance.
///
/// The transport is exec-channel SSH: a config set travels as one
/// newline-joined batch, which FortiOS applies as a single
/// configuration-mode transaction.
pub struct FortiosSession {
    client: Client,
    host: String,
}

impl FortiosSession {
    pub async fn open(login: &DeviceLogin) -> Result<Self> {
        let client = ssh::connect(login, DEFAULT_SSH_PORT).await?;
        Ok(Self {
            client,
            host: login.host.clone(),
        })
    }
}

#[async_trait]
impl ConfigSession for FortiosSession {
    async fn find_prompt(&self) -> Result<String> {
        // Exec channels never show a shell prompt, so reconstruct it from
        // the hostname that `get system status` reports.
        let status = ssh::exec(&self.client, &self.host, "get system status").await?;
        let hostname = parse_hostname(&status)
            .with_context(|| format!("no hostname in system status from {}", self.host))?;
        Ok(format!("{} #", hostname))
    }

    async fn send_config_set(&self, commands: &[&str]) -> Result<String> {
        info!(
            target: "sessions::fortios",
            "{} <- config set ({} lines)",
            self.host,
            commands.len()
        );
        let batch = commands.join("\n");
        ssh::exec(&self.client, &self.host, &batch).await
    }

    async fn send_command(&self, command: &str) -> Result<String> {
        info!(target: "sessions::fortios", "{} <- {}", self.host, command);
        ssh::exec(&self.client, &self.host, command).await
    }
}

fn parse_hostname(status_output: &str) -> Option<String> {
    status_output.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        if key.trim() == "Hostname" {
            Some(value.trim().to_string())
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::parse_hostname;

    #[test]
    fn hostname_extracted_from_status_output() {
        let status = "Version: FortiGate-60E v7.0.12\n\
                      Serial-Number: FGT60E0000000000\n\
                      Hostname: branch-fw-01\n\
                      Operation Mode: NAT\n";
        assert_eq!(parse_hostname(status).as_deref(), Some("branch-fw-01"));
    }

    #[test]
    fn missing_hostname_yields_none() {
        assert_eq!(parse_hostname("Version: v7.0.12\n"), None);
    }
}
