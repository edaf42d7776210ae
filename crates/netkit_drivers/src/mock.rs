use crate::{ConfigSession, SsidLister};
use anyhow::Result;
use async_trait::async_trait;
use netkit_model::Ssid;
use std::sync::Mutex;

/// In-memory stand-in for a device session; records everything sent.
pub struct MockSession {
    prompt: String,
    config_reply: String,
    command_reply: String,
    pub sent: Mutex<Vec<String>>,
}

impl MockSession {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self::with_replies(prompt, "config applied", "mock interface output")
    }

    pub fn with_replies(
        prompt: impl Into<String>,
        config_reply: impl Into<String>,
        command_reply: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            config_reply: config_reply.into(),
            command_reply: command_reply.into(),
            sent: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ConfigSession for MockSession {
    async fn find_prompt(&self) -> Result<String> {
        Ok(self.prompt.clone())
    }

    async fn send_config_set(&self, commands: &[&str]) -> Result<String> {
        let mut sent = self.sent.lock().unwrap();
        sent.extend(commands.iter().map(|cmd| cmd.to_string()));
        Ok(self.config_reply.clone())
    }

    async fn send_command(&self, command: &str) -> Result<String> {
        self.sent.lock().unwrap().push(command.to_string());
        Ok(self.command_reply.clone())
    }
}

/// Serves a canned SSID list regardless of network id.
pub struct StaticSsidList {
    ssids: Vec<Ssid>,
    pub queried: Mutex<Vec<String>>,
}

impl StaticSsidList {
    pub fn new(ssids: Vec<Ssid>) -> Self {
        Self {
            ssids,
            queried: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SsidLister for StaticSsidList {
    async fn list_ssids(&self, network_id: &str) -> Result<Vec<Ssid>> {
        self.queried.lock().unwrap().push(network_id.to_string());
        Ok(self.ssids.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_session_records_commands_in_order() {
        let session = MockSession::new("lab-fw #");
        session
            .send_config_set(&["config system interface", "end"])
            .await
            .expect("config set");
        session.send_command("show system status").await.expect("command");

        let sent = session.sent.lock().unwrap();
        assert_eq!(
            sent.as_slice(),
            ["config system interface", "end", "show system status"]
        );
    }
}
