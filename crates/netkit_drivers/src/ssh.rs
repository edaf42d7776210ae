use crate::config;
use anyhow::{Context, Result};
use async_ssh2_tokio::{AuthMethod, Client, ServerCheckMethod};
use netkit_model::DeviceLogin;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_SSH_PORT: u16 = 22;

/// Open one SSH session with password authentication. No retries; a
/// connection or authentication failure surfaces to the caller as-is.
pub async fn connect(login: &DeviceLogin, port: u16) -> Result<Client> {
    let auth = AuthMethod::with_password(&login.password);
    let server_check = ServerCheckMethod::DefaultKnownHostsFile;

    let target = SocketAddr::from_str(&login.host)
        .map(TargetAddr::Socket)
        .unwrap_or_else(|_| TargetAddr::HostPort(login.host.clone(), port));

    match target {
        TargetAddr::Socket(addr) => Client::connect(addr, &login.username, auth, server_check).await,
        TargetAddr::HostPort(host, port) => {
            Client::connect((host.as_str(), port), &login.username, auth, server_check).await
        }
    }
    .with_context(|| format!("ssh connect {}@{}", login.username, login.host))
}

/// Run one exec-channel command and return whatever the device printed.
/// Device-side command errors come back in the output rather than as an
/// `Err`; only transport failures abort.
pub(crate) async fn exec(client: &Client, host: &str, command: &str) -> Result<String> {
    let exec = tokio::time::timeout(config::ssh_command_timeout(), client.execute(command))
        .await
        .with_context(|| format!("ssh exec timeout on {}", host))?
        .with_context(|| format!("ssh exec on {}", host))?;
    let mut output = exec.stdout;
    if !exec.stderr.is_empty() {
        output.push_str(&exec.stderr);
    }
    Ok(output)
}

enum TargetAddr {
    Socket(SocketAddr),
    HostPort(String, u16),
}
