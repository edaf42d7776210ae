use once_cell::sync::Lazy;
use std::time::Duration;

const DEFAULT_SSH_TIMEOUT_SECS: u64 = 30;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

static SSH_TIMEOUT: Lazy<Duration> = Lazy::new(|| {
    env_duration(
        "NETKIT_SSH_TIMEOUT_SECS",
        Duration::from_secs(DEFAULT_SSH_TIMEOUT_SECS),
    )
});

static HTTP_TIMEOUT: Lazy<Duration> = Lazy::new(|| {
    env_duration(
        "NETKIT_HTTP_TIMEOUT_SECS",
        Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
    )
});

pub fn ssh_command_timeout() -> Duration {
    *SSH_TIMEOUT
}

pub fn http_timeout() -> Duration {
    *HTTP_TIMEOUT
}

fn env_duration(var: &str, default: Duration) -> Duration {
    std::env::var(var)
        .ok()
        .and_then(|value| value.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(default)
}
