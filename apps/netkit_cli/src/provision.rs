use anyhow::{Context, Result};
use netkit_drivers::fortios::FortiosSession;
use netkit_drivers::ConfigSession;
use netkit_model::{DeviceLogin, DeviceType};
use std::io::{self, BufRead, Write};
use tracing::info;

/// The loopback interface definition, sent as one configuration-mode
/// transaction. Repeated runs re-send the same lines and lean on the
/// device's own idempotence, if any.
pub const LOOPBACK_COMMANDS: [&str; 9] = [
    "config system interface",
    "edit Loopback99",
    "set vdom root",
    "set type loopback",
    "set alias Loopback99",
    "set ip 10.99.99.1/24",
    "set allowaccess ping",
    "next",
    "end",
];

pub const VERIFY_COMMAND: &str = "show system interface Loopback99";

pub async fn run() -> Result<()> {
    let login = prompt_login()?;
    let session = FortiosSession::open(&login).await?;
    info!("session established to {}", login.host);
    let mut stdout = io::stdout();
    provision(&session, &mut stdout).await
}

fn prompt_login() -> Result<DeviceLogin> {
    let host = prompt_line("What is the device IP address: ")?;
    let username = prompt_line("What is the username: ")?;
    let password = rpassword::prompt_password("Password: ").context("reading password")?;
    Ok(DeviceLogin {
        device_type: DeviceType::Fortinet,
        host,
        username,
        password,
    })
}

fn prompt_line(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading input")?;
    Ok(line.trim().to_string())
}

/// Push the loopback configuration, then verify it, writing the raw
/// device output to `out`. Verification always follows the push.
pub async fn provision(session: &dyn ConfigSession, out: &mut dyn Write) -> Result<()> {
    let prompt = session.find_prompt().await?;
    writeln!(out, "Running commands on: {}", strip_prompt(&prompt))?;

    let config_output = session.send_config_set(&LOOPBACK_COMMANDS).await?;
    writeln!(out, "{}", banner("CONFIG OUTPUT"))?;
    writeln!(out, "{}", config_output)?;

    let verify_output = session.send_command(VERIFY_COMMAND).await?;
    writeln!(out, "{}", banner("VERIFY CONFIG"))?;
    writeln!(out, "{}", verify_output)?;

    Ok(())
}

/// The device hostname is the prompt minus its trailing prompt character.
fn strip_prompt(prompt: &str) -> &str {
    let trimmed = prompt.trim_end();
    trimmed
        .strip_suffix(['#', '>', '$'])
        .map(str::trim_end)
        .unwrap_or(trimmed)
}

fn banner(label: &str) -> String {
    format!("{}{}{}", "*".repeat(5), label, "*".repeat(5))
}
