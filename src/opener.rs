//! Opens outbound links in the system browser, detached from the terminal.

use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("refusing to open non-web link: {0}")]
    Scheme(String),
    #[error("failed to launch browser: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Only plain web links are handed to the platform opener.
pub fn check_url(url: &str) -> Result<(), OpenError> {
    let lower = url.trim().to_ascii_lowercase();
    let web = lower.starts_with("http://") || lower.starts_with("https://");
    if !web || url.chars().any(|c| c.is_whitespace() || c.is_control() || c == '"') {
        return Err(OpenError::Scheme(url.to_string()));
    }
    Ok(())
}

fn command(url: &str) -> Command {
    if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    } else if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

/// Launch the browser and return without waiting. The child gets no stdio,
/// so nothing leaks back into the page or the referring process.
pub fn open(url: &str) -> Result<(), OpenError> {
    check_url(url)?;
    let mut child = command(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    // Reap the launcher once it exits.
    std::thread::spawn(move || child.wait());
    Ok(())
}
