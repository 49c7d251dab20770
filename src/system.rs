//! Platform clipboard and link opener, driven through external commands.

use std::io;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use linkroom_core::error::AppError;
use linkroom_core::result::AppResult;
use linkroom_view::Clipboard;

#[cfg(target_os = "macos")]
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[("pbcopy", &[])];
#[cfg(target_os = "windows")]
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[("clip", &[])];
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] =
    &[("wl-copy", &[]), ("xclip", &["-selection", "clipboard"])];

#[cfg(target_os = "macos")]
const OPENER: (&str, &[&str]) = ("open", &[]);
#[cfg(target_os = "windows")]
const OPENER: (&str, &[&str]) = ("cmd", &["/C", "start", ""]);
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENER: (&str, &[&str]) = ("xdg-open", &[]);

/// Clipboard backed by the first platform clipboard command that works.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> AppResult<()> {
        for (program, args) in CLIPBOARD_COMMANDS {
            match pipe_to(program, args, text).await {
                Ok(()) => {
                    debug!(program, "Copied to clipboard");
                    return Ok(());
                }
                Err(e) => debug!(program, error = %e, "Clipboard command failed"),
            }
        }
        Err(AppError::clipboard("No clipboard command succeeded"))
    }
}

/// Open `url` with the platform opener.
pub async fn open_url(url: &str) -> AppResult<()> {
    let (program, args) = OPENER;
    let status = Command::new(program)
        .args(args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await?;
    if status.success() {
        Ok(())
    } else {
        Err(AppError::internal(format!("{program} exited with {status}")))
    }
}

async fn pipe_to(program: &str, args: &[&str], text: &str) -> io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).await?;
    }

    let status = child.wait().await?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("{program} exited with {status}")))
    }
}
