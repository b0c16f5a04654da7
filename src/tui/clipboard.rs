//! Clipboard helper for copying text to the system clipboard.

use std::io::Write;
use std::process::{Command, Stdio};

/// Copy text to the system clipboard.
///
/// Uses `pbcopy` on macOS; on Linux prefers `wl-copy` under Wayland and
/// falls back to `xclip`. Returns `true` on success.
pub fn copy_to_clipboard(text: &str) -> bool {
    if cfg!(target_os = "macos") {
        return pipe_to(Command::new("pbcopy"), text);
    }

    if std::env::var_os("WAYLAND_DISPLAY").is_some() && pipe_to(Command::new("wl-copy"), text) {
        return true;
    }

    let mut xclip = Command::new("xclip");
    xclip.args(["-selection", "clipboard"]);
    pipe_to(xclip, text)
}

/// Spawn the command with a piped stdin, write `text`, and wait.
fn pipe_to(mut command: Command, text: &str) -> bool {
    let result = command
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .and_then(|mut child| {
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(text.as_bytes())?;
            }
            child.wait()
        });

    result.is_ok_and(|status| status.success())
}
