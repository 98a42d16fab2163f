//! Desktop notifications.
//!
//! Delivery is best effort: callers decide what to do with a failure, and the
//! focus controller discards it.

use std::process::{Command, Stdio};
use std::thread;

use tracing::warn;

use crate::error::FocusError;

/// Sends a desktop notification.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Show a notification with a title and a message.
    ///
    /// # Errors
    ///
    /// Returns [`FocusError::Notification`] if the notification could not be shown.
    fn notify(&self, title: &str, message: &str) -> Result<(), FocusError>;
}

/// Notifier backed by the platform's notification command.
///
/// Uses `osascript` on macOS and `notify-send` elsewhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    fn command(title: &str, message: &str) -> Command {
        if cfg!(target_os = "macos") {
            let script = format!(
                r#"display notification "{}" with title "{}""#,
                escape_applescript(message),
                escape_applescript(title)
            );
            let mut cmd = Command::new("osascript");
            cmd.arg("-e").arg(script);
            cmd
        } else {
            let mut cmd = Command::new("notify-send");
            cmd.arg(title).arg(message);
            cmd
        }
    }
}

/// Quote `s` for use inside an `AppleScript` string literal.
fn escape_applescript(s: &str) -> String {
    s.replace('\\', r"\\").replace('"', r#"\""#)
}

impl Notifier for DesktopNotifier {
    /// Launches the notification command without waiting for it.
    ///
    /// Only a failure to start the command or an exit that has already
    /// happened is reported; a later failure is logged by a reaper thread.
    fn notify(&self, title: &str, message: &str) -> Result<(), FocusError> {
        let mut child = Self::command(title, message)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| FocusError::Notification(e.to_string()))?;

        match child.try_wait() {
            Ok(Some(status)) if !status.success() => Err(FocusError::Notification(format!(
                "notifier exited with {status}"
            ))),
            Ok(Some(_)) => Ok(()),
            Ok(None) => {
                thread::spawn(move || match child.wait() {
                    Ok(status) if !status.success() => {
                        warn!(%status, "notification command failed");
                    }
                    Ok(_) => {}
                    Err(e) => warn!(error = %e, "failed to wait for notification command"),
                });
                Ok(())
            }
            Err(e) => Err(FocusError::Notification(e.to_string())),
        }
    }
}

/// Notifier used when notifications are turned off.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _title: &str, _message: &str) -> Result<(), FocusError> {
        Ok(())
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&self, title: &str, message: &str) -> Result<(), FocusError> {
        (**self).notify(title, message)
    }
}
