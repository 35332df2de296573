//! Child-process launcher with a bounded wait.

use super::{AppLauncher, LaunchOutcome};
use crate::config::LaunchConfig;
use crate::error::{PanelError, Result};
use crate::platform;
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::process::{ChildStderr, Command};
use tracing::{debug, error, info};

/// Runs `<program> <args...> <app_name>` and waits at most `timeout`.
///
/// The child is killed if the timeout elapses.
#[derive(Debug, Clone)]
pub struct CommandLauncher {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandLauncher {
    /// Create a launcher around an arbitrary program.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            timeout: LaunchConfig::TIMEOUT,
        }
    }

    /// The host's own "open application" facility.
    pub fn platform_default() -> Self {
        let (program, args) = platform::default_launcher_command();
        Self::new(program, args)
    }

    /// Set the upper bound on how long to wait for the launcher.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for CommandLauncher {
    fn default() -> Self {
        Self::platform_default()
    }
}

#[async_trait]
impl AppLauncher for CommandLauncher {
    async fn launch(&self, app_name: &str) -> Result<LaunchOutcome> {
        if app_name.trim().is_empty() {
            return Err(PanelError::Validation {
                field: "app_name".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        info!("Attempting to open application: {}", app_name);
        debug!("Running {} {:?} {:?}", self.program, self.args, app_name);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(app_name)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| PanelError::Io {
                message: format!("Failed to run launcher '{}': {}", self.program, e),
                path: None,
                source: Some(e),
            })?;
        let stderr = child.stderr.take();

        // Only the launcher's own exit is bounded. Whatever it started may
        // keep the inherited stderr pipe open long after.
        let status = match tokio::time::timeout(self.timeout, child.wait()).await {
            Ok(status) => status.map_err(|e| PanelError::Io {
                message: format!("Failed waiting for launcher '{}': {}", self.program, e),
                path: None,
                source: Some(e),
            })?,
            Err(_) => {
                error!("Timeout opening {}", app_name);
                // Dropping the child kills it.
                return Err(PanelError::Timeout {
                    app: app_name.to_string(),
                    after: self.timeout,
                });
            }
        };

        if !status.success() {
            let stderr = match stderr {
                Some(pipe) => read_buffered_stderr(pipe).await,
                None => String::new(),
            };
            let message = match stderr.trim() {
                "" => LaunchConfig::DEFAULT_FAILURE_MESSAGE.to_string(),
                text => text.to_string(),
            };
            error!("Error opening {}: {}", app_name, message);
            return Err(PanelError::LaunchFailed {
                app: app_name.to_string(),
                message,
            });
        }

        info!("Successfully opened {}", app_name);
        Ok(LaunchOutcome::opened(app_name))
    }
}

/// Collect what an exited launcher wrote to stderr.
///
/// Reading stops at EOF or after `LaunchConfig::STDERR_DRAIN`, whichever
/// comes first; bytes read before the bound are kept.
async fn read_buffered_stderr(mut pipe: ChildStderr) -> String {
    let mut buf = Vec::new();
    if tokio::time::timeout(LaunchConfig::STDERR_DRAIN, pipe.read_to_end(&mut buf))
        .await
        .is_err()
    {
        debug!("Launcher stderr still open after exit, using {} bytes", buf.len());
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_zero_exit_is_success() {
        let launcher = CommandLauncher::new("true", Vec::<String>::new());
        let outcome = launcher.launch("Safari").await.unwrap();
        assert_eq!(outcome, LaunchOutcome::opened("Safari"));
        assert_eq!(outcome.message, "Opened Safari");
    }

    #[tokio::test]
    async fn test_non_zero_exit_carries_stderr() {
        let launcher = CommandLauncher::new(
            "sh",
            ["-c", "echo \"Unable to find application named '$0'\" >&2; exit 1"],
        );
        let err = launcher.launch("Nope").await.unwrap_err();
        match err {
            PanelError::LaunchFailed { app, message } => {
                assert_eq!(app, "Nope");
                assert_eq!(message, "Unable to find application named 'Nope'");
            }
            other => panic!("expected LaunchFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_zero_exit_with_lingering_child_is_success() {
        // The background sleep inherits stderr and outlives the launcher.
        let launcher = CommandLauncher::new("sh", ["-c", "sleep 30 & exit 0"])
            .with_timeout(Duration::from_secs(1));

        let started = std::time::Instant::now();
        let outcome = launcher.launch("App").await.unwrap();

        assert_eq!(outcome, LaunchOutcome::opened("App"));
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_failure_with_lingering_child_keeps_stderr() {
        let launcher = CommandLauncher::new("sh", ["-c", "echo denied >&2; sleep 30 & exit 2"])
            .with_timeout(Duration::from_secs(5));

        let started = std::time::Instant::now();
        let err = launcher.launch("App").await.unwrap_err();

        assert!(matches!(
            err,
            PanelError::LaunchFailed { ref message, .. } if message == "denied"
        ));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_non_zero_exit_without_stderr_uses_default_message() {
        let launcher = CommandLauncher::new("false", Vec::<String>::new());
        let err = launcher.launch("Mail").await.unwrap_err();
        assert!(matches!(
            err,
            PanelError::LaunchFailed { ref message, .. }
                if message == LaunchConfig::DEFAULT_FAILURE_MESSAGE
        ));
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_elapsed_bound_is_timeout() {
        let launcher = CommandLauncher::new("sleep", Vec::<String>::new())
            .with_timeout(Duration::from_millis(100));

        let started = std::time::Instant::now();
        let err = launcher.launch("5").await.unwrap_err();

        assert!(matches!(err, PanelError::Timeout { .. }));
        assert_eq!(err.status_code(), 408);
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_missing_launcher_is_internal() {
        let launcher = CommandLauncher::new("/nonexistent/launcher/binary", Vec::<String>::new());
        let err = launcher.launch("Finder").await.unwrap_err();
        assert!(matches!(err, PanelError::Io { .. }));
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn test_empty_app_name_is_rejected() {
        let launcher = CommandLauncher::new("true", Vec::<String>::new());
        let err = launcher.launch("   ").await.unwrap_err();
        assert!(matches!(err, PanelError::Validation { .. }));
    }

    #[test]
    fn test_defaults() {
        let launcher = CommandLauncher::platform_default();
        assert_eq!(launcher.timeout(), LaunchConfig::TIMEOUT);
        assert!(!launcher.program().is_empty());
    }
}
