//! Application launch methods on PanelApi.

use crate::error::{PanelError, Result};
use crate::launch::LaunchOutcome;
use crate::PanelApi;

impl PanelApi {
    /// Open an application on the host by its display name.
    ///
    /// The launch runs on its own task, so dropping the returned future
    /// (for example when an HTTP client disconnects) does not abort the
    /// spawned launcher process.
    pub async fn open_app(&self, app_name: &str) -> Result<LaunchOutcome> {
        let launcher = self.launcher.clone();
        let app_name = app_name.to_string();

        tokio::spawn(async move { launcher.launch(&app_name).await })
            .await
            .map_err(|e| PanelError::Other(format!("Launch task failed: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use crate::launch::{AppLauncher, LaunchOutcome};
    use crate::{PanelApi, PanelError, Result};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    /// Records requested names; fails for "Broken".
    #[derive(Default, Clone)]
    struct RecordingLauncher {
        launched: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl AppLauncher for RecordingLauncher {
        async fn launch(&self, app_name: &str) -> Result<LaunchOutcome> {
            self.launched.lock().unwrap().push(app_name.to_string());
            if app_name == "Broken" {
                return Err(PanelError::LaunchFailed {
                    app: app_name.to_string(),
                    message: "not installed".to_string(),
                });
            }
            Ok(LaunchOutcome::opened(app_name))
        }
    }

    #[tokio::test]
    async fn test_open_app_uses_configured_launcher() {
        let temp_dir = TempDir::new().unwrap();
        let launcher = RecordingLauncher::default();
        let api = PanelApi::builder(temp_dir.path())
            .with_launcher(launcher.clone())
            .build()
            .unwrap();

        let outcome = api.open_app("Calculator").await.unwrap();
        assert_eq!(outcome.status, "success");
        assert_eq!(outcome.message, "Opened Calculator");

        let err = api.open_app("Broken").await.unwrap_err();
        assert_eq!(err.status_code(), 400);

        assert_eq!(
            *launcher.launched.lock().unwrap(),
            vec!["Calculator".to_string(), "Broken".to_string()]
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_open_app_with_command_override() {
        let temp_dir = TempDir::new().unwrap();
        let api = PanelApi::builder(temp_dir.path())
            .launcher_command("sleep", Vec::<String>::new())
            .launch_timeout(std::time::Duration::from_millis(50))
            .build()
            .unwrap();

        let err = api.open_app("5").await.unwrap_err();
        assert!(matches!(err, PanelError::Timeout { .. }));
    }
}
