//! Platform defaults for opening an application by its display name.
//!
//! All `#[cfg]` blocks for OS-specific launcher behaviour live here.

/// Returns the current platform name.
pub fn current_platform() -> &'static str {
    #[cfg(target_os = "linux")]
    {
        "linux"
    }
    #[cfg(target_os = "windows")]
    {
        "windows"
    }
    #[cfg(target_os = "macos")]
    {
        "macos"
    }
    #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
    {
        "unknown"
    }
}

/// Program and leading arguments of the host's "open app by name" facility.
///
/// The application name is appended as the final argument.
pub fn default_launcher_command() -> (&'static str, Vec<&'static str>) {
    #[cfg(target_os = "macos")]
    {
        ("open", vec!["-a"])
    }
    #[cfg(target_os = "windows")]
    {
        ("cmd", vec!["/C", "start", ""])
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        // Resolves desktop entries by name on XDG systems.
        ("gtk-launch", vec![])
    }
}
