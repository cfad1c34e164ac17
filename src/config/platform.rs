//! Execution platform detection

/// The operating system family veeamrun runs on.
///
/// Selects both the backup strategy and the default file locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Veeam Agent for Linux, driven through `veeamconfig` sessions
    Linux,
    /// Veeam on Windows, driven through the agent executable or PowerShell
    Windows,
}

impl Platform {
    /// Detect the platform of the running binary.
    ///
    /// Anything that is not Linux is assumed to be Windows.
    pub fn detect() -> Self {
        if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            Platform::Windows
        }
    }
}
