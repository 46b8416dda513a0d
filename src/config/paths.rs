//! Path management for cashflow-cli
//!
//! Provides platform-appropriate path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `CASHFLOW_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory via `directories`
//!    (`~/.config/cashflow-cli` on Linux, `%APPDATA%\cashflow-cli` on
//!    Windows, `~/Library/Application Support/cashflow-cli` on macOS)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::CashflowError;

/// Manages all paths used by cashflow-cli
#[derive(Debug, Clone)]
pub struct CashflowPaths {
    /// Base directory for all cashflow-cli data
    base_dir: PathBuf,
}

impl CashflowPaths {
    /// Create a new CashflowPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, CashflowError> {
        let base_dir = if let Ok(custom) = std::env::var("CASHFLOW_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "cashflow-cli").ok_or_else(|| {
                CashflowError::Config("Could not determine a home directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create CashflowPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Get the path to invoices.json
    pub fn invoices_file(&self) -> PathBuf {
        self.data_dir().join("invoices.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), CashflowError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CashflowError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CashflowError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if cashflow-cli has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
