//! Data directory and file loading
//!
//! Directory structure:
//! ~/.alpha-vault/
//!   config.yaml          # Metric weights, insight thresholds, currency
//!   vault.log            # Rotating log file
//!
//! Ledger files live wherever the user keeps them and are passed by path.

use std::fs;
use std::path::{Path, PathBuf};

use vault_core::MetricsConfig;

use super::ledger::{LedgerData, LedgerFormat};

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Manages the application data directory
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    /// Create a new DataDirectory instance
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.alpha-vault/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".alpha-vault")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the path to config.yaml
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    /// Create the data directory if it does not exist yet
    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Load the metrics config, falling back to defaults when the file is missing
    pub fn load_config(&self) -> Result<MetricsConfig, StorageError> {
        let config_path = self.config_path();
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(MetricsConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| StorageError::Io(format!("Failed to read config: {}", e)))?;

        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Save the metrics config
    pub fn save_config(&self, config: &MetricsConfig) -> Result<(), StorageError> {
        self.init()?;
        let yaml = serde_saphyr::to_string(config)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize config: {}", e)))?;

        fs::write(self.config_path(), yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write config: {}", e)))
    }
}

/// Load a ledger file, choosing the parser from its extension
pub fn load_ledger(path: &Path) -> Result<LedgerData, StorageError> {
    let content = fs::read_to_string(path).map_err(|e| {
        StorageError::Io(format!("Failed to read ledger {}: {}", path.display(), e))
    })?;

    let ledger = match LedgerFormat::from_path(path) {
        LedgerFormat::Json => LedgerData::from_json(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse JSON: {}", e)))?,
        LedgerFormat::Yaml => LedgerData::from_yaml(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse YAML: {}", e)))?,
    };

    tracing::info!(
        path = %path.display(),
        records = ledger.records().map_or(0, <[_]>::len),
        has_period_totals = !ledger.period_totals.is_empty(),
        "Loaded ledger"
    );
    Ok(ledger)
}
