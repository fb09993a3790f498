use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = ".github/workflows";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSettings {
    pub output_dir: PathBuf,
    /// Catalog file to load instead of the embedded one.
    pub catalog_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
    /// Comma-separated key tokens for a non-interactive run.
    pub script: Option<String>,
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            catalog_path: None,
            log_path: None,
            script: None,
        }
    }
}

impl WizardSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.output_dir.as_os_str().is_empty() {
            return Err("output directory must be non-empty".to_string());
        }
        if let Some(path) = &self.catalog_path {
            if path.as_os_str().is_empty() {
                return Err("catalog path must be non-empty".to_string());
            }
        }
        if let Some(path) = &self.log_path {
            if path.as_os_str().is_empty() {
                return Err("log file path must be non-empty".to_string());
            }
        }
        if let Some(script) = &self.script {
            if script.trim().is_empty() {
                return Err("script must contain at least one key token".to_string());
            }
        }
        Ok(())
    }
}
