pub mod settings;

pub use settings::{WizardSettings, DEFAULT_OUTPUT_DIR};
