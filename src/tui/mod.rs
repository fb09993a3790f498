pub mod theme;
pub mod view;
pub mod wizard;

pub use theme::Theme;
pub use view::{project_wizard_view, LineEmphasis, ProgressMark, ViewLine, WizardViewModel};
pub use wizard::{draw_wizard_screen, run_wizard_scripted, run_wizard_tui};
