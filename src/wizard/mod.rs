pub mod navigation;
pub mod output;
pub mod preview;
pub mod session;
pub mod state;
