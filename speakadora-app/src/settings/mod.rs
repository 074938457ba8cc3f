//! The settings page: dropdowns for each preference plus a reset button.

pub use self::manager::{use_settings, use_settings_dispatcher, SettingsManager};
pub use self::panel::SettingsPanel;

mod manager;
mod panel;
