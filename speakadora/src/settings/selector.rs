use crate::settings::SettingKey;

/// Whether a setting's dropdown is showing its options.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    #[default]
    Collapsed,
    Open,
}

/// Open/closed state of every setting dropdown. At most one dropdown is open at a time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Selectors {
    /// The dropdown which is open, if any.
    open: Option<SettingKey>,
}

impl Selectors {
    /// State of the dropdown for `key`.
    pub fn state(&self, key: SettingKey) -> SelectorState {
        if self.open == Some(key) {
            SelectorState::Open
        } else {
            SelectorState::Collapsed
        }
    }

    /// The dropdown which is currently open.
    pub fn open_item(&self) -> Option<SettingKey> {
        self.open
    }

    /// Handles a click on the item for `key`. A collapsed item opens and collapses every other
    /// item; an open item collapses.
    pub fn click_item(&mut self, key: SettingKey) {
        self.open = match self.open {
            Some(open) if open == key => None,
            _ => Some(key),
        };
    }

    /// Collapses every dropdown.
    pub fn close_all(&mut self) {
        self.open = None;
    }
}
