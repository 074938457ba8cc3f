//! User preferences persisted in a key-value store, one entry per setting.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use implicit_clone::unsync::IString;
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use self::selector::{SelectorState, Selectors};

mod selector;

/// Error from working with settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{0:?} is not a known setting.")]
    UnknownKey(String),
    #[error("{value:?} is not a valid choice for {key}.")]
    InvalidChoice { key: SettingKey, value: String },
}

/// Error from writing to a [`KeyValueStore`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Unable to write {key}: {message}")]
    Write { key: String, message: String },
}

/// Persistent string key-value storage.
pub trait KeyValueStore {
    /// Gets the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any existing value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// [`KeyValueStore`] held in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// One of the user's preferences.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum SettingKey {
    MessageMode,
    SpeechSpeed,
    LanguageLevel,
    Hints,
}

impl SettingKey {
    /// Every setting, in display order.
    pub const ALL: [SettingKey; 4] = [
        SettingKey::MessageMode,
        SettingKey::SpeechSpeed,
        SettingKey::LanguageLevel,
        SettingKey::Hints,
    ];

    /// Key the setting is persisted under.
    pub fn storage_key(self) -> &'static str {
        match self {
            SettingKey::MessageMode => "message-mode",
            SettingKey::SpeechSpeed => "speech-speed",
            SettingKey::LanguageLevel => "language-level",
            SettingKey::Hints => "hints",
        }
    }

    /// Title shown next to the setting.
    pub fn title(self) -> &'static str {
        match self {
            SettingKey::MessageMode => "Message mode",
            SettingKey::SpeechSpeed => "Speech speed",
            SettingKey::LanguageLevel => "Language level",
            SettingKey::Hints => "Hints",
        }
    }

    /// Value used before the user chooses one.
    pub fn default_value(self) -> &'static str {
        match self {
            SettingKey::MessageMode => "Voice and text",
            SettingKey::SpeechSpeed => "1.0X",
            SettingKey::LanguageLevel => "Not selected",
            SettingKey::Hints => "Enabled",
        }
    }

    /// Every value the user may choose. Always contains the default.
    pub fn choices(self) -> &'static [&'static str] {
        match self {
            SettingKey::MessageMode => &["Voice and text", "Voice only", "Text only"],
            SettingKey::SpeechSpeed => &["0.5X", "0.75X", "1.0X", "1.25X", "1.5X"],
            SettingKey::LanguageLevel => &[
                "Not selected",
                "Beginner (A1)",
                "Elementary (A2)",
                "Intermediate (B1)",
                "Upper-Intermediate (B2)",
                "Advanced (C1)",
            ],
            SettingKey::Hints => &["Enabled", "Disabled"],
        }
    }

    /// Finds `value` among the choices for this setting.
    fn choice(self, value: &str) -> Option<&'static str> {
        self.choices().iter().copied().find(|&choice| choice == value)
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_key())
    }
}

impl FromStr for SettingKey {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::ALL
            .into_iter()
            .find(|key| key.storage_key() == s)
            .ok_or_else(|| SettingsError::UnknownKey(s.to_owned()))
    }
}

/// Displayed settings values backed by a persistent store, plus the state of each setting's
/// dropdown.
#[derive(Debug)]
pub struct SettingsStore<S> {
    store: S,
    values: BTreeMap<SettingKey, IString>,
    selectors: Selectors,
}

impl<S: KeyValueStore> SettingsStore<S> {
    /// Creates a store displaying the defaults. Nothing is read from `store` until
    /// [`load_setting`](Self::load_setting) or [`load_all`](Self::load_all) is called.
    pub fn new(store: S) -> Self {
        Self {
            store,
            values: SettingKey::ALL
                .into_iter()
                .map(|key| (key, IString::Static(key.default_value())))
                .collect(),
            selectors: Selectors::default(),
        }
    }

    /// Loads the persisted value of `key` into the displayed value and returns it. If nothing
    /// usable is persisted the displayed value is left as is. Never writes to the store.
    pub fn load_setting(&mut self, key: SettingKey) -> IString {
        match self.store.get(key.storage_key()) {
            Some(saved) if saved.is_empty() => {}
            Some(saved) => match key.choice(&saved) {
                Some(choice) => {
                    self.values.insert(key, IString::Static(choice));
                }
                None => warn!("Ignoring saved value {saved:?} for {key}"),
            },
            None => {}
        }
        self.value(key)
    }

    /// Loads every setting from the store.
    pub fn load_all(&mut self) {
        for key in SettingKey::ALL {
            self.load_setting(key);
        }
    }

    /// The value currently displayed for `key`.
    pub fn value(&self, key: SettingKey) -> IString {
        self.values
            .get(&key)
            .cloned()
            .unwrap_or(IString::Static(key.default_value()))
    }

    /// Selects `value` for `key`, persists it, and collapses every dropdown.
    pub fn select_setting(&mut self, key: SettingKey, value: &str) -> Result<(), SettingsError> {
        let choice = key.choice(value).ok_or_else(|| SettingsError::InvalidChoice {
            key,
            value: value.to_owned(),
        })?;
        self.values.insert(key, IString::Static(choice));
        self.persist(key, choice);
        self.selectors.close_all();
        Ok(())
    }

    /// Restores every setting to its default, overwriting whatever is persisted.
    pub fn reset_all(&mut self) {
        for key in SettingKey::ALL {
            let default = key.default_value();
            self.values.insert(key, IString::Static(default));
            self.persist(key, default);
        }
    }

    /// State of every dropdown.
    pub fn selectors(&self) -> Selectors {
        self.selectors
    }

    /// Handles a click on the item for `key`.
    pub fn click_item(&mut self, key: SettingKey) {
        self.selectors.click_item(key);
    }

    /// Handles a click outside every setting item.
    pub fn click_outside(&mut self) {
        self.selectors.close_all();
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the settings, returning the backing store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Try to write a value to the store, logging errors.
    fn persist(&mut self, key: SettingKey, value: &str) {
        if let Err(e) = self.store.set(key.storage_key(), value) {
            warn!("Unable to save setting: {}", e);
        }
    }
}
