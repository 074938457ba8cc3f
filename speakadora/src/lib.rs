mod config;
mod identity;
pub mod links;
mod settings;
mod stats;
#[cfg(test)]
mod testing;

pub use config::{AppConfig, PremiumPlan};
pub use identity::{
    resolve_display_name, resolve_identity, HostContext, HostUser, PageLocation, UserIdentifier,
    TELEGRAM_ID_PARAM,
};
pub use settings::{
    KeyValueStore, MemoryStore, SelectorState, Selectors, SettingKey, SettingsError,
    SettingsStore, StoreError,
};
pub use stats::{
    referral_milestones, AccountStatus, MilestoneProgress, PremiumProgress, StatsLines, TalkTime,
    UserProfile, UserStats, PREMIUM_STATUS,
};
