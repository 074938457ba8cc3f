use std::rc::Rc;

use log::warn;
use speakadora::AppConfig;
use yew::{function_component, html, use_effect_with, use_memo, ContextProvider, Html};

use crate::achievements::AchievementsGrid;
use crate::location::BrowserLocation;
use crate::premium::PremiumLinks;
use crate::profile::ProfileHeader;
use crate::settings::{SettingsManager, SettingsPanel};
use crate::stats::{GiftSection, StatsPanel, StatsProvider};
use crate::telegram::TelegramHost;

/// Which page of the mini app is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Profile, statistics, referral and premium offers.
    Home,
    /// Referral milestones.
    Achievements,
    /// User preferences.
    Settings,
}

impl Page {
    /// Picks the page from the last segment of the URL path, ignoring a trailing `.html`.
    pub fn from_path(path: &str) -> Self {
        let last = path.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
        match last.strip_suffix(".html").unwrap_or(last) {
            "achievements" => Page::Achievements,
            "settings" => Page::Settings,
            _ => Page::Home,
        }
    }
}

#[function_component]
pub fn App() -> Html {
    let config = use_memo((), |()| AppConfig::default());
    let page = use_memo((), |()| Page::from_path(&BrowserLocation::current().pathname()));

    use_effect_with((), |()| {
        if let Err(e) = TelegramHost::new().expand_and_ready() {
            warn!("Unable to signal the host: {}", e);
        }
    });

    let body = match *page {
        Page::Home => html! {
            <StatsProvider>
                <ProfileHeader />
                <StatsPanel />
                <GiftSection />
                <PremiumLinks />
            </StatsProvider>
        },
        Page::Achievements => html! {
            <StatsProvider>
                <ProfileHeader />
                <AchievementsGrid />
            </StatsProvider>
        },
        Page::Settings => html! {
            <SettingsManager>
                <SettingsPanel />
            </SettingsManager>
        },
    };

    html! {
        <ContextProvider<Rc<AppConfig>> context={config}>
            <div class="App">
                {body}
            </div>
        </ContextProvider<Rc<AppConfig>>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_from_paths() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/static/index.html"), Page::Home);
        assert_eq!(Page::from_path("/achievements"), Page::Achievements);
        assert_eq!(Page::from_path("/static/achievements.html"), Page::Achievements);
        assert_eq!(Page::from_path("/settings/"), Page::Settings);
        assert_eq!(Page::from_path("/static/settings.html"), Page::Settings);
    }
}
