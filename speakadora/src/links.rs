//! Construction of the URLs the client requests or hands to the user.
//!
//! Identifiers are inserted verbatim. They come from the host (numeric) or from the page's own
//! query string, so no further escaping is applied.

use std::fmt;

use log::info;

use crate::config::AppConfig;
use crate::identity::{
    resolve_identity, HostContext, PageLocation, UserIdentifier, TELEGRAM_ID_PARAM,
};

/// Title of the popup shown after the referral link is copied.
pub const COPY_CONFIRMATION_TITLE: &str = "Link Copied!";
/// Body of the popup shown after the referral link is copied.
pub const COPY_CONFIRMATION_MESSAGE: &str = "Share this link with your friends to invite them";

/// Deep link into the bot which credits `id` with the referral.
pub fn referral_link(config: &AppConfig, id: &UserIdentifier) -> String {
    format!("https://t.me/{}?start=ref{id}", config.bot_username)
}

/// Appends the user's id to a premium offer link.
pub fn with_telegram_id(href: &str, id: &UserIdentifier) -> String {
    format!("{href}?{TELEGRAM_ID_PARAM}={id}")
}

/// Backend endpoints the client reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiResource {
    Stats,
    Profile,
}

impl ApiResource {
    fn path(self, config: &AppConfig) -> &str {
        match self {
            Self::Stats => config.stats_path.as_str(),
            Self::Profile => config.profile_path.as_str(),
        }
    }
}

impl fmt::Display for ApiResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stats => f.write_str("stats"),
            Self::Profile => f.write_str("profile"),
        }
    }
}

/// URL of `resource` for `id`.
pub fn api_url(config: &AppConfig, resource: ApiResource, id: &UserIdentifier) -> String {
    with_telegram_id(resource.path(config), id)
}

/// URL to request `resource` for the active user.
///
/// Returns `None` when no identity can be resolved. The caller must then not issue the request.
pub fn api_request_url(
    config: &AppConfig,
    host: &impl HostContext,
    location: &impl PageLocation,
    resource: ApiResource,
) -> Option<String> {
    let Some(id) = resolve_identity(host, location, config) else {
        info!("No telegram_id provided, skipping {resource} request");
        return None;
    };
    Some(api_url(config, resource, &id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{host_user, FakeHost, FakeLocation};

    #[test]
    fn referral_link_targets_bot() {
        let config = AppConfig::default();
        let id = UserIdentifier::new("42");
        assert_eq!(
            referral_link(&config, &id),
            "https://t.me/Speakadora_bot?start=ref42"
        );
    }

    #[test]
    fn api_urls_carry_identifier() {
        let config = AppConfig::default();
        let id = UserIdentifier::new("42");
        assert_eq!(
            api_url(&config, ApiResource::Stats, &id),
            "/api/stats?telegram_id=42"
        );
        assert_eq!(
            api_url(&config, ApiResource::Profile, &id),
            "/api/profile?telegram_id=42"
        );
    }

    #[test]
    fn no_request_without_identity() {
        let config = AppConfig::default();
        let host = FakeHost::default();
        let location = FakeLocation::new("speakadora.app");
        for resource in [ApiResource::Stats, ApiResource::Profile] {
            assert_eq!(api_request_url(&config, &host, &location, resource), None);
        }
    }

    #[test]
    fn request_uses_resolved_identity() {
        let config = AppConfig::default();
        let host = FakeHost(Some(host_user(7, None)));
        let location = FakeLocation::new("speakadora.app").with_param(TELEGRAM_ID_PARAM, "555");
        assert_eq!(
            api_request_url(&config, &host, &location, ApiResource::Stats).as_deref(),
            Some("/api/stats?telegram_id=7")
        );

        let location = FakeLocation::new("speakadora.app").with_param(TELEGRAM_ID_PARAM, "555");
        assert_eq!(
            api_request_url(&config, &FakeHost::default(), &location, ApiResource::Profile)
                .as_deref(),
            Some("/api/profile?telegram_id=555")
        );
    }

    #[test]
    fn premium_links_get_identifier_appended() {
        let config = AppConfig::default();
        let id = UserIdentifier::new("42");
        let links: Vec<_> = config
            .premium_plans
            .as_slice()
            .iter()
            .map(|plan| with_telegram_id(plan.href.as_str(), &id))
            .collect();
        assert_eq!(
            links,
            [
                "/static/premium-month.html?telegram_id=42",
                "/static/premium-year.html?telegram_id=42",
            ]
        );
    }
}
