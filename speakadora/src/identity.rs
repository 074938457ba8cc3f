//! Resolution of the active user's identity from the embedding host and the page location.

use std::fmt;

use implicit_clone::unsync::IString;
use log::info;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::stats::UserProfile;

/// Query parameter which may carry the user's id when the host does not.
pub const TELEGRAM_ID_PARAM: &str = "telegram_id";

/// Opaque identifier of the requesting user, carried verbatim into outgoing requests.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct UserIdentifier(IString);

impl UserIdentifier {
    /// Wraps an identifier token.
    pub fn new(id: impl Into<IString>) -> Self {
        Self(id.into())
    }

    /// The identifier as it should appear in a URL.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated user record supplied by the embedding host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostUser {
    /// Numeric id of the user.
    pub id: i64,
    /// The user's handle, if they have one.
    pub username: Option<String>,
}

/// Largest integer a JS number holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl HostUser {
    /// Converts a user id delivered as a JS number. Ids with a fractional part, or outside the
    /// range a JS number holds exactly, have no decimal form the backend would recognize and are
    /// rejected.
    pub fn id_from_number(id: f64) -> Option<i64> {
        if id.is_finite() && id.fract() == 0.0 && id.abs() <= MAX_SAFE_INTEGER {
            Some(id as i64)
        } else {
            None
        }
    }
}

/// Capabilities of the host application the mini app is embedded in.
pub trait HostContext {
    /// The authenticated user, if the host has finished initializing and exposes one.
    fn user(&self) -> Option<HostUser>;
}

/// Read access to the location of the current page.
pub trait PageLocation {
    /// Value of the query parameter `name`, if it is present.
    fn query_param(&self, name: &str) -> Option<String>;

    /// Host name the page was served from.
    fn hostname(&self) -> String;
}

/// Determines the active user's identifier.
///
/// Sources are tried in order and the first one that yields a value wins:
/// 1. The user id exposed by the host.
/// 2. A non-empty `telegram_id` query parameter.
/// 3. The development sentinel, only when running on a development host.
///
/// Returns `None` when no source applies. That is an expected outcome (for instance before the
/// host has initialized), not an error.
pub fn resolve_identity(
    host: &impl HostContext,
    location: &impl PageLocation,
    config: &AppConfig,
) -> Option<UserIdentifier> {
    if let Some(user) = host.user() {
        return Some(UserIdentifier::new(user.id.to_string()));
    }

    if let Some(id) = location
        .query_param(TELEGRAM_ID_PARAM)
        .filter(|id| !id.is_empty())
    {
        return Some(UserIdentifier::new(id));
    }

    if config.is_development_host(&location.hostname()) {
        info!(
            "Using demo telegram_id for development: {}",
            config.development_sentinel
        );
        return Some(UserIdentifier::new(config.development_sentinel.clone()));
    }

    info!("No telegram user data available, waiting for WebApp initialization");
    None
}

/// Picks the name to greet the user with.
///
/// The host's username wins over the fetched profile name, which wins over the configured
/// fallback. Empty names are skipped.
pub fn resolve_display_name(
    profile: Option<&UserProfile>,
    host_user: Option<&HostUser>,
    config: &AppConfig,
) -> IString {
    let host_name = host_user.and_then(|user| user.username.as_deref());
    let profile_name = profile.and_then(|profile| profile.name.as_deref());
    match host_name
        .into_iter()
        .chain(profile_name)
        .find(|name| !name.is_empty())
    {
        Some(name) => IString::from(name.to_owned()),
        None => config.fallback_display_name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{host_user, FakeHost, FakeLocation};

    #[test]
    fn host_user_wins_over_every_other_source() {
        let config = AppConfig::default();
        let host = FakeHost(Some(host_user(987654321, None)));
        let location = FakeLocation::new("localhost").with_param(TELEGRAM_ID_PARAM, "555");

        let id = resolve_identity(&host, &location, &config);
        assert_eq!(id, Some(UserIdentifier::new("987654321")));
    }

    #[test]
    fn query_param_wins_over_development_sentinel() {
        let config = AppConfig::default();
        let location = FakeLocation::new("localhost").with_param(TELEGRAM_ID_PARAM, "555");

        let id = resolve_identity(&FakeHost::default(), &location, &config);
        assert_eq!(id, Some(UserIdentifier::new("555")));
    }

    #[test]
    fn query_param_is_kept_verbatim() {
        let config = AppConfig::default();
        let location = FakeLocation::new("speakadora.app").with_param(TELEGRAM_ID_PARAM, "abc 12");

        let id = resolve_identity(&FakeHost::default(), &location, &config);
        assert_eq!(id.as_ref().map(UserIdentifier::as_str), Some("abc 12"));
    }

    #[test]
    fn empty_query_param_falls_through() {
        let config = AppConfig::default();
        let location = FakeLocation::new("my-app.replit.dev").with_param(TELEGRAM_ID_PARAM, "");

        let id = resolve_identity(&FakeHost::default(), &location, &config);
        assert_eq!(id, Some(UserIdentifier::new("12345")));
    }

    #[test]
    fn development_sentinel_on_localhost() {
        let config = AppConfig::default();
        let id = resolve_identity(&FakeHost::default(), &FakeLocation::new("localhost"), &config);
        assert_eq!(id, Some(UserIdentifier::new("12345")));
    }

    #[test]
    fn production_host_without_sources_is_absent() {
        let config = AppConfig::default();
        let id = resolve_identity(
            &FakeHost::default(),
            &FakeLocation::new("speakadora.app"),
            &config,
        );
        assert_eq!(id, None);
    }

    #[test]
    fn negative_host_ids_are_rendered_in_decimal() {
        let config = AppConfig::default();
        let host = FakeHost(Some(host_user(-42, None)));
        let id = resolve_identity(&host, &FakeLocation::new("speakadora.app"), &config);
        assert_eq!(id.map(|id| id.to_string()), Some("-42".to_owned()));
    }

    #[test]
    fn display_name_prefers_host_username() {
        let config = AppConfig::default();
        let profile = UserProfile {
            name: Some("Profile Name".to_owned()),
            avatar: None,
        };
        let host = host_user(1, Some("tg_handle"));

        let name = resolve_display_name(Some(&profile), Some(&host), &config);
        assert_eq!(name.as_str(), "tg_handle");
    }

    #[test]
    fn display_name_falls_back_to_profile_then_default() {
        let config = AppConfig::default();
        let profile = UserProfile {
            name: Some("Profile Name".to_owned()),
            avatar: None,
        };
        let host = host_user(1, Some(""));

        assert_eq!(
            resolve_display_name(Some(&profile), Some(&host), &config).as_str(),
            "Profile Name"
        );
        assert_eq!(
            resolve_display_name(None, Some(&host), &config).as_str(),
            "Student"
        );
        assert_eq!(resolve_display_name(None, None, &config).as_str(), "Student");
    }

    #[test]
    fn numeric_ids_must_be_whole() {
        assert_eq!(HostUser::id_from_number(987654321.0), Some(987654321));
        assert_eq!(HostUser::id_from_number(-42.0), Some(-42));
        assert_eq!(HostUser::id_from_number(12.5), None);
        assert_eq!(HostUser::id_from_number(f64::NAN), None);
        assert_eq!(HostUser::id_from_number(f64::INFINITY), None);
        assert_eq!(HostUser::id_from_number(1e300), None);
    }
}
