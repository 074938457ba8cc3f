use std::rc::Rc;

use speakadora::links::{api_request_url, ApiResource};
use speakadora::{resolve_identity, AppConfig, UserIdentifier};
use yew::{hook, use_context};

use crate::location::BrowserLocation;
use crate::telegram::TelegramHost;

/// Get the app config from context.
#[hook]
pub fn use_config() -> Rc<AppConfig> {
    use_context::<Rc<AppConfig>>().expect("expected app config context to be set")
}

/// Resolves the active user's identity from the current host and page. Every caller resolves
/// independently; nothing is cached.
pub fn current_identity(config: &AppConfig) -> Option<UserIdentifier> {
    resolve_identity(&TelegramHost::new(), &BrowserLocation::current(), config)
}

/// URL to request `resource` for the current user, or `None` when nothing should be requested.
pub fn current_request_url(config: &AppConfig, resource: ApiResource) -> Option<String> {
    api_request_url(
        config,
        &TelegramHost::new(),
        &BrowserLocation::current(),
        resource,
    )
}
