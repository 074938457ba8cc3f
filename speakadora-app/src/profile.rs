use std::rc::Rc;

use log::error;
use speakadora::links::ApiResource;
use speakadora::{resolve_display_name, HostContext, UserProfile};
use yew::{function_component, html, use_effect_with, use_memo, use_state_eq, AttrValue, Html};

use crate::api::fetch_profile;
use crate::context::{current_request_url, use_config};
use crate::telegram::TelegramHost;

/// The user's avatar and name.
///
/// Until the profile arrives the name comes from the host alone, and the placeholder avatar is
/// shown.
#[function_component]
pub fn ProfileHeader() -> Html {
    let config = use_config();
    let profile = use_state_eq(|| None::<Rc<UserProfile>>);
    let host_user = use_memo((), |()| TelegramHost::new().user());

    use_effect_with((), {
        let config = config.clone();
        let setter = profile.setter();
        move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                let Some(url) = current_request_url(&config, ApiResource::Profile) else {
                    return;
                };
                match fetch_profile(url).await {
                    Ok(loaded) => setter.set(Some(Rc::new(loaded))),
                    Err(e) => error!("Error fetching profile: {}", e),
                }
            });
        }
    });

    let name = resolve_display_name(profile.as_deref(), (*host_user).as_ref(), &config);
    let avatar = profile
        .as_deref()
        .and_then(|profile| profile.avatar.clone())
        .map(AttrValue::from)
        .unwrap_or_else(|| config.placeholder_avatar.clone());

    html! {
        <div class="profile">
            <img class="profile-pic" src={avatar} alt="avatar" />
            <div id="user-name">{name}</div>
        </div>
    }
}
