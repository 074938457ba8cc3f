use log::warn;
use speakadora::links::{referral_link, COPY_CONFIRMATION_MESSAGE, COPY_CONFIRMATION_TITLE};
use yew::{function_component, html, use_callback, use_memo, Html, MouseEvent};

use crate::context::{current_identity, use_config};
use crate::stats::use_stats_lines;
use crate::telegram::{write_clipboard, TelegramHost};

/// Shown in place of the referral link when no identity could be resolved.
const NO_IDENTITY_MESSAGE: &str = "Please open the application through Telegram";

/// Copies the link, then confirms to the user whether or not the copy worked.
fn copy_referral_link(link: String) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = write_clipboard(&link).await {
            warn!("Unable to copy referral link: {}", e);
        }
        let host = TelegramHost::new();
        if let Err(e) = host.show_popup(COPY_CONFIRMATION_TITLE, COPY_CONFIRMATION_MESSAGE) {
            warn!("Unable to show copy confirmation: {}", e);
        }
    });
}

/// Invite progress, the referral link, and the number of friends invited so far.
#[function_component]
pub fn GiftSection() -> Html {
    let lines = use_stats_lines();

    html! {
        <div class="gift-section">
            <div>{"🎁 Invite friends and get Premium"}</div>
            <div>{lines.premium_progress}</div>
            <ReferralLink />
            <div>{lines.invited_friends}</div>
        </div>
    }
}

#[function_component]
fn ReferralLink() -> Html {
    let config = use_config();
    let link = use_memo(config, |config| {
        current_identity(config).map(|id| referral_link(config, &id))
    });

    let onclick = use_callback(link.clone(), |e: MouseEvent, link| {
        e.prevent_default();
        if let Some(link) = &**link {
            copy_referral_link(link.clone());
        }
    });

    match &*link {
        Some(href) => html! {
            <a id="invite-link" class="invite-link" href={href.clone()} {onclick}>
                {"Click to copy your referral link"}
            </a>
        },
        None => html! {
            <a id="invite-link" class="invite-link">{NO_IDENTITY_MESSAGE}</a>
        },
    }
}
