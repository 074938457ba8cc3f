//! Usage statistics fetched once per page and shared by every panel that shows them.

use std::rc::Rc;

use log::error;
use speakadora::links::ApiResource;
use speakadora::{StatsLines, UserStats};
use yew::{
    function_component, hook, html, use_context, use_effect_with, use_state_eq, ContextProvider,
    Html, Properties,
};

use crate::api::fetch_stats;
use crate::context::{current_request_url, use_config};

pub use self::referral::GiftSection;

mod referral;

/// Stats as shared through context. `None` until the fetch succeeds.
pub type LoadedStats = Option<Rc<UserStats>>;

#[derive(PartialEq, Properties)]
pub struct Props {
    /// Children which can read the stats through [`use_stats`].
    pub children: Html,
}

/// Fetches the user's stats and provides them to its children.
#[function_component]
pub fn StatsProvider(Props { children }: &Props) -> Html {
    let config = use_config();
    let stats = use_state_eq(|| LoadedStats::None);

    use_effect_with((), {
        let setter = stats.setter();
        move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                let Some(url) = current_request_url(&config, ApiResource::Stats) else {
                    return;
                };
                match fetch_stats(url).await {
                    Ok(loaded) => setter.set(Some(Rc::new(loaded))),
                    Err(e) => error!("Error fetching stats: {}", e),
                }
            });
        }
    });

    html! {
        <ContextProvider<LoadedStats> context={(*stats).clone()}>
            {children.clone()}
        </ContextProvider<LoadedStats>>
    }
}

/// Get the loaded stats from context.
#[hook]
pub fn use_stats() -> LoadedStats {
    use_context::<LoadedStats>().expect("use_stats must be used inside StatsProvider")
}

/// Formats the loaded stats, or an empty account while they are loading.
#[hook]
pub fn use_stats_lines() -> StatsLines {
    let config = use_config();
    let stats = use_stats();
    match stats.as_deref() {
        Some(stats) => StatsLines::new(stats, &config),
        None => StatsLines::new(&UserStats::default(), &config),
    }
}

/// Level, account status and time counters.
#[function_component]
pub fn StatsPanel() -> Html {
    let lines = use_stats_lines();

    html! {
        <div class="stats">
            <div class="level">{lines.level}</div>
            <div class="account-status">{lines.account_status}</div>
            <div class="talk-time">
                <div>{"🗣 Talk Time:"}</div>
                <div data-stats="talk-today">{lines.talk_today}</div>
                <div data-stats="talk-weekly">{lines.talk_weekly}</div>
                <div data-stats="talk-total">{lines.talk_total}</div>
            </div>
            <div data-stats="listened">{lines.listened}</div>
            <div data-stats="days">{lines.days}</div>
        </div>
    }
}
