use speakadora::{referral_milestones, UserStats};
use yew::{classes, function_component, html, Html};

use crate::context::use_config;
use crate::stats::use_stats;

/// Cards for each referral milestone. Shows no progress until the stats load.
#[function_component]
pub fn AchievementsGrid() -> Html {
    let config = use_config();
    let stats = use_stats();
    let cards = match stats.as_deref() {
        Some(stats) => referral_milestones(stats, &config),
        None => referral_milestones(&UserStats::default(), &config),
    };

    html! {
        <div class="achievements-grid">
            { for cards.into_iter().map(|card| html! {
                <div class={classes!("achievement-card", card.completed().then_some("completed"))}>
                    <div class="achievement-title">
                        {format!(
                            "Invite {} friend{}",
                            card.milestone,
                            if card.milestone == 1 { "" } else { "s" },
                        )}
                    </div>
                    <div class="progress">{card.label()}</div>
                </div>
            }) }
        </div>
    }
}
