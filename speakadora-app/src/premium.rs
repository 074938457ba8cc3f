use speakadora::links::with_telegram_id;
use yew::{function_component, html, use_memo, AttrValue, Html};

use crate::context::{current_identity, use_config};

/// Links to the premium offers, tagged with the user's id when it is known.
#[function_component]
pub fn PremiumLinks() -> Html {
    let config = use_config();
    let links = use_memo(config, |config| {
        let id = current_identity(config);
        config
            .premium_plans
            .as_slice()
            .iter()
            .map(|plan| {
                let href = match &id {
                    Some(id) => AttrValue::from(with_telegram_id(plan.href.as_str(), id)),
                    None => plan.href.clone(),
                };
                (plan.label.clone(), href)
            })
            .collect::<Vec<_>>()
    });

    html! {
        <div class="premium-button">
            { for links.iter().map(|(label, href)| html! {
                <a href={href.clone()}>{label.clone()}</a>
            }) }
        </div>
    }
}
