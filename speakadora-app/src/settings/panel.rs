use gloo::events::EventListener;
use speakadora::SettingKey;
use wasm_bindgen::JsCast as _;
use web_sys::{Element, Event};
use yew::{
    classes, function_component, html, use_callback, use_effect_with, AttrValue, Html,
    MouseEvent, Properties,
};

use crate::settings::{use_settings, use_settings_dispatcher};

/// Class marking the container of a single setting.
const SETTING_ITEM_CLASS: &str = "setting-item";

/// Whether the event happened inside some setting item.
fn is_inside_setting_item(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| {
            element
                .closest(&format!(".{SETTING_ITEM_CLASS}"))
                .ok()
                .flatten()
        })
        .is_some()
}

/// Displays every setting and the reset button.
#[function_component]
pub fn SettingsPanel() -> Html {
    let settings = use_settings();
    let dispatcher = use_settings_dispatcher();

    // Clicks anywhere outside the setting items close every dropdown.
    use_effect_with(dispatcher.clone(), |dispatcher| {
        let dispatcher = dispatcher.clone();
        let listener = EventListener::new(&gloo::utils::document(), "click", move |event| {
            if !is_inside_setting_item(event) {
                dispatcher.click_outside();
            }
        });
        move || drop(listener)
    });

    let reset = use_callback(dispatcher, |_: MouseEvent, dispatcher| dispatcher.reset_all());

    html! {
        <div class="settings">
            { for SettingKey::ALL.into_iter().map(|setting| html! {
                <SettingItem {setting}
                    value={settings.value(setting)}
                    open={settings.is_open(setting)} />
            }) }
            <button class="reset-button" onclick={reset}>
                {"Reset settings"}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ItemProps {
    /// Which setting this item controls.
    setting: SettingKey,
    /// Currently displayed value.
    value: AttrValue,
    /// Whether the dropdown is open.
    open: bool,
}

/// A single setting with its dropdown of choices.
#[function_component]
fn SettingItem(&ItemProps { setting, ref value, open }: &ItemProps) -> Html {
    let dispatcher = use_settings_dispatcher();
    let toggle = use_callback(
        (setting, dispatcher.clone()),
        |_: MouseEvent, (setting, dispatcher)| dispatcher.click_item(*setting),
    );
    let select = use_callback(
        (setting, dispatcher),
        |choice: &'static str, (setting, dispatcher)| dispatcher.select(*setting, choice),
    );

    html! {
        <div class={classes!(SETTING_ITEM_CLASS, open.then_some("active"))}
            data-setting={setting.storage_key()}>
            <div class="setting-header" onclick={toggle}>
                <span class="setting-title">{setting.title()}</span>
                <span class="current-value">{value.clone()}</span>
            </div>
            if open {
                <div class="dropdown">
                    { for setting.choices().iter().map(|&choice| {
                        let select = select.clone();
                        html! {
                            <div class={classes!("dropdown-item", (choice == value.as_str()).then_some("selected"))}
                                onclick={move |_| select.emit(choice)}>
                                {choice}
                            </div>
                        }
                    }) }
                </div>
            }
        </div>
    }
}
