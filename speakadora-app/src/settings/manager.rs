//! Settings manager owns the settings store and exposes it to the settings page.

use std::collections::BTreeMap;
use std::rc::Rc;

use log::warn;
use speakadora::{SelectorState, Selectors, SettingKey, SettingsStore};
use yew::html::Scope;
use yew::{
    hook, html, use_context, AttrValue, Component, Context, ContextProvider, Html, Properties,
};

use crate::storage::BrowserStorage;

/// Snapshot of the settings shown on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsView {
    values: BTreeMap<SettingKey, AttrValue>,
    selectors: Selectors,
}

impl SettingsView {
    fn capture(settings: &SettingsStore<BrowserStorage>) -> Self {
        Self {
            values: SettingKey::ALL
                .into_iter()
                .map(|key| (key, settings.value(key)))
                .collect(),
            selectors: settings.selectors(),
        }
    }

    /// Value displayed for `key`.
    pub fn value(&self, key: SettingKey) -> AttrValue {
        self.values
            .get(&key)
            .cloned()
            .unwrap_or(AttrValue::Static(key.default_value()))
    }

    /// Whether the dropdown for `key` is open.
    pub fn is_open(&self, key: SettingKey) -> bool {
        self.selectors.state(key) == SelectorState::Open
    }
}

#[derive(PartialEq, Properties)]
pub struct Props {
    /// Children to render within the context of the SettingsManager.
    pub children: Html,
}

pub enum Msg {
    /// The header of a setting item was clicked.
    ClickItem { key: SettingKey },
    /// An option was chosen from a setting's dropdown.
    Select {
        key: SettingKey,
        value: &'static str,
    },
    /// The user clicked somewhere outside every setting item.
    ClickOutside,
    /// Restore every setting to its default.
    ResetAll,
}

pub struct SettingsManager {
    settings: SettingsStore<BrowserStorage>,
    /// What is currently shown, shared with children.
    view: Rc<SettingsView>,
    /// Settings dispatcher for this instance.
    dispatcher: SettingsDispatcher,
}

impl SettingsManager {
    /// Recaptures the view after a change. Returns true if anything visible changed.
    fn refresh(&mut self) -> bool {
        let view = SettingsView::capture(&self.settings);
        if *self.view != view {
            self.view = Rc::new(view);
            true
        } else {
            false
        }
    }
}

impl Component for SettingsManager {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let mut settings = SettingsStore::new(BrowserStorage);
        settings.load_all();
        let view = Rc::new(SettingsView::capture(&settings));
        Self {
            settings,
            view,
            dispatcher: SettingsDispatcher::new(ctx.link().clone()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ClickItem { key } => self.settings.click_item(key),
            Msg::Select { key, value } => {
                if let Err(e) = self.settings.select_setting(key, value) {
                    warn!("Unable to select setting: {}", e);
                }
            }
            Msg::ClickOutside => self.settings.click_outside(),
            Msg::ResetAll => self.settings.reset_all(),
        }
        self.refresh()
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            // The dispatcher never changes for the life of the SettingsManager.
            <ContextProvider<SettingsDispatcher> context={self.dispatcher.clone()}>
            <ContextProvider<Rc<SettingsView>> context={Rc::clone(&self.view)}>
                {ctx.props().children.clone()}
            </ContextProvider<Rc<SettingsView>>>
            </ContextProvider<SettingsDispatcher>>
        }
    }
}

/// Dispatcher which can be used to update settings.
#[derive(Clone, Debug)]
pub struct SettingsDispatcher {
    scope: Rc<Scope<SettingsManager>>,
}

impl PartialEq for SettingsDispatcher {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.scope, &other.scope)
    }
}

impl SettingsDispatcher {
    /// Wraps the Scope from SettingsManager.
    fn new(scope: Scope<SettingsManager>) -> Self {
        Self {
            scope: Rc::new(scope),
        }
    }

    /// Opens or closes the dropdown for `key`.
    pub fn click_item(&self, key: SettingKey) {
        self.scope.send_message(Msg::ClickItem { key });
    }

    /// Chooses `value` for `key`.
    pub fn select(&self, key: SettingKey, value: &'static str) {
        self.scope.send_message(Msg::Select { key, value });
    }

    /// Closes every dropdown.
    pub fn click_outside(&self) {
        self.scope.send_message(Msg::ClickOutside);
    }

    /// Resets every setting to its default.
    pub fn reset_all(&self) {
        self.scope.send_message(Msg::ResetAll);
    }
}

/// Get the displayed settings from context.
#[hook]
pub fn use_settings() -> Rc<SettingsView> {
    use_context::<Rc<SettingsView>>().expect("use_settings must be used inside SettingsManager")
}

/// Get the settings dispatcher from context.
#[hook]
pub fn use_settings_dispatcher() -> SettingsDispatcher {
    use_context::<SettingsDispatcher>()
        .expect("use_settings_dispatcher must be used inside SettingsManager")
}
