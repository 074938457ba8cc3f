mod achievements;
mod api;
mod app;
mod context;
mod location;
mod premium;
mod profile;
mod settings;
mod stats;
mod storage;
mod telegram;

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Unable to init logger");
    yew::Renderer::<app::App>::new().render();
}
