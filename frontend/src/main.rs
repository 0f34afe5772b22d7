mod api;
mod app;
mod components;
mod config;
mod controller;

use app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<App>::new().render();
}
