mod components;
mod config;
mod hooks;
mod models;
mod routes;
mod services;
mod session;
mod utils;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🏨 Miranda Hotels - iniciando");

    yew::Renderer::<App>::new().render();
}
