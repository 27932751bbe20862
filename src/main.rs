use waynaa_web::{config, App};

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("Starting Waynaa site");
    yew::Renderer::<App>::new().render();
}
