mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::AppShell;
use models::RouteTable;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(config::LOG_LEVEL));

    let routes = match RouteTable::new(config::configured_routes()) {
        Ok(routes) => routes,
        Err(e) => {
            log::error!("invalid route table: {}", e);
            return;
        }
    };

    let platform = crate::core::platform::detect();
    if let Err(e) = AppShell::new(platform).with_routes(routes).mount(config::MOUNT_ANCHOR) {
        log::error!("failed to start: {}", e);
    }
}
