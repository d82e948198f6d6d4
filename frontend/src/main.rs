mod api;
mod components;
mod config;
mod pages;
mod router;
mod state;
#[cfg(test)]
mod test_support;
mod utils;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", err).into());
    }
    log::info!("Starting Billed frontend: initializing runtime config");

    leptos::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
        router::mount_app();
    });
}
