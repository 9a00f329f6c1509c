use student_admin_console::config::CONFIG;
use student_admin_console::App;

fn main() {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!(
        "🚀 Student admin console starting ({}, API {})",
        CONFIG.environment,
        CONFIG.api_base_url
    );

    if CONFIG.is_production() && CONFIG.api_base_url.starts_with("http://") {
        log::warn!("⚠️ Production build talking to a plain-HTTP API");
    }

    yew::Renderer::<App>::new().render();
}
