// =============================================================================
// Connect-U Web - WASM Entry Point
// =============================================================================
// Trunk compiles this binary and injects it into index.html.
// =============================================================================

use connect_u_web::App;

fn main() {
    console_error_panic_hook::set_once();

    // Ignore the error if `mount` already installed a logger.
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Starting Connect-U web...");

    leptos::mount::mount_to_body(App);
}
