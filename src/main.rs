//! CSR entry point: mounts the app and wires up browser logging.

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        leptos::mount::mount_to_body(learn_js_first::app::App);
    }
}
