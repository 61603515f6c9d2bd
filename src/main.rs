//! Browser entry point; Trunk builds this binary for WASM and mounts the
//! app onto `<body>`.

fn main() {
    #[cfg(feature = "browser")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        leptos::mount::mount_to_body(pagespeak::app::App);
    }
}
