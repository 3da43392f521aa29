mod api;
mod components;
pub mod config;
mod pages;
mod state;
#[cfg(test)]
pub mod test_support;
pub mod utils;

/// Boots the CSR app: panic hook, console logging, runtime config, router
/// mount. Called by the binary entry point on wasm32.
#[cfg(target_arch = "wasm32")]
pub fn boot() {
    use crate::pages::evaluation::EvaluationPage;
    use leptos::*;
    use leptos_router::*;
    use web_sys::console;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    console::log_1(&"Starting Taskrate Frontend (wasm)".into());

    // Kick off runtime config load from ./config.json (non-blocking).
    // If window.__TASKRATE_ENV is present (env.js), it takes precedence.
    spawn_local(async move {
        config::init().await;
        console::log_1(&"Runtime config initialized".into());
    });

    mount_to_body(|| {
        view! {
            <Router>
                <Routes>
                    <Route path="/" view=EvaluationPage/>
                </Routes>
            </Router>
        }
    });
}
