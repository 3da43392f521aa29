use leptos::ev::KeyboardEvent;
use leptos::*;

/// Blocking notice dialog. Dismissed only by the user; showing a new alert
/// while one is up simply swaps the message signal underneath.
#[component]
pub fn AlertDialog(
    is_open: Signal<bool>,
    #[prop(into)] message: MaybeSignal<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let message_text = Signal::derive(move || message.get());

    let close_on_backdrop = on_close;
    let close_on_esc = on_close;
    let close_on_footer_button = on_close;

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[80] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| close_on_backdrop.call(())
                ></button>
                <div
                    class="relative z-[81] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="alertdialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            close_on_esc.call(());
                        }
                    }
                >
                    <p class="text-sm text-fg">{move || message_text.get()}</p>
                    <div class="flex justify-end">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                            on:click=move |_| close_on_footer_button.call(())
                        >
                            {"OK"}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn alert_dialog_renders_message_and_ok() {
        let html = render_to_string(move || {
            let is_open = Signal::derive(|| true);
            view! {
                <AlertDialog
                    is_open=is_open
                    message="Data submitted successfully!"
                    on_close=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("role=\"alertdialog\""));
        assert!(html.contains("Data submitted successfully!"));
        assert!(html.contains("OK"));
    }
}
