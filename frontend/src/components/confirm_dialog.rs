use leptos::ev::KeyboardEvent;
use leptos::*;

#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] cancel_label: MaybeSignal<String>,
) -> impl IntoView {
    let confirm_label_text = Signal::derive(move || {
        let text = confirm_label.get();
        if text.trim().is_empty() {
            "Yes".to_string()
        } else {
            text
        }
    });
    let cancel_label_text = Signal::derive(move || {
        let text = cancel_label.get();
        if text.trim().is_empty() {
            "No".to_string()
        } else {
            text
        }
    });
    let message_text = Signal::derive(move || message.get());

    let cancel_on_backdrop = on_cancel;
    let cancel_on_esc = on_cancel;
    let cancel_on_footer_button = on_cancel;
    let confirm_on_footer_button = on_confirm;

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| cancel_on_backdrop.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            cancel_on_esc.call(());
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">{"Confirm"}</h2>
                    <p class="text-sm text-fg-muted">{move || message_text.get()}</p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                            on:click=move |_| cancel_on_footer_button.call(())
                        >
                            {move || cancel_label_text.get()}
                        </button>
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                            on:click=move |_| confirm_on_footer_button.call(())
                        >
                            {move || confirm_label_text.get()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
