use crate::components::forms::DatePicker;
use leptos::{ev::MouseEvent, *};

#[component]
pub fn HeaderSection(
    team_lead_name: Signal<String>,
    date: RwSignal<String>,
    submit_enabled: Signal<bool>,
    on_submit: Callback<MouseEvent>,
    on_reset: Callback<MouseEvent>,
    on_exit: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 flex flex-col gap-3 lg:flex-row lg:items-end">
            <div class="flex-1">
                <p class="text-sm text-fg-muted">{"Team Lead"}</p>
                <p class="text-lg font-semibold text-fg">{move || team_lead_name.get()}</p>
            </div>
            <div class="w-full lg:w-48">
                <DatePicker
                    label=Some("Evaluation date")
                    value=date
                />
            </div>
            <button
                class="w-full lg:w-auto px-4 py-2 bg-action-primary-bg text-action-primary-text rounded disabled:opacity-50"
                disabled={move || !submit_enabled.get()}
                on:click=move |ev| on_submit.call(ev)
            >
                {"Submit"}
            </button>
            <button
                class="w-full lg:w-auto px-4 py-2 bg-surface-muted text-fg rounded hover:bg-surface-elevated"
                on:click=move |ev| on_reset.call(ev)
            >
                {"Reset"}
            </button>
            <button
                class="w-full lg:w-auto px-4 py-2 bg-action-danger-bg text-action-danger-text rounded"
                on:click=move |ev| on_exit.call(ev)
            >
                {"Exit"}
            </button>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_shows_lead_name_and_all_controls() {
        let html = render_to_string(move || {
            let date = create_rw_signal(String::new());
            view! {
                <HeaderSection
                    team_lead_name=Signal::derive(|| "Priya".to_string())
                    date=date
                    submit_enabled=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                    on_reset=Callback::new(|_| {})
                    on_exit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Team Lead"));
        assert!(html.contains("Priya"));
        assert!(html.contains("Evaluation date"));
        assert!(html.contains("Submit"));
        assert!(html.contains("Reset"));
        assert!(html.contains("Exit"));
    }
}
