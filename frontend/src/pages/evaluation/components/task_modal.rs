use crate::api::Task;
use crate::pages::evaluation::utils::status_badge_class;
use leptos::ev::KeyboardEvent;
use leptos::*;

fn field_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

/// Task detail overlay. Opens with whatever the roster already knows and is
/// refreshed in place once the detail response lands.
#[component]
pub fn TaskDetailModal(task: Signal<Option<Task>>, on_close: Callback<()>) -> impl IntoView {
    let close_on_backdrop = on_close;
    let close_on_esc = on_close;
    let close_on_footer_button = on_close;

    view! {
        <Show when=move || task.get().is_some()>
            {move || {
                task.get()
                    .map(|task| {
                        let status = task.status.clone().unwrap_or_default();
                        let badge_class = status_badge_class(&status);
                        let has_status = !status.is_empty();
                        let pr_link = task.pr_link.clone();
                        view! {
                            <div class="fixed inset-0 z-50 flex items-end sm:items-center justify-center">
                                <div
                                    class="fixed inset-0 bg-overlay-backdrop"
                                    on:click=move |_| close_on_backdrop.call(())
                                ></div>
                                <div
                                    class="relative bg-surface-elevated rounded-lg shadow-xl w-full max-w-md mx-4 p-6 space-y-4"
                                    role="dialog"
                                    aria-modal="true"
                                    tabindex="-1"
                                    on:keydown=move |ev: KeyboardEvent| {
                                        if ev.key() == "Escape" {
                                            ev.prevent_default();
                                            close_on_esc.call(());
                                        }
                                    }
                                >
                                    <div class="flex items-center justify-between">
                                        <div>
                                            <p class="text-sm text-fg-muted">{"Task detail"}</p>
                                            <p class="text-lg font-semibold text-fg">{task.name.clone()}</p>
                                        </div>
                                        <Show when=move || has_status>
                                            <span class=format!("px-2 py-0.5 rounded-full text-xs {}", badge_class)>
                                                {status.clone()}
                                            </span>
                                        </Show>
                                    </div>
                                    <div class="space-y-2 text-sm text-fg">
                                        <div>
                                            <span class="font-medium text-fg-muted">{"Description: "}</span>
                                            <span>{field_text(&task.description)}</span>
                                        </div>
                                        <div>
                                            <span class="font-medium text-fg-muted">{"PR link: "}</span>
                                            {match pr_link {
                                                Some(link) => view! {
                                                    <a
                                                        class="text-action-primary-bg underline break-all"
                                                        href=link.clone()
                                                        target="_blank"
                                                        rel="noreferrer"
                                                    >
                                                        {link}
                                                    </a>
                                                }.into_view(),
                                                None => view! { <span>{"-"}</span> }.into_view(),
                                            }}
                                        </div>
                                        <div>
                                            <span class="font-medium text-fg-muted">{"Hours: "}</span>
                                            <span>{field_text(&task.hours)}</span>
                                        </div>
                                        <div>
                                            <span class="font-medium text-fg-muted">{"Extra hours: "}</span>
                                            <span>{field_text(&task.extra_hours)}</span>
                                        </div>
                                    </div>
                                    <div class="flex justify-end">
                                        <button
                                            class="px-4 py-2 rounded bg-surface-muted text-fg hover:bg-surface-elevated"
                                            on:click=move |_| close_on_footer_button.call(())
                                        >
                                            {"Close"}
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn modal_renders_partial_roster_task_with_placeholders() {
        let html = render_to_string(move || {
            let task = Task::roster_stub("E7-0", "Fix bug");
            view! {
                <TaskDetailModal
                    task=Signal::derive(move || Some(task.clone()))
                    on_close=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Fix bug"));
        assert!(html.contains("role=\"dialog\""));
        // No detail fetched yet, but every field row is already present.
        assert!(html.contains("Description: "));
        assert!(html.contains("Extra hours: "));
    }

    #[test]
    fn modal_renders_full_detail_with_status_badge_and_link() {
        let html = render_to_string(move || {
            let task = Task {
                id: "42".into(),
                name: "Fix bug".into(),
                description: Some("Crash on empty roster".into()),
                pr_link: Some("https://example.com/pr/42".into()),
                status: Some("Completed".into()),
                hours: Some("6".into()),
                extra_hours: Some("1".into()),
            };
            view! {
                <TaskDetailModal
                    task=Signal::derive(move || Some(task.clone()))
                    on_close=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Crash on empty roster"));
        assert!(html.contains("https://example.com/pr/42"));
        assert!(html.contains("Completed"));
        assert!(html.contains("bg-status-success-bg"));
    }

    #[test]
    fn closed_modal_renders_nothing() {
        let html = render_to_string(move || {
            view! {
                <TaskDetailModal
                    task=Signal::derive(|| None)
                    on_close=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("role=\"dialog\""));
    }
}
