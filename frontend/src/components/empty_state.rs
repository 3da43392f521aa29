use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: String,
) -> impl IntoView {
    let description_view = (!description.is_empty())
        .then(|| view! { <p class="mt-1 text-sm text-fg-muted">{description.clone()}</p> });

    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <h3 class="text-sm font-semibold text-fg">{title}</h3>
            {description_view}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn empty_state_renders_title_and_description() {
        let html = render_to_string(move || {
            view! {
                <EmptyState
                    title="No tasks loaded"
                    description="Pick a date to load employee tasks for evaluation."
                />
            }
        });
        assert!(html.contains("No tasks loaded"));
        assert!(html.contains("Pick a date"));
    }
}
