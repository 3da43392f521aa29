use leptos::*;

/// Page shell: app header plus a centered content column. The evaluation
/// page is the whole product, so there is no navigation.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <header class="bg-surface-elevated shadow">
                <div class="max-w-5xl mx-auto px-4 py-4 flex items-center justify-between">
                    <h1 class="text-xl font-bold text-fg">{"Task Evaluation"}</h1>
                </div>
            </header>
            <main class="max-w-5xl mx-auto px-4 py-6">{children()}</main>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn layout_wraps_children_under_the_app_header() {
        let html = render_to_string(move || {
            view! { <Layout><p>{"content"}</p></Layout> }
        });
        assert!(html.contains("Task Evaluation"));
        assert!(html.contains("content"));
    }
}
