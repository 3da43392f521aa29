use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn EvaluationFrame(children: Children) -> impl IntoView {
    view! { <Layout>{children()}</Layout> }
}
