use leptos::*;

mod components;
mod layout;
mod panel;
pub mod repository;
pub mod types;
pub mod utils;
pub mod view_model;

pub use panel::EvaluationPanel;

#[component]
pub fn EvaluationPage() -> impl IntoView {
    view! { <EvaluationPanel /> }
}
