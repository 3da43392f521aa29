use leptos::*;

#[component]
pub fn DatePicker(
    #[prop(into)] value: RwSignal<String>,
    label: Option<&'static str>,
    #[prop(optional)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1.5 w-full">
            {label.map(|l| view! { <label class="text-sm font-bold text-fg-muted ml-1">{l}</label> })}
            <input
                type="date"
                class="rounded-xl border-2 border-form-control-border bg-form-control-bg py-2.5 px-4 text-sm font-semibold text-fg shadow-sm hover:border-action-primary-border-hover disabled:opacity-50 disabled:bg-state-disabled-bg"
                disabled=disabled
                prop:value={move || value.get()}
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn TextField(
    #[prop(into)] value: MaybeSignal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class="w-full rounded-md border border-form-control-border bg-form-control-bg py-1.5 px-3 text-sm text-fg shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-action-primary-focus"
            placeholder=placeholder
            prop:value={move || value.get()}
            on:input=move |ev| on_input.call(event_target_value(&ev))
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn date_picker_renders_label_and_value() {
        let html = render_to_string(move || {
            let value = create_rw_signal("2024-05-01".to_string());
            view! { <DatePicker value=value label=Some("Work date") /> }
        });
        assert!(html.contains("Work date"));
        assert!(html.contains("type=\"date\""));
    }
}
