use crate::api::Task;
use crate::components::empty_state::EmptyState;
use crate::components::forms::TextField;
use crate::pages::evaluation::types::EmployeeRow;
use leptos::*;

#[component]
pub fn RosterSection(
    employees: Signal<Vec<EmployeeRow>>,
    open_dropdown: Signal<Option<String>>,
    on_toggle_dropdown: Callback<String>,
    on_task_select: Callback<(String, Task)>,
    on_rating_change: Callback<(String, String)>,
    on_remark_change: Callback<(String, String)>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !employees.get().is_empty()
            fallback=|| view! {
                <EmptyState
                    title="No tasks loaded"
                    description="Pick a date to load employee tasks for evaluation."
                />
            }
        >
            <div class="bg-surface-elevated shadow rounded-lg overflow-visible">
                <table class="w-full text-sm text-fg">
                    <thead>
                        <tr class="text-left text-fg-muted border-b border-border">
                            <th class="px-4 py-3">{"Employee"}</th>
                            <th class="px-4 py-3">{"Tasks"}</th>
                            <th class="px-4 py-3 w-28">{"Rating"}</th>
                            <th class="px-4 py-3">{"Remark"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || employees.get()
                            key=|row| {
                                let tasks: Vec<String> =
                                    row.tasks.iter().map(|task| task.name.clone()).collect();
                                (row.employee_id.clone(), tasks)
                            }
                            children=move |row: EmployeeRow| {
                                view! {
                                    <RosterRow
                                        row=row
                                        open_dropdown=open_dropdown
                                        on_toggle_dropdown=on_toggle_dropdown
                                        on_task_select=on_task_select
                                        on_rating_change=on_rating_change
                                        on_remark_change=on_remark_change
                                    />
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

#[component]
fn RosterRow(
    row: EmployeeRow,
    open_dropdown: Signal<Option<String>>,
    on_toggle_dropdown: Callback<String>,
    on_task_select: Callback<(String, Task)>,
    on_rating_change: Callback<(String, String)>,
    on_remark_change: Callback<(String, String)>,
) -> impl IntoView {
    let employee_id = row.employee_id.clone();
    let id_for_open = employee_id.clone();
    let id_for_toggle = employee_id.clone();
    let id_for_rating = employee_id.clone();
    let id_for_remark = employee_id.clone();
    let id_for_select = employee_id.clone();
    let is_open =
        Signal::derive(move || open_dropdown.get().as_deref() == Some(id_for_open.as_str()));

    let rating_value = row.rating.map(|r| r.to_string()).unwrap_or_default();
    let tasks = row.tasks.clone();

    view! {
        <tr class="border-b border-border align-top">
            <td class="px-4 py-3 font-medium">{row.employee_name.clone()}</td>
            <td class="px-4 py-3">
                <div class="relative">
                    <button
                        type="button"
                        class="px-3 py-1.5 rounded border border-border text-fg hover:bg-surface-muted"
                        on:click=move |_| on_toggle_dropdown.call(id_for_toggle.clone())
                    >
                        {"Select task"}
                        <span class="ml-1 text-xs">{"\u{25BE}"}</span>
                    </button>
                    <Show when=move || is_open.get()>
                        <ul class="absolute z-10 mt-1 w-56 rounded-md border border-border bg-surface-elevated shadow-lg">
                            {tasks
                                .iter()
                                .map(|task| {
                                    let task = task.clone();
                                    let employee_id = id_for_select.clone();
                                    let label = task.name.clone();
                                    view! {
                                        <li>
                                            <button
                                                type="button"
                                                class="w-full text-left px-3 py-2 text-sm hover:bg-surface-muted"
                                                on:click=move |_| on_task_select
                                                    .call((employee_id.clone(), task.clone()))
                                            >
                                                {label}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </Show>
                </div>
            </td>
            <td class="px-4 py-3">
                <select
                    class="w-full rounded-md border border-form-control-border bg-form-control-bg py-1.5 px-2 text-sm"
                    prop:value=rating_value
                    on:change=move |ev| on_rating_change
                        .call((id_for_rating.clone(), event_target_value(&ev)))
                >
                    <option value="">{"--"}</option>
                    <option value="1">{"1"}</option>
                    <option value="2">{"2"}</option>
                    <option value="3">{"3"}</option>
                    <option value="4">{"4"}</option>
                    <option value="5">{"5"}</option>
                </select>
            </td>
            <td class="px-4 py-3">
                <TextField
                    value=row.remark.clone()
                    placeholder="Remarks"
                    on_input=Callback::new(move |value: String| {
                        on_remark_change.call((id_for_remark.clone(), value))
                    })
                />
            </td>
        </tr>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::employee_row;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn empty_roster_renders_the_empty_state() {
        let html = render_to_string(move || {
            view! {
                <RosterSection
                    employees=Signal::derive(Vec::new)
                    open_dropdown=Signal::derive(|| None)
                    on_toggle_dropdown=Callback::new(|_| {})
                    on_task_select=Callback::new(|_| {})
                    on_rating_change=Callback::new(|_| {})
                    on_remark_change=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("No tasks loaded"));
    }

    #[test]
    fn rows_render_names_and_open_dropdown_lists_tasks() {
        let html = render_to_string(move || {
            let rows = vec![
                employee_row("E7", "Ann", &["Fix bug", "Write docs"]),
                employee_row("E9", "Ben", &[]),
            ];
            view! {
                <RosterSection
                    employees=Signal::derive(move || rows.clone())
                    open_dropdown=Signal::derive(|| Some("E7".to_string()))
                    on_toggle_dropdown=Callback::new(|_| {})
                    on_task_select=Callback::new(|_| {})
                    on_rating_change=Callback::new(|_| {})
                    on_remark_change=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Ann"));
        assert!(html.contains("Ben"));
        assert!(html.contains("Fix bug"));
        assert!(html.contains("Write docs"));
    }
}
