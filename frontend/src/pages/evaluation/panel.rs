use super::{
    components::{form::HeaderSection, roster::RosterSection, task_modal::TaskDetailModal},
    layout::EvaluationFrame,
    view_model::use_evaluation_view_model,
};
use crate::components::{alert_dialog::AlertDialog, confirm_dialog::ConfirmDialog};
use crate::state::overlay::Overlay;
use leptos::*;

#[component]
pub fn EvaluationPanel() -> impl IntoView {
    let vm = use_evaluation_view_model();
    let (team_lead, _) = vm.team_lead;
    let team_lead_name = Signal::derive(move || team_lead.get().name);

    let employees = vm.employees;
    let employees_signal = Signal::derive(move || employees.get());
    let open_dropdown = vm.open_dropdown;
    let open_dropdown_signal = Signal::derive(move || open_dropdown.get());

    let vm_for_validity = vm.clone();
    let submit_enabled = Signal::derive(move || vm_for_validity.is_form_valid());

    let overlay = vm.overlay;
    let alert_open =
        Signal::derive(move || overlay.with(|current| matches!(current, Overlay::Alert(_))));
    let alert_message = Signal::derive(move || {
        overlay.with(|current| current.alert_message().unwrap_or_default().to_string())
    });
    let confirm_open =
        Signal::derive(move || overlay.with(|current| matches!(current, Overlay::Confirm { .. })));
    let confirm_message = Signal::derive(move || {
        overlay.with(|current| current.confirm_message().unwrap_or_default().to_string())
    });
    let selected_task = Signal::derive(move || overlay.with(|current| current.task().cloned()));

    view! {
        <EvaluationFrame>
            <div class="space-y-6">
                <HeaderSection
                    team_lead_name=team_lead_name
                    date=vm.selected_date
                    submit_enabled=submit_enabled
                    on_submit=Callback::new(vm.on_submit())
                    on_reset=Callback::new(vm.on_reset())
                    on_exit=Callback::new(vm.on_exit())
                />
                <RosterSection
                    employees=employees_signal
                    open_dropdown=open_dropdown_signal
                    on_toggle_dropdown=vm.on_toggle_dropdown()
                    on_task_select=vm.on_task_select()
                    on_rating_change=vm.on_rating_change()
                    on_remark_change=vm.on_remark_change()
                />
            </div>
            <TaskDetailModal
                task=selected_task
                on_close=vm.on_close_task_modal()
            />
            <AlertDialog
                is_open=alert_open
                message=alert_message
                on_close=vm.on_alert_close()
            />
            <ConfirmDialog
                is_open=confirm_open
                message=confirm_message
                on_confirm=vm.on_confirm_yes()
                on_cancel=vm.on_confirm_no()
            />
        </EvaluationFrame>
    }
}
