use leptos::{ev::MouseEvent, *};
use leptos_router::use_query_map;

use crate::api::{SubmitEvaluationsRequest, Task};
use crate::state::identity::{self, TeamLeadIdentity};
use crate::state::overlay::{ConfirmAction, DetailKey, Overlay};
use crate::utils::{storage, time::format_submission_date};

use super::{repository::EvaluationRepository, types::EmployeeRow, utils};

/// Everything needed to fetch detail for one selected task. The key ties the
/// eventual response back to the task the user actually clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub key: DetailKey,
    pub task_name: String,
    pub employee_id: String,
    pub work_date: String,
}

#[derive(Clone)]
pub struct EvaluationViewModel {
    pub repo: EvaluationRepository,
    pub team_lead: (ReadSignal<TeamLeadIdentity>, WriteSignal<TeamLeadIdentity>),
    pub selected_date: RwSignal<String>,
    pub employees: RwSignal<Vec<EmployeeRow>>,
    /// Employee id whose task dropdown is open; `None` means all closed.
    pub open_dropdown: RwSignal<Option<String>>,
    pub overlay: RwSignal<Overlay>,
}

impl EvaluationViewModel {
    pub fn new_with(repo: EvaluationRepository, initial_id: Option<String>) -> Self {
        let (team_lead, set_team_lead) = identity::use_team_lead();
        if let Some(id) = initial_id {
            set_team_lead.update(|identity| identity.id = id);
        }
        Self {
            repo,
            team_lead: (team_lead, set_team_lead),
            selected_date: create_rw_signal(String::new()),
            employees: create_rw_signal(Vec::new()),
            open_dropdown: create_rw_signal(None),
            overlay: create_rw_signal(Overlay::None),
        }
    }

    pub fn show_alert(&self, message: impl Into<String>) {
        self.overlay.set(Overlay::Alert(message.into()));
    }

    pub fn dismiss_alert(&self) {
        self.overlay.update(|overlay| {
            if matches!(overlay, Overlay::Alert(_)) {
                *overlay = Overlay::None;
            }
        });
    }

    pub fn is_form_valid(&self) -> bool {
        self.selected_date
            .with(|date| self.employees.with(|rows| utils::is_form_valid(date, rows)))
    }

    /// Opens the clicked employee's dropdown and closes every other one; a
    /// second click on the same employee closes it.
    pub fn toggle_dropdown(&self, employee_id: &str) {
        self.open_dropdown.update(|open| {
            *open = match open.as_deref() {
                Some(current) if current == employee_id => None,
                _ => Some(employee_id.to_string()),
            };
        });
    }

    /// Shows the detail overlay with the partial roster task right away, then
    /// returns the request to issue, if the fetch preconditions hold.
    pub fn select_task(&self, employee_id: &str, task: &Task) -> Option<DetailRequest> {
        let key = DetailKey {
            employee_id: employee_id.to_string(),
            task_id: task.id.clone(),
        };
        self.overlay.set(Overlay::TaskDetail {
            task: task.clone(),
            key: key.clone(),
        });
        self.open_dropdown.set(None);

        let work_date = self.selected_date.get_untracked();
        if work_date.is_empty() || task.name.is_empty() {
            log::warn!("Skipping task detail fetch: selected date or task name missing");
            return None;
        }
        Some(DetailRequest {
            task_name: task.name.clone(),
            employee_id: employee_id.to_string(),
            work_date,
            key,
        })
    }

    /// Replaces the shown task with the server record, unless the user has
    /// moved on to a different task in the meantime.
    pub fn apply_task_detail(&self, key: &DetailKey, task: Task) {
        self.overlay.update(|overlay| {
            if overlay.shows_detail_for(key) {
                *overlay = Overlay::TaskDetail {
                    task,
                    key: key.clone(),
                };
            } else {
                log::debug!("Dropping stale task detail response for {}", key.task_id);
            }
        });
    }

    pub fn close_task_modal(&self) {
        self.overlay.update(|overlay| {
            if matches!(overlay, Overlay::TaskDetail { .. }) {
                *overlay = Overlay::None;
            }
        });
    }

    pub fn set_rating(&self, employee_id: &str, raw: &str) {
        let rating = raw.trim().parse::<i32>().ok();
        self.employees.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|row| row.employee_id == employee_id) {
                row.rating = rating;
            }
        });
    }

    pub fn set_remark(&self, employee_id: &str, value: String) {
        self.employees.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|row| row.employee_id == employee_id) {
                row.remark = value;
            }
        });
    }

    /// Clears the whole drafting surface back to its initial state: date,
    /// roster (with its ratings and remarks), dropdown, and any open task
    /// detail. Alerts and confirms are left to their own dismissal.
    pub fn reset_form(&self) {
        self.selected_date.set(String::new());
        self.employees.set(Vec::new());
        self.open_dropdown.set(None);
        self.close_task_modal();
    }

    pub fn request_exit(&self) {
        self.overlay.set(Overlay::Confirm {
            message: "Are you sure you want to exit?".to_string(),
            action: ConfirmAction::Exit,
        });
    }

    /// Takes the pending confirm action, hiding the dialog. Returns `None`
    /// when no confirm is up, so an action can never run twice.
    pub fn take_confirm_action(&self) -> Option<ConfirmAction> {
        let action = match self.overlay.get_untracked() {
            Overlay::Confirm { action, .. } => Some(action),
            _ => None,
        };
        if action.is_some() {
            self.overlay.set(Overlay::None);
        }
        action
    }

    pub fn decline_confirm(&self) {
        self.overlay.update(|overlay| {
            if matches!(overlay, Overlay::Confirm { .. }) {
                *overlay = Overlay::None;
            }
        });
    }

    // Event closures handed to the view layer.

    pub fn on_toggle_dropdown(&self) -> Callback<String> {
        let vm = self.clone();
        Callback::new(move |employee_id: String| vm.toggle_dropdown(&employee_id))
    }

    pub fn on_task_select(&self) -> Callback<(String, Task)> {
        let vm = self.clone();
        Callback::new(move |(employee_id, task): (String, Task)| {
            if let Some(request) = vm.select_task(&employee_id, &task) {
                let vm = vm.clone();
                spawn_local(async move { load_task_detail(&vm, request).await });
            }
        })
    }

    pub fn on_close_task_modal(&self) -> Callback<()> {
        let vm = self.clone();
        Callback::new(move |_| vm.close_task_modal())
    }

    pub fn on_rating_change(&self) -> Callback<(String, String)> {
        let vm = self.clone();
        Callback::new(move |(employee_id, raw): (String, String)| {
            vm.set_rating(&employee_id, &raw)
        })
    }

    pub fn on_remark_change(&self) -> Callback<(String, String)> {
        let vm = self.clone();
        Callback::new(move |(employee_id, value): (String, String)| {
            vm.set_remark(&employee_id, value)
        })
    }

    pub fn on_submit(&self) -> impl Fn(MouseEvent) {
        let vm = self.clone();
        move |_ev| {
            if !vm.is_form_valid() {
                return;
            }
            let vm = vm.clone();
            spawn_local(async move { submit_evaluations(&vm).await });
        }
    }

    pub fn on_reset(&self) -> impl Fn(MouseEvent) {
        let vm = self.clone();
        move |_ev| vm.reset_form()
    }

    pub fn on_exit(&self) -> impl Fn(MouseEvent) {
        let vm = self.clone();
        move |_ev| vm.request_exit()
    }

    pub fn on_alert_close(&self) -> Callback<()> {
        let vm = self.clone();
        Callback::new(move |_| vm.dismiss_alert())
    }

    pub fn on_confirm_yes(&self) -> Callback<()> {
        let vm = self.clone();
        Callback::new(move |_| {
            if let Some(action) = vm.take_confirm_action() {
                match action {
                    ConfirmAction::Exit => spawn_local(perform_exit()),
                }
            }
        })
    }

    pub fn on_confirm_no(&self) -> Callback<()> {
        let vm = self.clone();
        Callback::new(move |_| vm.decline_confirm())
    }
}

/// Fetches the team lead's display name and folds every outcome into display
/// state; nothing escapes this boundary.
pub async fn load_team_lead_details(vm: &EvaluationViewModel, employee_id: String) {
    log::info!("Loading team lead details for {}", employee_id);
    match vm.repo.team_lead(&employee_id).await {
        Ok(response) => {
            match response.employee_name.filter(|name| !name.is_empty()) {
                Some(name) => vm.team_lead.1.update(|identity| identity.name = name),
                None => {
                    let (name, message) = identity::missing_name_fallback(&employee_id);
                    vm.team_lead.1.update(|identity| identity.name = name);
                    vm.show_alert(message);
                }
            }
        }
        Err(err) => {
            log::error!("Error fetching team lead details: {}", err);
            let (name, message) = identity::lookup_failure(&employee_id, &err);
            vm.team_lead.1.update(|identity| identity.name = name);
            vm.show_alert(message);
        }
    }
}

/// Loads the roster for the currently selected date. Missing date or lead id
/// is a silent no-op; a failed load empties the roster.
pub async fn load_roster(vm: &EvaluationViewModel) {
    let date = vm.selected_date.get_untracked();
    let lead_id = vm.team_lead.0.get_untracked().id;
    if date.is_empty() || lead_id.is_empty() {
        return;
    }
    match vm.repo.roster_by_date(&date, &lead_id).await {
        Ok(entries) => vm.employees.update(|rows| {
            let next = utils::roster_rows(entries, rows);
            *rows = next;
        }),
        Err(err) => {
            log::error!("Error fetching employees: {}", err);
            vm.employees.set(Vec::new());
        }
    }
}

/// Resolves one detail request; failures keep the optimistic partial data.
pub async fn load_task_detail(vm: &EvaluationViewModel, request: DetailRequest) {
    match vm
        .repo
        .task_detail(&request.task_name, &request.employee_id, &request.work_date)
        .await
    {
        Ok(detail) => vm.apply_task_detail(&request.key, Task::from_detail(detail)),
        Err(err) => log::error!("Error fetching task details: {}", err),
    }
}

/// Submits the current batch. Success resets the form and confirms via
/// alert; failure alerts and leaves every draft in place for a retry.
pub async fn submit_evaluations(vm: &EvaluationViewModel) {
    let payload = SubmitEvaluationsRequest {
        team_lead_id: vm.team_lead.0.get_untracked().id,
        date: format_submission_date(&vm.selected_date.get_untracked()),
        evaluations: vm
            .employees
            .with_untracked(|rows| utils::build_evaluations(rows)),
    };
    match vm.repo.submit(&payload).await {
        Ok(()) => {
            vm.reset_form();
            vm.show_alert("Data submitted successfully!");
        }
        Err(err) => {
            log::error!("Error submitting evaluations: {}", err);
            vm.show_alert("Error while submitting data!");
        }
    }
}

/// Clears local state and leaves for the login screen.
pub async fn perform_exit() {
    storage::clear_local_state();
    let login_url = crate::config::await_login_url().await;
    match storage::window() {
        Ok(window) => {
            let _ = window.location().set_href(&login_url);
        }
        Err(err) => log::error!("Cannot redirect to login: {}", err),
    }
}

pub fn use_evaluation_view_model() -> EvaluationViewModel {
    if let Some(vm) = use_context::<EvaluationViewModel>() {
        return vm;
    }

    let url_id = use_query_map().with_untracked(|params| params.get("employeeId").cloned());
    let initial_id = identity::resolve_startup_id(url_id);
    let vm = EvaluationViewModel::new_with(EvaluationRepository::new(), initial_id.clone());

    if let Some(id) = initial_id {
        let vm_for_lookup = vm.clone();
        spawn_local(async move { load_team_lead_details(&vm_for_lookup, id).await });
    }

    // Picking a date (re)loads the roster; clearing it back to empty is a
    // no-op inside the loader.
    let vm_for_dates = vm.clone();
    create_effect(move |_| {
        let date = vm_for_dates.selected_date.get();
        if date.is_empty() {
            return;
        }
        let vm = vm_for_dates.clone();
        spawn_local(async move { load_roster(&vm).await });
    });

    provide_context(vm.clone());
    vm
}
