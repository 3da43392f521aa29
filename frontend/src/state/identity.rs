use leptos::*;

use crate::api::ApiError;
use crate::utils::storage;

/// The acting team lead. `id` stays empty when no identity could be
/// resolved; dependent loaders treat that as "do nothing".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamLeadIdentity {
    pub id: String,
    pub name: String,
}

pub fn use_team_lead() -> (ReadSignal<TeamLeadIdentity>, WriteSignal<TeamLeadIdentity>) {
    let (identity, set_identity) = create_signal(TeamLeadIdentity::default());
    (identity, set_identity)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupId {
    FromUrl(String),
    FromStorage(String),
}

/// URL query parameter wins over the previously persisted value.
pub fn choose_startup_id(url_id: Option<String>, stored_id: Option<String>) -> Option<StartupId> {
    if let Some(id) = url_id.filter(|id| !id.trim().is_empty()) {
        return Some(StartupId::FromUrl(id));
    }
    stored_id
        .filter(|id| !id.trim().is_empty())
        .map(StartupId::FromStorage)
}

/// Resolves the startup identity against local storage, persisting a fresh
/// URL-provided id. Returns `None` (after a warning log) when neither source
/// has one; the page then renders without a lead.
pub fn resolve_startup_id(url_id: Option<String>) -> Option<String> {
    match choose_startup_id(url_id, storage::stored_employee_id()) {
        Some(StartupId::FromUrl(id)) => {
            storage::store_employee_id(&id);
            Some(id)
        }
        Some(StartupId::FromStorage(id)) => Some(id),
        None => {
            log::warn!("No employeeId found in URL or local storage");
            None
        }
    }
}

/// Display name plus alert text for a failed name lookup.
pub fn lookup_failure(employee_id: &str, err: &ApiError) -> (String, String) {
    if err.is_not_found() {
        (
            "Employee Not Found".to_string(),
            format!(
                "Employee with ID \"{}\" not found in database. Please check if the employee was registered correctly.",
                employee_id
            ),
        )
    } else if err.is_connection_failure() {
        (
            "Connection Error".to_string(),
            "Cannot connect to backend server. Please check your internet connection.".to_string(),
        )
    } else {
        (
            "Unknown TL".to_string(),
            format!("Error loading employee details: {}", err),
        )
    }
}

/// A 200 that carries no usable name gets the same degraded display state as
/// an unknown error.
pub fn missing_name_fallback(employee_id: &str) -> (String, String) {
    (
        "Unknown TL".to_string(),
        format!("Employee ID {} not found or missing name", employee_id),
    )
}
