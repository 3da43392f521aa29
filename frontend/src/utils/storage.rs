use web_sys::{Storage, Window};

/// Browser-local key holding the acting team lead's employee id.
pub const EMPLOYEE_ID_KEY: &str = "employeeId";

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

pub fn stored_employee_id() -> Option<String> {
    local_storage()
        .ok()
        .and_then(|storage| storage.get_item(EMPLOYEE_ID_KEY).ok().flatten())
        .filter(|id| !id.is_empty())
}

pub fn store_employee_id(employee_id: &str) {
    if let Ok(storage) = local_storage() {
        let _ = storage.set_item(EMPLOYEE_ID_KEY, employee_id);
    }
}

/// Wipes every locally persisted key. Used by the exit action only.
pub fn clear_local_state() {
    if let Ok(storage) = local_storage() {
        let _ = storage.clear();
    }
}
