//! Input validation helpers
//!
//! Field-level checks shared by both employee route families. Each helper
//! appends a human-readable message to `errors` for every rule the value
//! breaks, so a single 400 response can name all offending fields at once.

// ── Text length limits ──────────────────────────────────────────────

/// Free-text fields: name, position, location
pub const MAX_TEXT_LEN: usize = 200;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate a required text field: present and non-blank after trimming.
/// Returns the trimmed value on success.
pub fn require_text(value: Option<&str>, field: &str, errors: &mut Vec<String>) -> Option<String> {
    match value {
        None => {
            errors.push(format!("{field} is required"));
            None
        }
        Some(v) => check_text(v, field, errors),
    }
}

/// Validate an optional text field: if present, non-blank after trimming.
/// Absent values pass through untouched.
pub fn optional_text(value: Option<&str>, field: &str, errors: &mut Vec<String>) -> Option<String> {
    value.and_then(|v| check_text(v, field, errors))
}

fn check_text(value: &str, field: &str, errors: &mut Vec<String>) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(format!("{field} must not be empty"));
        return None;
    }
    if trimmed.len() > MAX_TEXT_LEN {
        errors.push(format!(
            "{field} is too long ({} chars, max {MAX_TEXT_LEN})",
            trimmed.len()
        ));
        return None;
    }
    Some(trimmed.to_string())
}

/// Validate a required salary: present, finite, non-negative.
pub fn require_salary(value: Option<f64>, errors: &mut Vec<String>) -> Option<f64> {
    match value {
        None => {
            errors.push("salary is required".to_string());
            None
        }
        Some(v) => check_salary(v, errors),
    }
}

/// Validate an optional salary: if present, finite and non-negative.
pub fn optional_salary(value: Option<f64>, errors: &mut Vec<String>) -> Option<f64> {
    value.and_then(|v| check_salary(v, errors))
}

fn check_salary(value: f64, errors: &mut Vec<String>) -> Option<f64> {
    if !value.is_finite() {
        errors.push("salary must be a finite number".to_string());
        return None;
    }
    if value < 0.0 {
        errors.push("salary must not be negative".to_string());
        return None;
    }
    Some(value)
}
