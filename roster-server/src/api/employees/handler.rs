//! Employee API Handlers
//!
//! Canonical routes; responses use the `{success, data, ...}` envelope.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};
use crate::db::repository::EmployeeRepository;
use crate::utils::{AppError, AppResponse, AppResult, ok, ok_with_count, ok_with_message};

/// List all employees, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<AppResponse<Vec<Employee>>>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employees = repo.find_all().await?;
    let count = employees.len();
    Ok(ok_with_count(employees, count))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Employee>>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id)))?;
    Ok(ok(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<AppResponse<Employee>>)> {
    let data = payload.validate()?;
    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo.create(data).await?;
    Ok((
        StatusCode::CREATED,
        ok_with_message(employee, "Employee created successfully"),
    ))
}

/// Update an employee (partial)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<AppResponse<Employee>>> {
    let data = payload.validate()?;
    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo.update(&id, data).await?;
    Ok(ok_with_message(employee, "Employee updated successfully"))
}

/// Hard delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Employee>>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo.delete(&id).await?;
    Ok(ok_with_message(employee, "Employee deleted successfully"))
}
