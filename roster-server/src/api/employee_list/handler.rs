//! Employee List Handlers
//!
//! Same validation and persistence as the canonical handlers; the only
//! difference is the response shape (bare JSON, no envelope).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};
use crate::db::repository::EmployeeRepository;
use crate::utils::{AppError, AppResult};

/// PUT payload with the record id carried in the body
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeListUpdate {
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: EmployeeUpdate,
}

/// List all employees, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employees = repo.find_all().await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id)))?;
    Ok(Json(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let data = payload.validate()?;
    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo.create(data).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Update an employee, taking the id from the request body
pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeListUpdate>,
) -> AppResult<Json<Employee>> {
    let id = payload
        .id
        .ok_or_else(|| AppError::validation("id is required"))?;
    let data = payload.fields.validate()?;
    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo.update(&id, data).await?;
    Ok(Json(employee))
}

/// Hard delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo.delete(&id).await?;
    Ok(Json(employee))
}
