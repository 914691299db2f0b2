//! Employee API Handlers

use axum::extract::{Multipart, Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use shared::models::{
    Employee, EmployeeCreate, EmployeeCreateView, EmployeeDetails, EmployeeEditView,
    EmployeeUpdate, ROLE_ADMIN,
};

use super::form::{EmployeeSubmission, FormView};
use crate::auth::{Access, CurrentUser};
use crate::core::ServerState;
use crate::db::repository::{EmployeeRepository, Repository};
use crate::utils::{AppError, AppResult, ErrorCode};

const DETAILS_TITLE: &str = "Employee Details";
const INDEX_PATH: &str = "/api/employees";

fn employee_not_found(id: Option<i64>) -> AppError {
    let message = match id {
        Some(id) => format!("Employee with Id = {} cannot be found", id),
        None => "Employee cannot be found: no Id was given".to_string(),
    };
    AppError::with_message(ErrorCode::EmployeeNotFound, message).with_detail("id", id)
}

fn parse_id(raw: &str) -> AppResult<i64> {
    raw.trim().parse().map_err(|_| {
        AppError::validation(format!("Invalid employee id: {}", raw)).with_detail("id", raw)
    })
}

/// List all employees
pub async fn index(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    // Reads never consult the caller's token
    Access::Public.check(None)?;
    let repo = EmployeeRepository::new(state.db.clone());
    let employees = repo.find_all().await?;
    Ok(Json(employees))
}

/// Employee details by id
pub async fn details(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<EmployeeDetails>> {
    Access::Public.check(None)?;
    let id = parse_id(&id)?;
    load_details(&state, Some(id)).await
}

/// `/details` without an id is a not-found, same as an unknown id
pub async fn details_without_id(
    State(state): State<ServerState>,
) -> AppResult<Json<EmployeeDetails>> {
    Access::Public.check(None)?;
    load_details(&state, None).await
}

async fn load_details(state: &ServerState, id: Option<i64>) -> AppResult<Json<EmployeeDetails>> {
    let Some(id) = id else {
        return Err(employee_not_found(None));
    };

    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| employee_not_found(Some(id)))?;

    Ok(Json(EmployeeDetails {
        employee,
        page_title: DETAILS_TITLE.to_string(),
    }))
}

/// Empty create form
pub async fn create_form(user: Option<CurrentUser>) -> AppResult<Json<EmployeeCreateView>> {
    Access::Role(ROLE_ADMIN).check(user.as_ref())?;
    Ok(Json(EmployeeCreateView::default()))
}

/// Create an employee, with an optional photo
pub async fn create(
    State(state): State<ServerState>,
    user: Option<CurrentUser>,
    multipart: Multipart,
) -> AppResult<Response> {
    Access::Role(ROLE_ADMIN).check(user.as_ref())?;

    let form = EmployeeSubmission::from_multipart(multipart).await?;
    let errors = form.validate();
    if !errors.is_empty() {
        let view = EmployeeCreateView {
            name: form.name,
            email: form.email,
            department: form.department,
        };
        return Ok(FormView::invalid(view, errors).into_response());
    }

    let photo_path = state.photos.store(form.photo.as_ref()).await?;

    let repo = EmployeeRepository::new(state.db.clone());
    let created = repo
        .create(EmployeeCreate {
            name: form.name,
            email: form.email,
            department: form.department,
            photo_path: photo_path.clone(),
        })
        .await;

    let employee = match created {
        Ok(employee) => employee,
        Err(e) => {
            if let Some(path) = &photo_path {
                discard_photo(&state, path).await;
            }
            return Err(e.into());
        }
    };

    tracing::info!(
        employee_id = employee.id,
        photo = ?employee.photo_path,
        "Employee created"
    );

    Ok(Redirect::to(&format!("/api/employees/details/{}", employee.id)).into_response())
}

/// Edit form pre-filled from the stored record
pub async fn edit_form(
    State(state): State<ServerState>,
    user: Option<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<Json<EmployeeEditView>> {
    Access::Role(ROLE_ADMIN).check(user.as_ref())?;

    let id = parse_id(&id)?;
    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| employee_not_found(Some(id)))?;

    Ok(Json(EmployeeEditView::from(employee)))
}

/// Apply an edit
///
/// Name and email always change. The department only changes when
/// `edit_updates_department` is enabled. A new photo is written before the
/// record is updated and the previous file is removed afterwards.
pub async fn edit(
    State(state): State<ServerState>,
    user: Option<CurrentUser>,
    multipart: Multipart,
) -> AppResult<Response> {
    Access::Role(ROLE_ADMIN).check(user.as_ref())?;

    let form = EmployeeSubmission::from_multipart(multipart).await?;
    let id = form.parse_id()?;
    let errors = form.validate();
    if !errors.is_empty() {
        let view = EmployeeEditView {
            id,
            name: form.name,
            email: form.email,
            department: form.department,
            existing_photo_path: form.existing_photo_path,
        };
        return Ok(FormView::invalid(view, errors).into_response());
    }

    let repo = EmployeeRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| employee_not_found(Some(id)))?;

    // The stored path is authoritative; the form value is only echoed back
    if form.existing_photo_path != existing.photo_path {
        tracing::debug!(
            employee_id = id,
            submitted = ?form.existing_photo_path,
            stored = ?existing.photo_path,
            "Submitted photo path differs from stored record"
        );
    }

    let previous_photo = existing.photo_path.clone();
    let mut update = EmployeeUpdate::from(existing);
    update.name = form.name;
    update.email = form.email;
    if state.config.edit_updates_department {
        update.department = form.department;
    }

    let new_photo = state.photos.store(form.photo.as_ref()).await?;
    if let Some(path) = &new_photo {
        update.photo_path = Some(path.clone());
    }

    if let Err(e) = repo.update(id, update).await {
        if let Some(path) = &new_photo {
            discard_photo(&state, path).await;
        }
        return Err(e.into());
    }

    if new_photo.is_some()
        && let Some(old) = previous_photo
        && let Err(e) = state.photos.delete(&old).await
    {
        tracing::warn!(employee_id = id, file_name = %old, error = %e, "Failed to delete replaced photo");
    }

    tracing::info!(employee_id = id, photo_replaced = new_photo.is_some(), "Employee updated");

    Ok(Redirect::to(INDEX_PATH).into_response())
}

/// Delete by id; any signed-in account may do this
pub async fn delete(
    State(state): State<ServerState>,
    user: Option<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<Redirect> {
    Access::Authenticated.check(user.as_ref())?;

    let id = parse_id(&id)?;
    let repo = EmployeeRepository::new(state.db.clone());
    if repo.find_by_id(id).await?.is_none() {
        return Err(employee_not_found(Some(id)));
    }

    // The removed flag only differs from the lookup above under a concurrent delete
    let _ = repo.delete(id).await?;

    tracing::info!(
        employee_id = id,
        deleted_by = ?user.as_ref().map(|u| u.username.as_str()),
        "Employee deleted"
    );

    Ok(Redirect::to(INDEX_PATH))
}

/// Remove a photo written for a record that was never saved
async fn discard_photo(state: &ServerState, path: &str) {
    if let Err(e) = state.photos.delete(path).await {
        tracing::warn!(file_name = %path, error = %e, "Failed to remove orphaned photo");
    }
}
