//! Employee form submissions
//!
//! Create and edit arrive as `multipart/form-data` so a photo can ride
//! along with the text fields.

use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::services::{PhotoStore, PhotoUpload};
use crate::utils::validation::{
    FieldErrors, MAX_DEPARTMENT_LEN, MAX_NAME_LEN, validate_email, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Fields of a create or edit submission
#[derive(Debug, Clone, Default)]
pub struct EmployeeSubmission {
    /// Only sent by the edit form
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub department: String,
    /// Photo path the edit form was rendered with
    pub existing_photo_path: Option<String>,
    pub photo: Option<PhotoUpload>,
}

/// `ExistingPhotoPath`, `existing_photo_path` and `existingphotopath` all match
fn normalize_key(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

fn multipart_error(e: impl std::fmt::Display) -> AppError {
    AppError::validation(format!("Invalid multipart request: {}", e))
}

impl EmployeeSubmission {
    /// Read every field of the multipart body
    ///
    /// A file part with no bytes is what browsers send when no file was
    /// chosen; it counts as "no photo".
    pub async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let key = normalize_key(field.name().unwrap_or_default());

            if key == "photo" {
                let file_name = field.file_name().map(|s| s.to_string());
                let data = field.bytes().await.map_err(multipart_error)?;
                if data.is_empty() {
                    continue;
                }
                let file_name = file_name
                    .filter(|n| !n.trim().is_empty())
                    .ok_or_else(|| AppError::new(ErrorCode::NoFilename))?;
                form.photo = Some(PhotoUpload::new(file_name, data));
                continue;
            }

            let value = field.text().await.map_err(multipart_error)?;
            let value = value.trim().to_string();
            match key.as_str() {
                "id" => form.id = Some(value),
                "name" => form.name = value,
                "email" => form.email = value,
                "department" => form.department = value,
                "existingphotopath" => {
                    form.existing_photo_path = Some(value).filter(|v| !v.is_empty())
                }
                other => tracing::debug!(field = %other, "Ignoring unknown form field"),
            }
        }

        Ok(form)
    }

    /// Field-level checks, including the photo when one was attached
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("name", validate_required_text(&self.name, "Name", MAX_NAME_LEN));
        errors.check("email", validate_email(&self.email, "Email"));
        errors.check(
            "department",
            validate_required_text(&self.department, "Department", MAX_DEPARTMENT_LEN),
        );
        if let Some(photo) = &self.photo {
            errors.check("photo", PhotoStore::validate(photo));
        }
        errors
    }

    /// The edit form must carry a numeric id
    pub fn parse_id(&self) -> AppResult<i64> {
        let raw = self
            .id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::with_message(ErrorCode::RequiredField, "Id is required"))?;
        raw.parse().map_err(|_| {
            AppError::validation(format!("Invalid employee id: {}", raw)).with_detail("id", raw)
        })
    }
}

/// Form redisplayed with the submitted values and what was wrong with them
#[derive(Debug, Serialize)]
pub struct FormView<T> {
    pub code: ErrorCode,
    pub message: String,
    pub form: T,
    pub errors: FieldErrors,
}

impl<T: Serialize> FormView<T> {
    pub fn invalid(form: T, errors: FieldErrors) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: ErrorCode::ValidationFailed.message().to_string(),
            form,
            errors,
        }
    }
}

impl<T: Serialize> IntoResponse for FormView<T> {
    fn into_response(self) -> Response {
        (StatusCode::UNPROCESSABLE_ENTITY, Json(self)).into_response()
    }
}
