//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee entity
///
/// `photo_path` is a bare filename inside the images directory,
/// never a full path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: String,
    pub photo_path: Option<String>,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub email: String,
    pub department: String,
    pub photo_path: Option<String>,
}

/// Update employee payload
///
/// Full replacement of the mutable columns; `id` stays untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: String,
    pub email: String,
    pub department: String,
    pub photo_path: Option<String>,
}

impl From<Employee> for EmployeeUpdate {
    fn from(employee: Employee) -> Self {
        Self {
            name: employee.name,
            email: employee.email,
            department: employee.department,
            photo_path: employee.photo_path,
        }
    }
}

/// Details page payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeDetails {
    pub employee: Employee,
    pub page_title: String,
}

/// Create form descriptor (always rendered blank)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeCreateView {
    pub name: String,
    pub email: String,
    pub department: String,
}

/// Edit form descriptor, pre-filled from the stored record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeEditView {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: String,
    pub existing_photo_path: Option<String>,
}

impl From<Employee> for EmployeeEditView {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            email: employee.email,
            department: employee.department,
            existing_photo_path: employee.photo_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> Employee {
        Employee {
            id: 7,
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            department: "HR".to_string(),
            photo_path: Some("abc_ann.png".to_string()),
        }
    }

    #[test]
    fn test_edit_view_from_employee() {
        let view = EmployeeEditView::from(ann());
        assert_eq!(view.id, 7);
        assert_eq!(view.department, "HR");
        assert_eq!(view.existing_photo_path.as_deref(), Some("abc_ann.png"));
    }

    #[test]
    fn test_employee_serialize_null_photo() {
        let mut employee = ann();
        employee.photo_path = None;
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["photo_path"], serde_json::Value::Null);
        assert_eq!(json["name"], "Ann");
    }
}
