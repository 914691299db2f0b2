//! Employee Repository

use super::{RepoError, RepoResult, Repository};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl Repository<Employee, EmployeeCreate, EmployeeUpdate> for EmployeeRepository {
    /// All employees, ordered by id
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let rows: Vec<Employee> = sqlx::query_as(
            "SELECT id, name, email, department, photo_path FROM employee ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        let row: Option<Employee> = sqlx::query_as(
            "SELECT id, name, email, department, photo_path FROM employee WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        let id = sqlx::query(
            "INSERT INTO employee (name, email, department, photo_path) VALUES (?, ?, ?, ?)",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.department)
        .bind(&data.photo_path)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(Employee {
            id,
            name: data.name,
            email: data.email,
            department: data.department,
            photo_path: data.photo_path,
        })
    }

    /// Overwrite every mutable column; the id never changes
    async fn update(&self, id: i64, data: EmployeeUpdate) -> RepoResult<Employee> {
        let rows = sqlx::query(
            "UPDATE employee SET name = ?, email = ?, department = ?, photo_path = ? WHERE id = ?",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.department)
        .bind(&data.photo_path)
        .bind(id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if rows == 0 {
            return Err(RepoError::NotFound(format!("Employee {id} not found")));
        }

        Ok(Employee {
            id,
            name: data.name,
            email: data.email,
            department: data.department,
            photo_path: data.photo_path,
        })
    }

    /// Returns whether a row was removed
    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let rows = sqlx::query("DELETE FROM employee WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(rows > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn repo() -> EmployeeRepository {
        let db = DbService::in_memory().await.unwrap();
        EmployeeRepository::new(db.pool)
    }

    fn ann() -> EmployeeCreate {
        EmployeeCreate {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            department: "HR".to_string(),
            photo_path: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = repo().await;
        let first = repo.create(ann()).await.unwrap();
        let second = repo.create(ann()).await.unwrap();

        assert!(second.id > first.id);
        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first.id);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repo = repo().await;
        let created = repo.create(ann()).await.unwrap();

        let mut update = EmployeeUpdate::from(created.clone());
        update.name = "Anne".to_string();
        update.photo_path = Some("abc_me.png".to_string());
        let updated = repo.update(created.id, update).await.unwrap();
        assert_eq!(updated.id, created.id);

        let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Anne");
        assert_eq!(stored.photo_path.as_deref(), Some("abc_me.png"));

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = repo().await;
        let update = EmployeeUpdate {
            name: "Ghost".to_string(),
            email: "g@x.com".to_string(),
            department: "IT".to_string(),
            photo_path: None,
        };
        let err = repo.update(42, update).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }
}
