//! Employee Repository

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Employee, EmployeeUpdate, NewEmployee};

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn parse_id(id: &str) -> RepoResult<RecordId> {
        id.parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))
    }

    /// Find all employees, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee ORDER BY createdAt DESC")
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let thing = Self::parse_id(id)?;
        let employee: Option<Employee> = self.base.db().select(thing).await?;
        Ok(employee)
    }

    /// Create a new employee record
    ///
    /// Timestamps are assigned by the store; a missing dateOfJoining
    /// defaults to the creation time.
    pub async fn create(&self, data: NewEmployee) -> RepoResult<Employee> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE employee SET
                    name = $name,
                    position = $position,
                    location = $location,
                    salary = $salary,
                    dateOfJoining = IF $date_of_joining != NONE THEN <datetime> $date_of_joining ELSE time::now() END,
                    createdAt = time::now(),
                    updatedAt = time::now()
                RETURN AFTER"#,
            )
            .bind(("name", data.name))
            .bind(("position", data.position))
            .bind(("location", data.location))
            .bind(("salary", data.salary))
            .bind(("date_of_joining", data.date_of_joining))
            .await?;

        let created: Option<Employee> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Partial update: only supplied fields change, the rest keep their
    /// stored values
    pub async fn update(&self, id: &str, data: EmployeeUpdate) -> RepoResult<Employee> {
        let thing = Self::parse_id(id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        // 文本字段经过校验后不会是空串，$x OR x 即可回退到旧值；
        // salary 可能为 0 (falsy)，必须用显式的 $has_salary 判断
        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    name = $name OR name,
                    position = $position OR position,
                    location = $location OR location,
                    salary = IF $has_salary THEN $salary ELSE salary END,
                    dateOfJoining = IF $date_of_joining != NONE THEN <datetime> $date_of_joining ELSE dateOfJoining END,
                    updatedAt = time::now()
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("name", data.name))
            .bind(("position", data.position))
            .bind(("location", data.location))
            .bind(("has_salary", data.salary.is_some()))
            .bind(("salary", data.salary))
            .bind(("date_of_joining", data.date_of_joining))
            .await?;

        result
            .take::<Option<Employee>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))
    }

    /// Hard delete; returns the deleted record
    pub async fn delete(&self, id: &str) -> RepoResult<Employee> {
        let thing = Self::parse_id(id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(existing)
    }
}
