use async_trait::async_trait;

use crate::{
    entities::employee::Employee, errors::AppError, repositories::sqlx_repo::SqlxEmployeeRepo,
};

const EMPLOYEE_COLUMNS: &str = "id, name, role, gender, dob, location, email, phone, \
     join_date, experience, skills, achievement, profile_image";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, AppError>;
    async fn insert(&self, employee: &Employee) -> Result<(), AppError>;
    async fn update(&self, employee: &Employee) -> Result<(), AppError>;
    async fn list_all(&self) -> Result<Vec<Employee>, AppError>;
    async fn delete(&self, id: &str) -> Result<u64, AppError>;
}

impl SqlxEmployeeRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxEmployeeRepo { pool }
    }
}

#[async_trait]
impl EmployeeRepository for SqlxEmployeeRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, AppError> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn insert(&self, employee: &Employee) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO employees \
             (id, name, role, gender, dob, location, email, phone, \
              join_date, experience, skills, achievement, profile_image) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
        )
        .bind(&employee.id)
        .bind(&employee.name)
        .bind(&employee.role)
        .bind(&employee.gender)
        .bind(employee.dob)
        .bind(&employee.location)
        .bind(&employee.email)
        .bind(&employee.phone)
        .bind(employee.join_date)
        .bind(employee.experience)
        .bind(&employee.skills)
        .bind(&employee.achievement)
        .bind(&employee.profile_image)
        .execute(&self.pool)
        .await
        .map(|_| ())
        .map_err(AppError::from)
    }

    async fn update(&self, employee: &Employee) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE employees SET \
             name = $2, role = $3, gender = $4, dob = $5, location = $6, \
             email = $7, phone = $8, join_date = $9, experience = $10, \
             skills = $11, achievement = $12, profile_image = $13 \
             WHERE id = $1",
        )
        .bind(&employee.id)
        .bind(&employee.name)
        .bind(&employee.role)
        .bind(&employee.gender)
        .bind(employee.dob)
        .bind(&employee.location)
        .bind(&employee.email)
        .bind(&employee.phone)
        .bind(employee.join_date)
        .bind(employee.experience)
        .bind(&employee.skills)
        .bind(&employee.achievement)
        .bind(&employee.profile_image)
        .execute(&self.pool)
        .await
        .map(|_| ())
        .map_err(AppError::from)
    }

    async fn list_all(&self) -> Result<Vec<Employee>, AppError> {
        sqlx::query_as::<_, Employee>(&format!("SELECT {EMPLOYEE_COLUMNS} FROM employees"))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn delete(&self, id: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected())
    }
}
