use std::sync::Arc;

use chrono::NaiveDate;

use crate::{
    constants::{EMPLOYEE_EMAIL_RE, EMPLOYEE_ID_RE, PHONE_RE},
    entities::employee::{Employee, EmployeeInput, RawEmployeeFields, UpsertOutcome},
    errors::AppError,
    repositories::employee::EmployeeRepository,
};

pub struct EmployeeHandler {
    pub repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeHandler {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        EmployeeHandler { repo }
    }

    /// Required-field check followed by the format checks, each
    /// short-circuiting on the first failure. Nothing is written to the
    /// store until this has passed.
    pub fn validate(raw: &RawEmployeeFields) -> Result<EmployeeInput, AppError> {
        let id = required(&raw.id, "id")?;
        let name = required(&raw.name, "name")?;
        let role = required(&raw.role, "role")?;
        let gender = required(&raw.gender, "gender")?;
        let dob = required(&raw.dob, "dob")?;
        let location = required(&raw.location, "location")?;
        let email = required(&raw.email, "email")?;
        let phone = required(&raw.phone, "phone")?;
        let join_date = required(&raw.join_date, "joinDate")?;
        let experience = required(&raw.experience, "experience")?;
        let skills = required(&raw.skills, "skills")?;
        let achievement = required(&raw.achievement, "achievement")?;

        if !EMPLOYEE_ID_RE.is_match(&id) {
            return Err(AppError::InvalidIdFormat);
        }
        if !EMPLOYEE_EMAIL_RE.is_match(&email) {
            return Err(AppError::InvalidEmailFormat);
        }
        if !PHONE_RE.is_match(&phone) {
            return Err(AppError::InvalidPhoneFormat);
        }

        Ok(EmployeeInput {
            id,
            name,
            role,
            gender,
            dob: parse_date(&dob)?,
            location,
            email,
            phone,
            join_date: parse_date(&join_date)?,
            experience: parse_integer(&experience)?,
            skills,
            achievement,
        })
    }

    /// Single read-then-write by id: full-overwrite update when the id
    /// exists, insert otherwise. Every field is replaced on update,
    /// `profile_image` included.
    pub async fn upsert(
        &self,
        input: EmployeeInput,
        profile_image: Option<String>,
    ) -> Result<(UpsertOutcome, Option<String>), AppError> {
        let record = input.into_record(profile_image);

        let outcome = match self.repo.find_by_id(&record.id).await? {
            Some(_) => {
                self.repo.update(&record).await?;
                UpsertOutcome::Updated
            }
            None => {
                self.repo.insert(&record).await?;
                UpsertOutcome::Created
            }
        };

        Ok((outcome, record.profile_image))
    }

    pub async fn list(&self) -> Result<Vec<Employee>, AppError> {
        self.repo.list_all().await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let removed = self.repo.delete(id).await?;
        if removed == 0 {
            return Err(AppError::NotFound(format!("Employee {id} not found")));
        }
        Ok(())
    }
}

fn required(value: &Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.clone()),
        _ => Err(AppError::MissingField(field.to_string())),
    }
}

// Unparseable dates and integers surface as store errors, the same way the
// relational store would have reported a failed coercion.
fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    value
        .parse::<NaiveDate>()
        .map_err(|_| AppError::StoreError(format!("invalid date literal: {value}")))
}

fn parse_integer(value: &str) -> Result<i32, AppError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| AppError::StoreError(format!("invalid integer literal: {value}")))
}
