use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use chrono::NaiveDate;
use serde::Serialize;

// ───── Database Model ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub role: String,
    pub gender: String,
    pub dob: NaiveDate,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub join_date: NaiveDate,
    pub experience: i32,
    pub skills: String,
    pub achievement: String,
    pub profile_image: Option<String>,
}

// ───── Multipart Input ──────────────────────────────────────────────

/// Raw multipart payload of POST /api/add-employee. Every text field is
/// optional at this layer so the upsert pipeline can report exactly which
/// one is missing instead of failing extraction wholesale.
#[derive(Debug, MultipartForm)]
pub struct EmployeeUpload {
    pub id: Option<Text<String>>,
    pub name: Option<Text<String>>,
    pub role: Option<Text<String>>,
    pub gender: Option<Text<String>>,
    pub dob: Option<Text<String>>,
    pub location: Option<Text<String>>,
    pub email: Option<Text<String>>,
    pub phone: Option<Text<String>>,
    #[multipart(rename = "joinDate")]
    pub join_date: Option<Text<String>>,
    pub experience: Option<Text<String>>,
    pub skills: Option<Text<String>>,
    pub achievement: Option<Text<String>>,
    #[multipart(rename = "profileImage", limit = "20MB")]
    pub profile_image: Option<TempFile>,
}

impl EmployeeUpload {
    pub fn into_parts(self) -> (RawEmployeeFields, Option<TempFile>) {
        let fields = RawEmployeeFields {
            id: self.id.map(|t| t.into_inner()),
            name: self.name.map(|t| t.into_inner()),
            role: self.role.map(|t| t.into_inner()),
            gender: self.gender.map(|t| t.into_inner()),
            dob: self.dob.map(|t| t.into_inner()),
            location: self.location.map(|t| t.into_inner()),
            email: self.email.map(|t| t.into_inner()),
            phone: self.phone.map(|t| t.into_inner()),
            join_date: self.join_date.map(|t| t.into_inner()),
            experience: self.experience.map(|t| t.into_inner()),
            skills: self.skills.map(|t| t.into_inner()),
            achievement: self.achievement.map(|t| t.into_inner()),
        };
        (fields, self.profile_image)
    }
}

/// Text fields as the caller sent them, before any validation.
#[derive(Debug, Clone, Default)]
pub struct RawEmployeeFields {
    pub id: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub gender: Option<String>,
    pub dob: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub join_date: Option<String>,
    pub experience: Option<String>,
    pub skills: Option<String>,
    pub achievement: Option<String>,
}

/// Field set that has passed the required-field and format checks, with the
/// calendar and numeric fields parsed into their column types.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeInput {
    pub id: String,
    pub name: String,
    pub role: String,
    pub gender: String,
    pub dob: NaiveDate,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub join_date: NaiveDate,
    pub experience: i32,
    pub skills: String,
    pub achievement: String,
}

impl EmployeeInput {
    /// A write without an attachment clears `profile_image`; the prior value
    /// is never carried over.
    pub fn into_record(self, profile_image: Option<String>) -> Employee {
        Employee {
            id: self.id,
            name: self.name,
            role: self.role,
            gender: self.gender,
            dob: self.dob,
            location: self.location,
            email: self.email,
            phone: self.phone,
            join_date: self.join_date,
            experience: self.experience,
            skills: self.skills,
            achievement: self.achievement,
            profile_image,
        }
    }
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

#[derive(Debug, Serialize)]
pub struct UpsertResponse {
    pub message: String,
    pub profile_image: Option<String>,
}
