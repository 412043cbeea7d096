use actix_multipart::form::MultipartForm;
use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    entities::employee::{EmployeeUpload, UpsertOutcome, UpsertResponse},
    errors::AppError,
    use_cases::employee::EmployeeHandler,
    AppState,
};

#[get("/employees")]
pub async fn list_employees(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let employees = state.employees.list().await?;
    Ok(HttpResponse::Ok().json(employees))
}

#[post("/add-employee")]
pub async fn add_employee(
    state: web::Data<AppState>,
    form: MultipartForm<EmployeeUpload>,
) -> Result<HttpResponse, AppError> {
    let (raw, upload) = form.into_inner().into_parts();

    // Field validation runs before the image ever reaches the upload
    // directory, so a rejected request persists nothing.
    let input = EmployeeHandler::validate(&raw)?;

    let profile_image = match upload {
        Some(file) => Some(state.media.store(file).await?),
        None => None,
    };

    let (outcome, profile_image) = state.employees.upsert(input, profile_image).await?;

    let response = match outcome {
        UpsertOutcome::Created => HttpResponse::Created().json(UpsertResponse {
            message: "Employee added successfully".to_string(),
            profile_image,
        }),
        UpsertOutcome::Updated => HttpResponse::Ok().json(UpsertResponse {
            message: "Employee updated successfully".to_string(),
            profile_image,
        }),
    };
    Ok(response)
}

#[delete("/delete-employee/{id}")]
pub async fn delete_employee(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.employees.delete(&id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Employee deleted successfully"
    })))
}
