use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{StatusUpdate, TaskFilter, TaskInput},
    tasks::TaskRepository,
};
use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

/// Retrieves a list of tasks for the authenticated user.
///
/// ## Query Parameters:
/// - `status` (optional): filters tasks by status (`OPEN`, `IN_PROGRESS`, `DONE`).
/// - `search` (optional): matched case-insensitively against titles and descriptions.
///
/// ## Responses:
/// - `200 OK`: a JSON array of `Task` objects owned by the caller.
/// - `401 Unauthorized`: missing or invalid authentication token.
/// - `500 Internal Server Error`: database errors or other unexpected issues.
#[get("")]
pub async fn get_tasks(
    repo: web::Data<TaskRepository>,
    filter: web::Query<TaskFilter>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    filter.validate()?;

    let tasks = repo.list(&filter, user.id).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a new task owned by the authenticated user.
///
/// ## Request Body:
/// A JSON object with `title` and `description`. The status of a new task
/// is always `OPEN`.
///
/// ## Responses:
/// - `201 Created`: the newly created `Task` object.
/// - `401 Unauthorized`: missing or invalid authentication token.
/// - `422 Unprocessable Entity`: input validation failed.
/// - `500 Internal Server Error`: database errors or other unexpected issues.
#[post("")]
pub async fn create_task(
    repo: web::Data<TaskRepository>,
    input: web::Json<TaskInput>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    input.validate()?;

    let task = repo.create(input.into_inner(), user.id).await?;
    Ok(HttpResponse::Created().json(task))
}

/// Retrieves a specific task by its ID.
///
/// ## Responses:
/// - `200 OK`: the `Task` object, if it exists and the caller owns it.
/// - `401 Unauthorized`: missing or invalid authentication token.
/// - `404 Not Found`: the task does not exist or belongs to another user;
///   the two cases are indistinguishable.
#[get("/{id}")]
pub async fn get_task(
    repo: web::Data<TaskRepository>,
    task_id: web::Path<Uuid>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let task = repo.get_by_id(task_id.into_inner(), user.id).await?;
    Ok(HttpResponse::Ok().json(task))
}

/// Updates the status of a task owned by the authenticated user.
///
/// Any status may be set from any prior status; there is no transition
/// table.
///
/// ## Request Body:
/// A JSON object with a single `status` field.
///
/// ## Responses:
/// - `200 OK`: the updated `Task` object.
/// - `401 Unauthorized`: missing or invalid authentication token.
/// - `404 Not Found`: the task does not exist or belongs to another user.
#[patch("/{id}/status")]
pub async fn update_task_status(
    repo: web::Data<TaskRepository>,
    task_id: web::Path<Uuid>,
    update: web::Json<StatusUpdate>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let task = repo
        .update_status(task_id.into_inner(), update.into_inner().status, user.id)
        .await?;
    Ok(HttpResponse::Ok().json(task))
}

/// Deletes a task owned by the authenticated user.
///
/// ## Responses:
/// - `204 No Content`: on successful deletion.
/// - `401 Unauthorized`: missing or invalid authentication token.
/// - `404 Not Found`: the task does not exist or belongs to another user.
#[delete("/{id}")]
pub async fn delete_task(
    repo: web::Data<TaskRepository>,
    task_id: web::Path<Uuid>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    repo.delete(task_id.into_inner(), user.id).await?;
    Ok(HttpResponse::NoContent().finish())
}
