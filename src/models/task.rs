use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Represents the status of a task.
/// Corresponds to the `task_status` SQL enum.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Task is yet to be started. Every task begins here.
    Open,
    /// Task is currently being worked on.
    InProgress,
    /// Task is completed.
    Done,
}

/// Input structure for creating a task. The status is not part of the
/// input; new tasks always start as `Open`.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    /// The title of the task. Must be between 1 and 200 characters.
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// A description for the task. Must be between 1 and 1000 characters.
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
}

/// Payload for the status-update operation. Any status may be set from any
/// prior status; no transition table is enforced.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: TaskStatus,
}

/// Represents a task entity as stored in the database and returned by the API.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique identifier for the task (UUID v4).
    pub id: Uuid,
    /// The title of the task.
    pub title: String,
    /// A description for the task.
    pub description: String,
    /// The current status of the task.
    pub status: TaskStatus,
    /// Timestamp of when the task was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last update to the task.
    pub updated_at: DateTime<Utc>,
    /// Identifier of the user who owns the task.
    pub user_id: i32,
}

/// Query parameters for filtering tasks when listing them. Both predicates
/// are optional; absent filters return all of the owner's tasks.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskFilter {
    /// Filter tasks by status.
    pub status: Option<TaskStatus>,
    /// Search term matched case-insensitively against title and description.
    #[validate(length(min = 1))]
    pub search: Option<String>,
}

impl Task {
    /// Creates a new `Task` from `TaskInput` and the owner's user id.
    /// Sets `created_at`/`updated_at` to the current time, `id` to a fresh
    /// UUID, and the status to `Open`.
    pub fn new(input: TaskInput, user_id: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            status: TaskStatus::Open,
            created_at: now,
            updated_at: now,
            user_id,
        }
    }
}
