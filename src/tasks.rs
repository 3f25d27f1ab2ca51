//!
//! # Task component
//!
//! Owns task records scoped to an owning user. Every operation is
//! parameterized by the authenticated owner's id, and every query or
//! mutation carries an ownership predicate: a task that exists but belongs
//! to another user behaves exactly like one that does not exist.

use crate::error::AppError;
use crate::models::{Task, TaskFilter, TaskInput, TaskStatus};
use sqlx::PgPool;
use uuid::Uuid;

const TASK_COLUMNS: &str = "id, title, description, status, created_at, updated_at, user_id";

pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the owner's tasks matching the filter. An absent filter
    /// returns everything the owner has; the search term matches title or
    /// description case-insensitively.
    pub async fn list(&self, filter: &TaskFilter, owner: i32) -> Result<Vec<Task>, AppError> {
        let sql = build_list_sql(filter);

        let mut query = sqlx::query_as::<_, Task>(&sql).bind(owner);

        if let Some(status) = &filter.status {
            query = query.bind(status);
        }
        if let Some(search) = &filter.search {
            let pattern = format!("%{}%", search);
            query = query.bind(pattern.clone());
            query = query.bind(pattern);
        }

        let tasks = query.fetch_all(&self.pool).await?;
        Ok(tasks)
    }

    /// Fetches a single task by id, gated on ownership. A miss is
    /// `NotFound` whether the task is absent or owned by someone else.
    pub async fn get_by_id(&self, id: Uuid, owner: i32) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            "SELECT {} FROM tasks WHERE id = $1 AND user_id = $2",
            TASK_COLUMNS
        ))
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        task.ok_or_else(|| AppError::NotFound(format!("Task with id \"{}\" not found", id)))
    }

    /// Creates a task owned by `owner`. New tasks always start as `Open`.
    pub async fn create(&self, input: TaskInput, owner: i32) -> Result<Task, AppError> {
        let task = Task::new(input, owner);

        let created = sqlx::query_as::<_, Task>(&format!(
            "INSERT INTO tasks (id, title, description, status, created_at, updated_at, user_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {}",
            TASK_COLUMNS
        ))
        .bind(task.id)
        .bind(task.title)
        .bind(task.description)
        .bind(task.status)
        .bind(task.created_at)
        .bind(task.updated_at)
        .bind(task.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Sets a task's status, enforcing ownership through `get_by_id` first.
    /// Transitions are unrestricted: any status may be set from any prior
    /// status.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: TaskStatus,
        owner: i32,
    ) -> Result<Task, AppError> {
        self.get_by_id(id, owner).await?;

        let updated = sqlx::query_as::<_, Task>(&format!(
            "UPDATE tasks SET status = $1, updated_at = now()
             WHERE id = $2 AND user_id = $3
             RETURNING {}",
            TASK_COLUMNS
        ))
        .bind(&status)
        .bind(id)
        .bind(owner)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Deletes the task matching id AND owner in a single conditional
    /// delete. Zero affected rows is `NotFound`, covering both an absent
    /// task and one owned by another user.
    pub async fn delete(&self, id: Uuid, owner: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Task with id \"{}\" not found",
                id
            )));
        }

        Ok(())
    }
}

/// Assembles the listing query. The owner predicate is always first;
/// status and search conditions are appended with positional parameters in
/// bind order.
fn build_list_sql(filter: &TaskFilter) -> String {
    let mut sql = format!(
        "SELECT {} FROM tasks WHERE user_id = $1",
        TASK_COLUMNS
    );
    let mut param = 2;

    if filter.status.is_some() {
        sql.push_str(&format!(" AND status = ${}", param));
        param += 1;
    }
    if filter.search.is_some() {
        sql.push_str(&format!(
            " AND (title ILIKE ${} OR description ILIKE ${})",
            param,
            param + 1
        ));
    }

    sql.push_str(" ORDER BY created_at DESC");
    sql
}
