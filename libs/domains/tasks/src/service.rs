use std::sync::Arc;
use tracing::instrument;

use crate::error::{TaskError, TaskResult, messages};
use crate::models::{Task, TaskInput, TaskStatus, parse_date_time};
use crate::repository::TaskRepository;

/// Service layer for Task business logic
#[derive(Clone)]
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Get a task by ID
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn get_task(&self, id: i32) -> TaskResult<Task> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    /// List every task
    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        self.repository.list_all().await
    }

    /// List tasks whose title contains `fragment`; an empty fragment matches all
    #[instrument(skip(self))]
    pub async fn list_by_title(&self, fragment: &str) -> TaskResult<Vec<Task>> {
        self.repository.list_by_title(fragment).await
    }

    /// List tasks on the calendar day of `raw_date`
    #[instrument(skip(self))]
    pub async fn list_by_date(&self, raw_date: &str) -> TaskResult<Vec<Task>> {
        let day = parse_date_time(raw_date)
            .ok_or_else(|| TaskError::Validation(messages::INVALID_DATE.to_string()))?
            .date();

        self.repository.list_by_date(day).await
    }

    /// List tasks with a status given as label or ordinal.
    ///
    /// Unlike the other listings, an empty result is an error here.
    #[instrument(skip(self))]
    pub async fn list_by_status(&self, raw_status: &str) -> TaskResult<Vec<Task>> {
        let status = TaskStatus::parse(raw_status)
            .ok_or_else(|| TaskError::Validation(messages::INVALID_STATUS.to_string()))?;

        let tasks = self.repository.list_by_status(status).await?;
        if tasks.is_empty() {
            return Err(TaskError::NoneWithStatus(status));
        }

        Ok(tasks)
    }

    /// Create a new task with validation
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create_task(&self, input: TaskInput) -> TaskResult<Task> {
        let new_task = input.into_new_task()?;
        self.repository.create(new_task).await
    }

    /// Replace every field of an existing task
    #[instrument(skip(self, input), fields(task_id = %id))]
    pub async fn update_task(&self, id: i32, input: TaskInput) -> TaskResult<Task> {
        let mut task = self.get_task(id).await?;
        let changes = input.into_new_task()?;

        task.overwrite(changes);
        self.repository.update(task).await
    }

    /// Delete a task
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn delete_task(&self, id: i32) -> TaskResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(TaskError::NotFound(id));
        }

        Ok(())
    }
}
