use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use crate::error::{TaskError, TaskResult};
use crate::models::{NewTask, Task, TaskStatus, day_bounds};

/// Repository trait for Task persistence
///
/// This trait defines the data access interface for tasks.
/// Implementations can use different storage backends (PostgreSQL, in-memory)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a task, letting the store assign its id
    async fn create(&self, input: NewTask) -> TaskResult<Task>;

    /// Get a task by ID
    async fn get_by_id(&self, id: i32) -> TaskResult<Option<Task>>;

    /// List every task ordered by id
    async fn list_all(&self) -> TaskResult<Vec<Task>>;

    /// List tasks whose title contains `fragment`
    async fn list_by_title(&self, fragment: &str) -> TaskResult<Vec<Task>>;

    /// List tasks scheduled on `day`, whatever the time of day
    async fn list_by_date(&self, day: NaiveDate) -> TaskResult<Vec<Task>>;

    /// List tasks with the given status
    async fn list_by_status(&self, status: TaskStatus) -> TaskResult<Vec<Task>>;

    /// Persist every field of an existing task
    async fn update(&self, task: Task) -> TaskResult<Task>;

    /// Delete a task by ID, returning whether a row was removed
    async fn delete(&self, id: i32) -> TaskResult<bool>;
}

/// In-memory implementation of TaskRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<BTreeMap<i32, Task>>>,
    next_id: Arc<AtomicI32>,
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
        }
    }

    async fn filtered<F>(&self, predicate: F) -> Vec<Task>
    where
        F: Fn(&Task) -> bool,
    {
        let tasks = self.tasks.read().await;
        tasks.values().filter(|t| predicate(t)).cloned().collect()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, input: NewTask) -> TaskResult<Task> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let task = Task {
            id,
            title: input.title,
            description: input.description,
            date: input.date,
            status: input.status,
        };

        self.tasks.write().await.insert(id, task.clone());

        tracing::info!(task_id = id, "Created task");
        Ok(task)
    }

    async fn get_by_id(&self, id: i32) -> TaskResult<Option<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.get(&id).cloned())
    }

    async fn list_all(&self) -> TaskResult<Vec<Task>> {
        Ok(self.filtered(|_| true).await)
    }

    async fn list_by_title(&self, fragment: &str) -> TaskResult<Vec<Task>> {
        Ok(self.filtered(|t| t.title.contains(fragment)).await)
    }

    async fn list_by_date(&self, day: NaiveDate) -> TaskResult<Vec<Task>> {
        let (start, end) = day_bounds(day);
        Ok(self
            .filtered(|t| t.date >= start && end.is_none_or(|end| t.date < end))
            .await)
    }

    async fn list_by_status(&self, status: TaskStatus) -> TaskResult<Vec<Task>> {
        Ok(self.filtered(|t| t.status == status).await)
    }

    async fn update(&self, task: Task) -> TaskResult<Task> {
        let mut tasks = self.tasks.write().await;
        let stored = tasks.get_mut(&task.id).ok_or(TaskError::NotFound(task.id))?;
        *stored = task.clone();

        tracing::info!(task_id = task.id, "Updated task");
        Ok(task)
    }

    async fn delete(&self, id: i32) -> TaskResult<bool> {
        let removed = self.tasks.write().await.remove(&id).is_some();

        if removed {
            tracing::info!(task_id = id, "Deleted task");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn new_task(title: &str, date: NaiveDateTime, status: TaskStatus) -> NewTask {
        NewTask {
            title: title.to_string(),
            description: None,
            date,
            status,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryTaskRepository::new();

        let first = repo.create(new_task("a", at(1, 0), TaskStatus::Pending)).await.unwrap();
        let second = repo.create(new_task("b", at(1, 0), TaskStatus::Pending)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryTaskRepository::new();

        let first = repo.create(new_task("a", at(1, 0), TaskStatus::Pending)).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());

        let second = repo.create(new_task("b", at(1, 0), TaskStatus::Pending)).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_list_by_date_ignores_time_of_day() {
        let repo = InMemoryTaskRepository::new();
        repo.create(new_task("morning", at(1, 0), TaskStatus::Pending)).await.unwrap();
        repo.create(new_task("evening", at(1, 23), TaskStatus::Pending)).await.unwrap();
        repo.create(new_task("next day", at(2, 0), TaskStatus::Pending)).await.unwrap();

        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let titles: Vec<String> = repo
            .list_by_date(day)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();

        assert_eq!(titles, vec!["morning", "evening"]);
    }

    #[tokio::test]
    async fn test_list_by_title_is_substring_match() {
        let repo = InMemoryTaskRepository::new();
        repo.create(new_task("Comprar pão", at(1, 0), TaskStatus::Pending)).await.unwrap();
        repo.create(new_task("Lavar carro", at(1, 0), TaskStatus::Pending)).await.unwrap();

        assert_eq!(repo.list_by_title("pão").await.unwrap().len(), 1);
        assert_eq!(repo.list_by_title("").await.unwrap().len(), 2);
        assert!(repo.list_by_title("PÃO").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_task_fails() {
        let repo = InMemoryTaskRepository::new();
        let ghost = Task {
            id: 99,
            title: "ghost".to_string(),
            description: None,
            date: at(1, 0),
            status: TaskStatus::Done,
        };

        assert!(matches!(
            repo.update(ghost).await,
            Err(TaskError::NotFound(99))
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false() {
        let repo = InMemoryTaskRepository::new();
        assert!(!repo.delete(1).await.unwrap());
    }
}
