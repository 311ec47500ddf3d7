use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Select,
};

use crate::{
    entity,
    error::{TaskError, TaskResult},
    models::{NewTask, Task, TaskStatus, day_bounds},
    repository::TaskRepository,
};

/// SeaORM-backed task repository
#[derive(Clone)]
pub struct PgTaskRepository {
    db: DatabaseConnection,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch(&self, query: sea_orm::Select<entity::Entity>) -> TaskResult<Vec<Task>> {
        let models = query
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

/// Escape backslash, `%` and `_` so `fragment` only matches itself inside a LIKE pattern.
fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Tasks whose title contains `fragment` literally.
fn title_contains(fragment: &str) -> Select<entity::Entity> {
    let pattern = LikeExpr::new(format!("%{}%", escape_like(fragment))).escape('\\');
    entity::Entity::find().filter(entity::Column::Titulo.like(pattern))
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn create(&self, input: NewTask) -> TaskResult<Task> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(task_id = model.id, "Created task");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> TaskResult<Option<Task>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list_all(&self) -> TaskResult<Vec<Task>> {
        self.fetch(entity::Entity::find()).await
    }

    async fn list_by_title(&self, fragment: &str) -> TaskResult<Vec<Task>> {
        self.fetch(title_contains(fragment)).await
    }

    async fn list_by_date(&self, day: NaiveDate) -> TaskResult<Vec<Task>> {
        let (start, end) = day_bounds(day);

        let mut query = entity::Entity::find().filter(entity::Column::Data.gte(start));
        if let Some(end) = end {
            query = query.filter(entity::Column::Data.lt(end));
        }

        self.fetch(query).await
    }

    async fn list_by_status(&self, status: TaskStatus) -> TaskResult<Vec<Task>> {
        self.fetch(entity::Entity::find().filter(entity::Column::Status.eq(status)))
            .await
    }

    async fn update(&self, task: Task) -> TaskResult<Task> {
        let id = task.id;
        let active_model = entity::ActiveModel {
            id: Unchanged(id),
            titulo: Set(task.title),
            descricao: Set(task.description),
            data: Set(task.date),
            status: Set(task.status),
        };

        let model = active_model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => TaskError::NotFound(id),
            other => other.into(),
        })?;

        tracing::info!(task_id = id, "Updated task");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> TaskResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(task_id = id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
