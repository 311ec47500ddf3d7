use crate::models::{NewTask, Task, TaskStatus};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Path the task routes are mounted at, relative to `/api`
pub const URL: &str = "/Tarefa";

/// Sea-ORM Entity for the tarefas table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tarefas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub titulo: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub descricao: Option<String>,
    pub data: DateTime,
    pub status: TaskStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Task {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.titulo,
            description: model.descricao,
            date: model.data,
            status: model.status,
        }
    }
}

// id stays NotSet so the serial column assigns it
impl From<NewTask> for ActiveModel {
    fn from(input: NewTask) -> Self {
        ActiveModel {
            id: NotSet,
            titulo: Set(input.title),
            descricao: Set(input.description),
            data: Set(input.date),
            status: Set(input.status),
        }
    }
}
