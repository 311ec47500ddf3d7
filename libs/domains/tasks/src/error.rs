use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

use crate::models::TaskStatus;

/// User-facing messages returned in error bodies.
pub mod messages {
    pub const INVALID_STATUS: &str = "Status inválido.";
    pub const NO_TASKS_WITH_STATUS: &str = "Nenhuma tarefa encontrada com o status especificado.";
    pub const EMPTY_DATE: &str = "A data da tarefa não pode ser vazia";
    pub const INVALID_TASK_STATUS: &str = "Status da tarefa inválido";
    pub const TASK_NOT_FOUND: &str = "Tarefa não encontrada.";
    pub const INVALID_DATE: &str = "Data inválida.";
}

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Tarefa {0} não encontrada.")]
    NotFound(i32),

    #[error("Nenhuma tarefa encontrada com o status {0}.")]
    NoneWithStatus(TaskStatus),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub type TaskResult<T> = Result<T, TaskError>;

/// Convert TaskError to AppError for standardized error responses
impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(_) => AppError::NotFound(messages::TASK_NOT_FOUND.to_string()),
            TaskError::NoneWithStatus(_) => {
                AppError::NotFound(messages::NO_TASKS_WITH_STATUS.to_string())
            }
            TaskError::Validation(msg) => AppError::BadRequest(msg),
            TaskError::Database(err) => AppError::Database(err),
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
