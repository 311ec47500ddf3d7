use axum::{
    Json, Router,
    extract::{OriginalUri, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::errors::responses::{
    BadRequestResponse, InternalServerErrorResponse, NotFoundResponse, ServiceUnavailableResponse,
};
use axum_helpers::{ErrorResponse, IdPath, JsonBody, QueryParams};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::TaskResult;
use crate::models::{DateQuery, StatusQuery, Task, TaskInput, TaskStatus, TitleQuery};
use crate::repository::TaskRepository;
use crate::service::TaskService;

type SharedService<R> = State<Arc<TaskService<R>>>;

/// OpenAPI documentation for the task routes
#[derive(OpenApi)]
#[openapi(
    paths(
        create_task,
        list_tasks,
        list_by_title,
        list_by_date,
        list_by_status,
        get_task,
        update_task,
        delete_task,
    ),
    components(
        schemas(Task, TaskInput, TaskStatus, ErrorResponse),
        responses(
            BadRequestResponse,
            NotFoundResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = "Tarefa", description = "Gerenciamento de tarefas")
    )
)]
pub struct ApiDoc;

/// Build the task router.
///
/// Mount it with `nest(entity::URL, ...)`; the `Location` header of a created
/// task is derived from the request path so it follows the mount point.
pub fn router<R: TaskRepository + 'static>(service: TaskService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", axum::routing::post(create_task::<R>))
        .route("/ObterTodos", get(list_tasks::<R>))
        .route("/ObterPorTitulo", get(list_by_title::<R>))
        .route("/ObterPorData", get(list_by_date::<R>))
        .route("/ObterPorStatus", get(list_by_status::<R>))
        .route(
            "/{id}",
            get(get_task::<R>)
                .put(update_task::<R>)
                .delete(delete_task::<R>),
        )
        .with_state(shared_service)
}

/// Create a task
#[utoipa::path(
    post,
    path = "",
    tag = "Tarefa",
    request_body = TaskInput,
    responses(
        (status = 201, description = "Tarefa criada", body = Task,
            headers(("Location" = String, description = "URL da tarefa criada"))),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
pub async fn create_task<R: TaskRepository>(
    State(service): SharedService<R>,
    OriginalUri(uri): OriginalUri,
    JsonBody(input): JsonBody<TaskInput>,
) -> TaskResult<impl IntoResponse> {
    let task = service.create_task(input).await?;
    let location = format!("{}/{}", uri.path().trim_end_matches('/'), task.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(task),
    ))
}

/// List every task
#[utoipa::path(
    get,
    path = "/ObterTodos",
    tag = "Tarefa",
    responses(
        (status = 200, description = "Todas as tarefas", body = Vec<Task>),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
pub async fn list_tasks<R: TaskRepository>(
    State(service): SharedService<R>,
) -> TaskResult<Json<Vec<Task>>> {
    Ok(Json(service.list_tasks().await?))
}

/// List tasks whose title contains the given text
#[utoipa::path(
    get,
    path = "/ObterPorTitulo",
    tag = "Tarefa",
    params(TitleQuery),
    responses(
        (status = 200, description = "Tarefas encontradas", body = Vec<Task>),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
pub async fn list_by_title<R: TaskRepository>(
    State(service): SharedService<R>,
    QueryParams(query): QueryParams<TitleQuery>,
) -> TaskResult<Json<Vec<Task>>> {
    Ok(Json(service.list_by_title(&query.titulo).await?))
}

/// List tasks scheduled on a calendar day
#[utoipa::path(
    get,
    path = "/ObterPorData",
    tag = "Tarefa",
    params(DateQuery),
    responses(
        (status = 200, description = "Tarefas do dia", body = Vec<Task>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
pub async fn list_by_date<R: TaskRepository>(
    State(service): SharedService<R>,
    QueryParams(query): QueryParams<DateQuery>,
) -> TaskResult<Json<Vec<Task>>> {
    Ok(Json(service.list_by_date(&query.data).await?))
}

/// List tasks with a status
#[utoipa::path(
    get,
    path = "/ObterPorStatus",
    tag = "Tarefa",
    params(StatusQuery),
    responses(
        (status = 200, description = "Tarefas com o status", body = Vec<Task>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
pub async fn list_by_status<R: TaskRepository>(
    State(service): SharedService<R>,
    QueryParams(query): QueryParams<StatusQuery>,
) -> TaskResult<Json<Vec<Task>>> {
    Ok(Json(service.list_by_status(&query.status).await?))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Tarefa",
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Tarefa encontrada", body = Task),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
pub async fn get_task<R: TaskRepository>(
    State(service): SharedService<R>,
    IdPath(id): IdPath,
) -> TaskResult<Json<Task>> {
    Ok(Json(service.get_task(id).await?))
}

/// Replace every field of a task
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Tarefa",
    params(("id" = i32, Path, description = "Task ID")),
    request_body = TaskInput,
    responses(
        (status = 200, description = "Tarefa atualizada", body = Task),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
pub async fn update_task<R: TaskRepository>(
    State(service): SharedService<R>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<TaskInput>,
) -> TaskResult<Json<Task>> {
    Ok(Json(service.update_task(id, input).await?))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Tarefa",
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 204, description = "Tarefa removida"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
pub async fn delete_task<R: TaskRepository>(
    State(service): SharedService<R>,
    IdPath(id): IdPath,
) -> TaskResult<StatusCode> {
    service.delete_task(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
