use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Tarefas API",
        version = "0.1.0",
        description = "API para gerenciamento de tarefas"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = domain_tasks::entity::URL, api = domain_tasks::ApiDoc)
    )
)]
pub struct ApiDoc;
