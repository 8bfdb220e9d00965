use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use axum_helpers::{
    UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::TodoResult;
use crate::models::{CreateTodo, DeletedTodo, Priority, Todo, TodoFilter, UpdateTodo};
use crate::repository::TodoRepository;
use crate::service::TodoService;

/// OpenAPI documentation for the Todos API
#[derive(OpenApi)]
#[openapi(
    paths(list_todos, create_todo, update_todo, delete_todo),
    components(
        schemas(Todo, CreateTodo, UpdateTodo, TodoFilter, DeletedTodo, Priority),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Todos", description = "Daily todo endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the todos router with all HTTP endpoints
pub fn router<R: TodoRepository + 'static>(service: TodoService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_todos).post(create_todo))
        .route("/{id}", put(update_todo).delete(delete_todo))
        .with_state(shared_service)
}

/// List todos ordered by priority, optionally for a single day
#[utoipa::path(
    get,
    path = "",
    tag = "Todos",
    params(TodoFilter),
    responses(
        (status = 200, description = "Todos ordered high, medium, low", body = Vec<Todo>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_todos<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    Query(filter): Query<TodoFilter>,
) -> TodoResult<Json<Vec<Todo>>> {
    let todos = service.list_todos(filter).await?;
    Ok(Json(todos))
}

/// Create a new todo
#[utoipa::path(
    post,
    path = "",
    tag = "Todos",
    request_body = CreateTodo,
    responses(
        (status = 201, description = "Todo created successfully", body = Todo),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateTodo>,
) -> TodoResult<impl IntoResponse> {
    let todo = service.create_todo(input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Set a todo's completion flag
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Todos",
    params(
        ("id" = Uuid, Path, description = "Todo ID")
    ),
    request_body = UpdateTodo,
    responses(
        (status = 200, description = "Todo updated", body = Todo),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateTodo>,
) -> TodoResult<Json<Todo>> {
    let todo = service.set_completed(id, input.completed).await?;
    Ok(Json(todo))
}

/// Delete a todo
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Todos",
    params(
        ("id" = Uuid, Path, description = "Todo ID")
    ),
    responses(
        (status = 200, description = "Todo deleted", body = DeletedTodo),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    UuidPath(id): UuidPath,
) -> TodoResult<Json<DeletedTodo>> {
    let todo = service.delete_todo(id).await?;
    Ok(Json(DeletedTodo::new(todo)))
}
