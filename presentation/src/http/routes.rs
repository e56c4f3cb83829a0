//! Goal API routes

use super::error::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use inorbit_application::{CreateGoalUseCase, GoalStore, ListGoalsUseCase};
use inorbit_domain::{Goal, GoalInput};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// State shared across handlers
#[derive(Clone)]
pub struct ApiState {
    pub create_goal: Arc<CreateGoalUseCase>,
    pub list_goals: Arc<ListGoalsUseCase>,
}

impl ApiState {
    /// Build the use cases on top of a goal store
    pub fn new(store: Arc<dyn GoalStore>) -> Self {
        Self {
            create_goal: Arc::new(CreateGoalUseCase::new(Arc::clone(&store))),
            list_goals: Arc::new(ListGoalsUseCase::new(store)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedGoalResponse {
    pub goal: Goal,
}

#[derive(Debug, Serialize)]
pub struct GoalsResponse {
    pub goals: Vec<Goal>,
}

/// Create the API router
pub fn create_router(state: ApiState, cors: bool) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .route("/goals", post(create_goal).get(list_goals))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "inorbit",
    }))
}

async fn create_goal(
    State(state): State<ApiState>,
    payload: Result<Json<GoalInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedGoalResponse>), ApiError> {
    let Json(input) = payload?;
    let goal = state.create_goal.execute(input).await?;
    Ok((StatusCode::CREATED, Json(CreatedGoalResponse { goal })))
}

async fn list_goals(State(state): State<ApiState>) -> Result<Json<GoalsResponse>, ApiError> {
    let goals = state.list_goals.execute().await?;
    Ok(Json(GoalsResponse { goals }))
}
