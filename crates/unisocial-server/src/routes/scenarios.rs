//! Scenario catalog and learning objective routes.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use unisocial_core::api::{CategoryQuery, ObjectivesResponse, UpdateDescriptionRequest};
use unisocial_core::scenario::{Scenario, ScenarioCatalog};

use crate::app::SharedState;
use crate::error::ApiError;

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/scenarios", get(list_scenarios))
        .route("/scenarios/:id", get(get_scenario).patch(update_description))
        .route("/objectives", get(objectives))
}

async fn list_scenarios(
    State(state): State<SharedState>,
    query: Result<Query<CategoryQuery>, QueryRejection>,
) -> Result<Json<Vec<Scenario>>, ApiError> {
    let Query(query) = query?;
    let catalog = state.catalog.read().await;
    Ok(Json(
        catalog.filter(query.category).into_iter().cloned().collect(),
    ))
}

async fn get_scenario(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Scenario>, ApiError> {
    let catalog = state.catalog.read().await;
    catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("scenario '{id}'")))
}

async fn update_description(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateDescriptionRequest>, JsonRejection>,
) -> Result<Json<Scenario>, ApiError> {
    let Json(request) = payload?;
    let mut catalog = state.catalog.write().await;
    let scenario = catalog.update_description(&id, &request.description)?;
    Ok(Json(scenario.clone()))
}

async fn objectives(
    query: Result<Query<CategoryQuery>, QueryRejection>,
) -> Result<Json<ObjectivesResponse>, ApiError> {
    let Query(query) = query?;
    Ok(Json(ObjectivesResponse {
        category: query.category,
        objectives: ScenarioCatalog::objectives(query.category)
            .into_iter()
            .map(str::to_string)
            .collect(),
    }))
}
