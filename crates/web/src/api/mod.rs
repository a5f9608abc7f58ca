use axum::{
    response::IntoResponse,
    routing::{get, on},
    Json, Router,
};
use serde_json::json;

mod evacuation_centers;
mod go_bag;
mod hazard_zones;
mod households;
mod incidents;
mod members;
mod pois;

use crate::{
    common::{route_not_found, METHOD_FILTER_ALL},
    WebState,
};

pub fn routes(state: WebState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .nest_service("/incidents", incidents::routes(state.clone()))
        .nest_service("/go-bag", go_bag::routes(state.clone()))
        .nest_service(
            "/evacuation-centers",
            evacuation_centers::routes(state.clone()),
        )
        .nest_service("/households", households::routes(state.clone()))
        .nest_service("/members", members::routes(state.clone()))
        .nest_service("/hazard-zones", hazard_zones::routes(state.clone()))
        .nest_service("/pois", pois::routes(state))
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

async fn ping() -> impl IntoResponse {
    Json(json!({
        "message": "pong!"
    }))
}
