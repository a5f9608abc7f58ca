use axum::{
    extract::{OriginalUri, State},
    http::Method,
    routing::{get, on},
    Json, Router,
};
use model::{hazard_zone::HazardZone, WithId};
use preparedness::database::HazardZoneRepo;

use crate::{
    common::{
        request_error, route_not_found, schema, RouteResult, VecResponse, METHOD_FILTER_ALL,
    },
    WebState,
};

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/schema", get(schema::<HazardZone>))
        .route("/", get(get_hazard_zones))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

async fn get_hazard_zones(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { storage, .. }): State<WebState>,
) -> RouteResult<Json<VecResponse<WithId<HazardZone>>>> {
    storage
        .get_hazard_zones()
        .await
        .map(|zones| VecResponse::new(zones).json())
        .map_err(request_error(&Method::GET, &original_uri))
}
