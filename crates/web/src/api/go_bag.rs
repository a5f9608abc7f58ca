use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, OriginalUri, Path, State},
    http::Method,
    routing::{get, on, patch},
    Json, Router,
};
use model::{go_bag::GoBagItem, WithId};
use preparedness::database::GoBagRepo;
use serde::Deserialize;
use utility::id::Id;

use crate::{
    common::{
        request_error, route_not_found, schema, RouteErrorResponse, RouteResult, VecResponse,
        METHOD_FILTER_ALL,
    },
    WebState,
};

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/schema", get(schema::<GoBagItem>))
        .route("/:id", patch(update_go_bag_item))
        .route("/", get(get_go_bag_items))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckedBody {
    checked: bool,
}

async fn get_go_bag_items(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { storage, .. }): State<WebState>,
) -> RouteResult<Json<VecResponse<WithId<GoBagItem>>>> {
    storage
        .get_go_bag_items()
        .await
        .map(|items| VecResponse::new(items).json())
        .map_err(request_error(&Method::GET, &original_uri))
}

async fn update_go_bag_item(
    OriginalUri(original_uri): OriginalUri,
    path: Result<Path<i32>, PathRejection>,
    State(WebState { storage, .. }): State<WebState>,
    body: Result<Json<CheckedBody>, JsonRejection>,
) -> RouteResult<Json<WithId<GoBagItem>>> {
    let Path(id) = path.map_err(request_error(&Method::PATCH, &original_uri))?;
    let Json(CheckedBody { checked }) =
        body.map_err(request_error(&Method::PATCH, &original_uri))?;
    storage
        .update_go_bag_item(&Id::new(id), checked)
        .await
        .map_err(request_error(&Method::PATCH, &original_uri))?
        .map(Json)
        .ok_or_else(|| RouteErrorResponse::not_found(&Method::PATCH, original_uri.path()))
}
