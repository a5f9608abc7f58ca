use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, OriginalUri, Path, State},
    http::Method,
    routing::{get, on, patch},
    Json, Router,
};
use model::{evacuation_center::EvacuationCenter, validation, WithId};
use preparedness::database::EvacuationCenterRepo;
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
        .route("/schema", get(schema::<EvacuationCenter>))
        .route("/:id", patch(update_evacuation_center))
        .route("/", get(get_evacuation_centers))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusBody {
    status: String,
}

async fn get_evacuation_centers(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { storage, .. }): State<WebState>,
) -> RouteResult<Json<VecResponse<WithId<EvacuationCenter>>>> {
    storage
        .get_evacuation_centers()
        .await
        .map(|centers| VecResponse::new(centers).json())
        .map_err(request_error(&Method::GET, &original_uri))
}

async fn update_evacuation_center(
    OriginalUri(original_uri): OriginalUri,
    path: Result<Path<i32>, PathRejection>,
    State(WebState { storage, .. }): State<WebState>,
    body: Result<Json<StatusBody>, JsonRejection>,
) -> RouteResult<Json<WithId<EvacuationCenter>>> {
    let Path(id) = path.map_err(request_error(&Method::PATCH, &original_uri))?;
    let Json(StatusBody { status }) =
        body.map_err(request_error(&Method::PATCH, &original_uri))?;
    validation::required("status", &status)
        .map_err(request_error(&Method::PATCH, &original_uri))?;
    storage
        .update_evacuation_center(&Id::new(id), &status)
        .await
        .map_err(request_error(&Method::PATCH, &original_uri))?
        .map(Json)
        .ok_or_else(|| RouteErrorResponse::not_found(&Method::PATCH, original_uri.path()))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use preparedness::seed;

    use crate::api::test_support::{state, uri};

    use super::*;

    #[tokio::test]
    async fn status_is_replaced() {
        let state = state().await;
        seed::initialize_evacuation_centers(state.storage.as_ref())
            .await
            .unwrap();

        let Json(updated) = update_evacuation_center(
            uri("/api/evacuation-centers/1"),
            Ok(Path(1)),
            State(state.clone()),
            Ok(Json(StatusBody {
                status: "Full".to_owned(),
            })),
        )
        .await
        .unwrap();
        assert_eq!(updated.content.status, "Full");

        let Json(centers) = get_evacuation_centers(uri("/api/evacuation-centers"), State(state))
            .await
            .unwrap();
        assert_eq!(centers.data.len(), 3);
        assert_eq!(centers.data[0], updated);
    }

    #[tokio::test]
    async fn blank_status_and_unknown_centers_are_rejected() {
        let state = state().await;

        let error = update_evacuation_center(
            uri("/api/evacuation-centers/1"),
            Ok(Path(1)),
            State(state.clone()),
            Ok(Json(StatusBody {
                status: " ".to_owned(),
            })),
        )
        .await
        .unwrap_err();
        assert_eq!(error.status_code, StatusCode::BAD_REQUEST);

        let error = update_evacuation_center(
            uri("/api/evacuation-centers/404"),
            Ok(Path(404)),
            State(state),
            Ok(Json(StatusBody {
                status: "Closed".to_owned(),
            })),
        )
        .await
        .unwrap_err();
        assert_eq!(error.status_code, StatusCode::NOT_FOUND);
    }
}
