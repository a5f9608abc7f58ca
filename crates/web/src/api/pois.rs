use axum::{
    extract::{rejection::QueryRejection, OriginalUri, Query, State},
    http::Method,
    routing::{get, on},
    Json, Router,
};
use model::{poi::Poi, WithId};
use preparedness::database::PoiRepo;
use serde::Deserialize;

use crate::{
    common::{
        request_error, route_not_found, schema, RouteResult, VecResponse, METHOD_FILTER_ALL,
    },
    WebState,
};

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/schema", get(schema::<Poi>))
        .route("/", get(get_pois))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PoiQuery {
    #[serde(rename = "type")]
    kind: Option<String>,
}

async fn get_pois(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { storage, .. }): State<WebState>,
    query: Result<Query<PoiQuery>, QueryRejection>,
) -> RouteResult<Json<VecResponse<WithId<Poi>>>> {
    let Query(query) = query.map_err(request_error(&Method::GET, &original_uri))?;
    let kind = query.kind.filter(|kind| !kind.is_empty());
    storage
        .get_pois(kind.as_deref())
        .await
        .map(|pois| VecResponse::new(pois).json())
        .map_err(request_error(&Method::GET, &original_uri))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use preparedness::seed;

    use crate::api::test_support::{send, state, uri};

    use super::*;

    #[tokio::test]
    async fn points_of_interest_filter_by_type() {
        let state = state().await;
        seed::initialize_pois(state.storage.as_ref()).await.unwrap();

        let Json(all) = get_pois(
            uri("/api/pois"),
            State(state.clone()),
            Ok(Query(PoiQuery::default())),
        )
        .await
        .unwrap();
        assert_eq!(all.data.len(), 3);

        let Json(charging) = get_pois(
            uri("/api/pois?type=charging"),
            State(state),
            Ok(Query(PoiQuery {
                kind: Some("charging".to_owned()),
            })),
        )
        .await
        .unwrap();
        assert_eq!(charging.data.len(), 1);
        assert_eq!(charging.data[0].content.name, "Municipal Charging Station");
    }

    #[tokio::test]
    async fn repeated_type_filters_are_json_errors() {
        let state = state().await;
        let request = Request::builder()
            .uri("/api/pois?type=shelter&type=charging")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(state, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["httpMethod"], "GET");
        assert_eq!(body["requestedUri"], "/api/pois");
        assert!(body["message"].is_string());
    }
}
