use axum::{
    extract::{rejection::JsonRejection, OriginalUri, State},
    http::{Method, StatusCode},
    routing::{get, on},
    Json, Router,
};
use model::{
    incident::{Incident, NewIncident},
    validation::Validate,
    WithId,
};
use preparedness::database::IncidentRepo;

use crate::{
    common::{
        request_error, route_not_found, schema, RouteResult, VecResponse, METHOD_FILTER_ALL,
    },
    WebState,
};

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/schema", get(schema::<Incident>))
        .route("/", get(get_incidents).post(create_incident))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

async fn get_incidents(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { storage, .. }): State<WebState>,
) -> RouteResult<Json<VecResponse<WithId<Incident>>>> {
    storage
        .get_incidents()
        .await
        .map(|incidents| VecResponse::new(incidents).json())
        .map_err(request_error(&Method::GET, &original_uri))
}

async fn create_incident(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { storage, .. }): State<WebState>,
    body: Result<Json<NewIncident>, JsonRejection>,
) -> RouteResult<(StatusCode, Json<WithId<Incident>>)> {
    let Json(incident) = body.map_err(request_error(&Method::POST, &original_uri))?;
    incident
        .validate()
        .map_err(request_error(&Method::POST, &original_uri))?;
    storage
        .create_incident(incident)
        .await
        .map(|incident| (StatusCode::CREATED, Json(incident)))
        .map_err(request_error(&Method::POST, &original_uri))
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{state, uri};

    use super::*;

    fn report(description: &str) -> NewIncident {
        NewIncident {
            kind: "flood".to_owned(),
            description: description.to_owned(),
            location: "Pio Duran, Albay".to_owned(),
            latitude: Some("13.0345".to_owned()),
            longitude: Some("123.4567".to_owned()),
            is_anonymous: false,
        }
    }

    #[tokio::test]
    async fn reports_are_listed_after_creation() {
        let state = state().await;

        let (status, Json(created)) = create_incident(
            uri("/api/incidents"),
            State(state.clone()),
            Ok(Json(report("Knee-deep water"))),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.content.description, "Knee-deep water");

        let Json(incidents) = get_incidents(uri("/api/incidents"), State(state))
            .await
            .unwrap();
        assert_eq!(incidents.data, vec![created]);
    }

    #[tokio::test]
    async fn invalid_reports_are_rejected() {
        let state = state().await;

        let error = create_incident(
            uri("/api/incidents"),
            State(state.clone()),
            Ok(Json(NewIncident {
                latitude: Some("north".to_owned()),
                ..report("Smoke")
            })),
        )
        .await
        .unwrap_err();
        assert_eq!(error.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(error.http_method.as_deref(), Some("POST"));
        assert_eq!(error.requested_uri.as_deref(), Some("/api/incidents"));

        let Json(incidents) = get_incidents(uri("/api/incidents"), State(state))
            .await
            .unwrap();
        assert!(incidents.data.is_empty());
    }
}
