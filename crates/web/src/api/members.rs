use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, OriginalUri, Path, State},
    http::{Method, StatusCode},
    routing::{get, on, patch},
    Json, Router,
};
use model::{
    check_in::{CheckIn, NewCheckIn},
    member::Member,
    validation::{self, Validate},
    WithId,
};
use preparedness::database::{CheckInRepo, MemberRepo};
use serde::Deserialize;
use utility::id::Id;

use crate::{
    common::{
        request_error, route_not_found, RouteErrorResponse, RouteResult, VecResponse,
        METHOD_FILTER_ALL,
    },
    WebState,
};

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/:id/status", patch(update_member_status))
        .route("/:id/check-ins", get(get_check_ins).post(create_check_in))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusBody {
    status: String,
    #[serde(default)]
    location: Option<String>,
}

/// A check-in of the member in the path.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckInBody {
    #[serde(default)]
    location: Option<String>,
    #[serde(default = "default_is_safe")]
    is_safe: bool,
}

fn default_is_safe() -> bool {
    true
}

async fn update_member_status(
    OriginalUri(original_uri): OriginalUri,
    path: Result<Path<i32>, PathRejection>,
    State(WebState { storage, .. }): State<WebState>,
    body: Result<Json<StatusBody>, JsonRejection>,
) -> RouteResult<Json<WithId<Member>>> {
    let Path(id) = path.map_err(request_error(&Method::PATCH, &original_uri))?;
    let Json(StatusBody { status, location }) =
        body.map_err(request_error(&Method::PATCH, &original_uri))?;
    validation::required("status", &status)
        .map_err(request_error(&Method::PATCH, &original_uri))?;
    storage
        .update_member_status(&Id::new(id), &status, location.as_deref())
        .await
        .map_err(request_error(&Method::PATCH, &original_uri))?
        .map(Json)
        .ok_or_else(|| RouteErrorResponse::not_found(&Method::PATCH, original_uri.path()))
}

async fn get_check_ins(
    OriginalUri(original_uri): OriginalUri,
    path: Result<Path<i32>, PathRejection>,
    State(WebState { storage, .. }): State<WebState>,
) -> RouteResult<Json<VecResponse<WithId<CheckIn>>>> {
    let Path(id) = path.map_err(request_error(&Method::GET, &original_uri))?;
    storage
        .get_check_ins(&Id::new(id))
        .await
        .map(|check_ins| VecResponse::new(check_ins).json())
        .map_err(request_error(&Method::GET, &original_uri))
}

async fn create_check_in(
    OriginalUri(original_uri): OriginalUri,
    path: Result<Path<i32>, PathRejection>,
    State(WebState { storage, .. }): State<WebState>,
    body: Result<Json<CheckInBody>, JsonRejection>,
) -> RouteResult<(StatusCode, Json<WithId<CheckIn>>)> {
    let Path(id) = path.map_err(request_error(&Method::POST, &original_uri))?;
    let Json(CheckInBody { location, is_safe }) =
        body.map_err(request_error(&Method::POST, &original_uri))?;
    let check_in = NewCheckIn {
        member_id: Id::new(id),
        location,
        is_safe,
    };
    check_in
        .validate()
        .map_err(request_error(&Method::POST, &original_uri))?;

    storage
        .get_member(&check_in.member_id)
        .await
        .map_err(request_error(&Method::POST, &original_uri))?
        .ok_or_else(|| {
            RouteErrorResponse::not_found(&Method::POST, original_uri.path())
                .with_message("The member does not exist.")
        })?;

    storage
        .create_check_in(check_in)
        .await
        .map(|check_in| (StatusCode::CREATED, Json(check_in)))
        .map_err(request_error(&Method::POST, &original_uri))
}

#[cfg(test)]
mod tests {
    use preparedness::{database::HouseholdRepo, seed};

    use crate::api::test_support::{state, uri};

    use super::*;

    async fn seeded() -> (crate::WebState, WithId<Member>) {
        let state = state().await;
        seed::initialize_households(state.storage.as_ref())
            .await
            .unwrap();
        seed::initialize_members(state.storage.as_ref())
            .await
            .unwrap();
        let household = state.storage.get_households().await.unwrap().remove(0);
        let member = state.storage.get_members(&household.id).await.unwrap().remove(0);
        (state, member)
    }

    #[tokio::test]
    async fn status_updates_keep_the_last_location() {
        let (state, member) = seeded().await;
        let path = format!("/api/members/{}/status", member.id);

        let Json(updated) = update_member_status(
            uri(&path),
            Ok(Path(member.id.raw())),
            State(state.clone()),
            Ok(Json(StatusBody {
                status: "safe".to_owned(),
                location: Some("Municipal Gymnasium".to_owned()),
            })),
        )
        .await
        .unwrap();
        assert_eq!(updated.content.status, "safe");

        let Json(updated) = update_member_status(
            uri(&path),
            Ok(Path(member.id.raw())),
            State(state),
            Ok(Json(StatusBody {
                status: "needs-help".to_owned(),
                location: None,
            })),
        )
        .await
        .unwrap();
        assert_eq!(updated.content.status, "needs-help");
        assert_eq!(
            updated.content.last_known_location.as_deref(),
            Some("Municipal Gymnasium")
        );
    }

    #[tokio::test]
    async fn unknown_members_are_not_found() {
        let state = state().await;

        let error = update_member_status(
            uri("/api/members/404/status"),
            Ok(Path(404)),
            State(state.clone()),
            Ok(Json(StatusBody {
                status: "safe".to_owned(),
                location: None,
            })),
        )
        .await
        .unwrap_err();
        assert_eq!(error.status_code, StatusCode::NOT_FOUND);

        let error = create_check_in(
            uri("/api/members/404/check-ins"),
            Ok(Path(404)),
            State(state),
            Ok(Json(CheckInBody {
                location: None,
                is_safe: true,
            })),
        )
        .await
        .unwrap_err();
        assert_eq!(error.status_code, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn check_ins_are_listed_per_member() {
        let (state, member) = seeded().await;
        let path = format!("/api/members/{}/check-ins", member.id);

        let (status, Json(check_in)) = create_check_in(
            uri(&path),
            Ok(Path(member.id.raw())),
            State(state.clone()),
            Ok(Json(CheckInBody {
                location: Some("Barangay Hall".to_owned()),
                is_safe: false,
            })),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert!(!check_in.content.is_safe);

        let Json(check_ins) =
            get_check_ins(uri(&path), Ok(Path(member.id.raw())), State(state))
                .await
                .unwrap();
        assert_eq!(check_ins.data, vec![check_in]);
    }
}
