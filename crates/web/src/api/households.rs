use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, OriginalUri, Path, State},
    http::{Method, StatusCode},
    routing::{get, on},
    Json, Router,
};
use model::{household::Household, member::Member, validation::Validate, WithId};
use preparedness::database::{HouseholdRepo, MemberRepo};
use serde::Deserialize;
use utility::{id::Id, let_also::LetAlso};

use crate::{
    common::{
        request_error, route_not_found, RouteErrorResponse, RouteResult, VecResponse,
        METHOD_FILTER_ALL,
    },
    WebState,
};

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/:id/members", get(get_members).post(create_member))
        .route("/", get(get_households).post(create_household))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

/// A new member of the household in the path.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MemberBody {
    name: String,
    #[serde(default)]
    contact: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

async fn get_households(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { storage, .. }): State<WebState>,
) -> RouteResult<Json<VecResponse<WithId<Household>>>> {
    storage
        .get_households()
        .await
        .map(|households| VecResponse::new(households).json())
        .map_err(request_error(&Method::GET, &original_uri))
}

async fn create_household(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { storage, .. }): State<WebState>,
    body: Result<Json<Household>, JsonRejection>,
) -> RouteResult<(StatusCode, Json<WithId<Household>>)> {
    let Json(household) = body.map_err(request_error(&Method::POST, &original_uri))?;
    household
        .validate()
        .map_err(request_error(&Method::POST, &original_uri))?;
    storage
        .create_household(household)
        .await
        .map(|household| (StatusCode::CREATED, Json(household)))
        .map_err(request_error(&Method::POST, &original_uri))
}

async fn get_members(
    OriginalUri(original_uri): OriginalUri,
    path: Result<Path<i32>, PathRejection>,
    State(WebState { storage, .. }): State<WebState>,
) -> RouteResult<Json<VecResponse<WithId<Member>>>> {
    let Path(id) = path.map_err(request_error(&Method::GET, &original_uri))?;
    storage
        .get_members(&Id::new(id))
        .await
        .map(|members| VecResponse::new(members).json())
        .map_err(request_error(&Method::GET, &original_uri))
}

async fn create_member(
    OriginalUri(original_uri): OriginalUri,
    path: Result<Path<i32>, PathRejection>,
    State(WebState { storage, .. }): State<WebState>,
    body: Result<Json<MemberBody>, JsonRejection>,
) -> RouteResult<(StatusCode, Json<WithId<Member>>)> {
    let Path(id) = path.map_err(request_error(&Method::POST, &original_uri))?;
    let Json(body) = body.map_err(request_error(&Method::POST, &original_uri))?;
    let household_id = Id::new(id);
    let status = body.status;
    let member = Member::new(household_id, body.name, body.contact).also(|member| {
        if let Some(status) = status {
            member.status = status;
        }
    });
    member
        .validate()
        .map_err(request_error(&Method::POST, &original_uri))?;

    storage
        .get_household(&household_id)
        .await
        .map_err(request_error(&Method::POST, &original_uri))?
        .ok_or_else(|| {
            RouteErrorResponse::not_found(&Method::POST, original_uri.path())
                .with_message("The household does not exist.")
        })?;

    storage
        .create_member(member)
        .await
        .map(|member| (StatusCode::CREATED, Json(member)))
        .map_err(request_error(&Method::POST, &original_uri))
}
