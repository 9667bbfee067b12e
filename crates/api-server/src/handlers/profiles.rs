use crate::dto::profile_record;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use common::{MessageResponse, NewProfileRequest, ProfileRecord};
use domain::NewProfileInput;

pub async fn list_profiles(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProfileRecord>>, ApiError> {
    let profiles = state
        .admin_app
        .profile_service
        .list_profiles()
        .await
        .map_err(|e| state.fail(e, "Error fetching profiles."))?;

    Ok(Json(profiles.into_iter().map(profile_record).collect()))
}

pub async fn add_profile(
    State(state): State<AppState>,
    payload: Result<Json<NewProfileRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProfileRecord>), ApiError> {
    let Json(request) = payload?;

    let input = NewProfileInput {
        first_name: request.first_name,
        last_name: request.last_name,
        gender: request.gender,
        address: request.address,
        profile_image: request.profile_image,
    };

    let profile = state
        .admin_app
        .profile_service
        .create_profile(input)
        .await
        .map_err(|e| state.fail(e, "Error adding profile."))?;

    Ok((StatusCode::CREATED, Json(profile_record(profile))))
}

pub async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .admin_app
        .profile_service
        .delete_profile(&id)
        .await
        .map_err(|e| state.fail(e, "Error deleting profile."))?;

    Ok(Json(MessageResponse::new("Profile deleted successfully.")))
}
