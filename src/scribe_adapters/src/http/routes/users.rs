use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use scribe_application::{AccountFlagsUseCase, RegisterUseCase, UserDirectoryUseCase};
use scribe_core::UserId;

use crate::http::{
    context::{AdminUser, CurrentUser},
    dto::{CreateUserRequest, UpdateUserRequest, UserResponse},
    error::ApiError,
    extract::ValidJson,
    state::{AppState, Ports},
};

#[tracing::instrument(name = "List users", skip_all)]
pub async fn list_users<P: Ports>(
    State(state): State<AppState<P>>,
) -> Result<impl IntoResponse, ApiError> {
    let users = UserDirectoryUseCase::new(state.users()).list().await?;
    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(Json(users))
}

#[tracing::instrument(name = "Get user", skip(state))]
pub async fn get_user<P: Ports>(
    State(state): State<AppState<P>>,
    Path(id): Path<UserId>,
) -> Result<impl IntoResponse, ApiError> {
    let user = UserDirectoryUseCase::new(state.users()).get_by_id(&id).await?;

    Ok(Json(UserResponse::from(user)))
}

#[tracing::instrument(name = "Create user", skip_all)]
pub async fn create_user<P: Ports>(
    State(state): State<AppState<P>>,
    _admin: AdminUser,
    ValidJson(request): ValidJson<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let registration = request.into_registration()?;
    let user = RegisterUseCase::new(state.users(), state.hasher())
        .execute(registration)
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Users may edit their own profile; administrators may edit any.
#[tracing::instrument(name = "Update user", skip(state, caller, request))]
pub async fn update_user<P: Ports>(
    State(state): State<AppState<P>>,
    caller: CurrentUser,
    Path(id): Path<UserId>,
    ValidJson(request): ValidJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if !caller.may_manage(&id) {
        return Err(ApiError::Forbidden);
    }

    let user = UserDirectoryUseCase::new(state.users())
        .update_profile(&id, request.into())
        .await?;

    Ok(Json(UserResponse::from(user)))
}

#[tracing::instrument(name = "Delete user", skip(state, _admin))]
pub async fn delete_user<P: Ports>(
    State(state): State<AppState<P>>,
    _admin: AdminUser,
    Path(id): Path<UserId>,
) -> Result<impl IntoResponse, ApiError> {
    UserDirectoryUseCase::new(state.users()).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[tracing::instrument(name = "Activate user", skip(state, _admin))]
pub async fn activate_user<P: Ports>(
    State(state): State<AppState<P>>,
    _admin: AdminUser,
    Path(id): Path<UserId>,
) -> Result<impl IntoResponse, ApiError> {
    let user = AccountFlagsUseCase::new(state.users()).activate(&id).await?;
    Ok(Json(UserResponse::from(user)))
}

#[tracing::instrument(name = "Deactivate user", skip(state, _admin))]
pub async fn deactivate_user<P: Ports>(
    State(state): State<AppState<P>>,
    _admin: AdminUser,
    Path(id): Path<UserId>,
) -> Result<impl IntoResponse, ApiError> {
    let user = AccountFlagsUseCase::new(state.users()).deactivate(&id).await?;
    Ok(Json(UserResponse::from(user)))
}

#[tracing::instrument(name = "Promote user", skip(state, _admin))]
pub async fn promote_user<P: Ports>(
    State(state): State<AppState<P>>,
    _admin: AdminUser,
    Path(id): Path<UserId>,
) -> Result<impl IntoResponse, ApiError> {
    let user = AccountFlagsUseCase::new(state.users()).promote(&id).await?;
    Ok(Json(UserResponse::from(user)))
}

#[tracing::instrument(name = "Demote user", skip(state, _admin))]
pub async fn demote_user<P: Ports>(
    State(state): State<AppState<P>>,
    _admin: AdminUser,
    Path(id): Path<UserId>,
) -> Result<impl IntoResponse, ApiError> {
    let user = AccountFlagsUseCase::new(state.users()).demote(&id).await?;
    Ok(Json(UserResponse::from(user)))
}
