use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use scribe_application::{
    ForgotPasswordUseCase, LoginUseCase, RefreshTokensUseCase, ResetPasswordUseCase,
};
use scribe_core::{Email, Password, ResetToken};
use secrecy::Secret;

use crate::http::{
    dto::{
        ForgotPasswordRequest, LoginRequest, MessageResponse, RefreshRequest,
        ResetPasswordQuery, ResetPasswordRequest,
    },
    error::ApiError,
    extract::{ValidJson, ValidQuery},
    state::{AppState, Ports},
};

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<P: Ports>(
    State(state): State<AppState<P>>,
    ValidJson(request): ValidJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = Email::parse(request.email)?;
    let password = Password::parse(Secret::new(request.password))?;

    let use_case = LoginUseCase::new(state.users(), state.hasher(), state.tokens());
    let pair = use_case.execute(email, password).await?;

    Ok((StatusCode::OK, Json(pair)))
}

#[tracing::instrument(name = "Refresh", skip_all)]
pub async fn refresh<P: Ports>(
    State(state): State<AppState<P>>,
    ValidJson(request): ValidJson<RefreshRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let use_case = RefreshTokensUseCase::new(state.users(), state.tokens());
    let pair = use_case.execute(&request.refresh_token).await?;

    Ok((StatusCode::OK, Json(pair)))
}

#[tracing::instrument(name = "Forgot password", skip_all)]
pub async fn forgot_password<P: Ports>(
    State(state): State<AppState<P>>,
    ValidJson(request): ValidJson<ForgotPasswordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = Email::parse(request.email)?;

    let use_case =
        ForgotPasswordUseCase::new(state.users(), state.reset_tokens(), state.notifier());
    use_case.execute(email).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Reset token has been sent to your email")),
    ))
}

#[tracing::instrument(name = "Reset password", skip_all)]
pub async fn reset_password<P: Ports>(
    State(state): State<AppState<P>>,
    ValidQuery(query): ValidQuery<ResetPasswordQuery>,
    ValidJson(request): ValidJson<ResetPasswordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = Email::parse(query.email)?;
    let token = ResetToken::from_presented(query.token);
    let password = Password::parse(Secret::new(request.password))?;

    let use_case = ResetPasswordUseCase::new(state.users(), state.reset_tokens(), state.hasher());
    use_case.execute(email, token, password).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Password has been reset")),
    ))
}
