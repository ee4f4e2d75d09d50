//! Join, assignment and reset endpoints.

use axum::{
    extract::{rejection::FormRejection, Path, State},
    response::Redirect,
    Form,
};

use super::{success, ApiResult};
use crate::auth::verify_admin_key;
use crate::errors::AppError;
use crate::grouping;
use crate::models::{AssignmentView, JoinForm, ResetForm, JOIN_VALIDATION_MESSAGE};
use crate::AppState;

/// POST /join - Sign a player up and redirect to their assignment.
pub async fn join(
    State(state): State<AppState>,
    form: Result<Form<JoinForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Ok(Form(form)) = form else {
        return Err(AppError::Validation(JOIN_VALIDATION_MESSAGE.to_string()));
    };
    let signup = form.validate()?;

    // nothing may fail after the insert, or the client never learns the new id
    let mut store = state.repo.acquire().await?;
    let id = store.insert(&signup).await?;

    tracing::info!(signup_id = id, level = %signup.level, "new signup");

    Ok(Redirect::to(&format!("/thanks/{}", id)))
}

/// GET /thanks/{signup_id} - Group assignment of one signup.
pub async fn thanks(
    State(state): State<AppState>,
    Path(signup_id): Path<String>,
) -> ApiResult<AssignmentView> {
    // non-numeric ids cannot exist, so they are reported the same as unknown ones
    let signup_id: i64 = signup_id
        .parse()
        .map_err(|_| AppError::signup_not_found(&signup_id))?;

    let mut store = state.repo.acquire().await?;
    let resolved = grouping::resolve(&mut store, signup_id).await?;

    success(AssignmentView::new(
        resolved,
        state.config.next_match.next_match_today(),
    ))
}

/// POST /reset - Delete every signup when the admin key matches.
pub async fn reset(
    State(state): State<AppState>,
    form: Result<Form<ResetForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    // an unreadable body carries no key, which is the same as a wrong one
    let key = form.map(|Form(f)| f.key).unwrap_or_default();
    if let Err(e) = verify_admin_key(&key, &state.config.admin_key) {
        tracing::warn!("Rejected reset with invalid admin key");
        return Err(e);
    }

    let mut store = state.repo.acquire().await?;
    let deleted = store.delete_all().await?;
    tracing::info!(deleted, "all signups cleared");

    Ok(Redirect::to("/"))
}
