//! Salesperson API Handlers
//!
//! Responses always use [`SalespersonResponse`]; the password hash never
//! leaves the server.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{SalespersonCreate, SalespersonResponse, SalespersonUpdate};
use crate::db::repository::SalespersonRepository;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_NAME_LEN, validate_email, validate_password, validate_required_text,
};

/// GET /api/salespersons - 获取所有销售员
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<SalespersonResponse>>> {
    let repo = SalespersonRepository::new(state.db());
    let salespersons = repo.find_all().await?;
    Ok(Json(
        salespersons.into_iter().map(Into::into).collect(),
    ))
}

/// POST /api/salespersons - 创建销售员
pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<SalespersonCreate>,
) -> AppResult<Json<SalespersonResponse>> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    validate_email(&data.email)?;
    validate_password(&data.password)?;

    let repo = SalespersonRepository::new(state.db());
    let salesperson = repo.create(data).await?;
    Ok(Json(salesperson.into()))
}

/// PUT /api/salespersons/:id - 更新销售员
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<SalespersonUpdate>,
) -> AppResult<Json<SalespersonResponse>> {
    if let Some(ref name) = data.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(ref email) = data.email {
        validate_email(email)?;
    }
    if let Some(ref password) = data.password {
        validate_password(password)?;
    }

    let repo = SalespersonRepository::new(state.db());
    let salesperson = repo.update(&id, data).await?;
    Ok(Json(salesperson.into()))
}

/// DELETE /api/salespersons/:id - 删除销售员
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let repo = SalespersonRepository::new(state.db());
    repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
