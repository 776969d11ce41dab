//! Resharpening API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{ResharpeningProduct, ResharpeningProductCreate, ResharpeningProductUpdate};
use crate::db::repository::ResharpeningRepository;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, validate_positive_price, validate_required_text};

/// GET /api/resharpening - 获取所有磨刀服务
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ResharpeningProduct>>> {
    let repo = ResharpeningRepository::new(state.db());
    let items = repo.find_all().await?;
    Ok(Json(items))
}

/// POST /api/resharpening - 创建磨刀服务
pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<ResharpeningProductCreate>,
) -> AppResult<Json<ResharpeningProduct>> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    validate_positive_price(data.rate, "rate")?;

    let repo = ResharpeningRepository::new(state.db());
    let item = repo.create(data).await?;
    Ok(Json(item))
}

/// PUT /api/resharpening/:id - 更新磨刀服务
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<ResharpeningProductUpdate>,
) -> AppResult<Json<ResharpeningProduct>> {
    if let Some(ref name) = data.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(rate) = data.rate {
        validate_positive_price(rate, "rate")?;
    }

    let repo = ResharpeningRepository::new(state.db());
    let item = repo.update(&id, data).await?;
    Ok(Json(item))
}

/// DELETE /api/resharpening/:id - 删除磨刀服务
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let repo = ResharpeningRepository::new(state.db());
    repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
