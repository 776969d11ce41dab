//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Product, ProductCreate, ProductUpdate};
use crate::db::repository::ProductRepository;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_NAME_LEN, validate_non_negative_price, validate_required_text,
};

/// GET /api/products - 获取所有商品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db());
    let products = repo.find_all().await?;
    Ok(Json(products))
}

/// GET /api/products/:id - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let repo = ProductRepository::new(state.db());
    let product = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| crate::utils::AppError::not_found(format!("Product {id}")))?;
    Ok(Json(product))
}

/// POST /api/products - 创建商品 (finalPrice 由网关按 rawPrice * 3 计算)
pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    validate_non_negative_price(data.raw_price, "rawPrice")?;

    let repo = ProductRepository::new(state.db());
    let product = repo.create(data).await?;
    Ok(Json(product))
}

/// PUT /api/products/:id - 更新商品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    if let Some(ref name) = data.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(raw_price) = data.raw_price {
        validate_non_negative_price(raw_price, "rawPrice")?;
    }

    let repo = ProductRepository::new(state.db());
    let product = repo.update(&id, data).await?;
    Ok(Json(product))
}

/// DELETE /api/products/:id - 删除商品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let repo = ProductRepository::new(state.db());
    repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
