//! Quotation API Handlers
//!
//! A quotation link is a self-contained base64 JSON token embedded in a URL.
//! Nothing is persisted and the token is not signed; the validity window is
//! advisory only. Treat these as convenience links, not as authorization.

use axum::{
    Json,
    extract::{Path, State},
};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::pricing::{compute_final_price, compute_total_amount};
use crate::utils::validation::{
    MAX_NAME_LEN, validate_non_negative_price, validate_quantity, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Validity window for quotation links (advisory)
const QUOTATION_VALIDITY_DAYS: i64 = 7;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationRequest {
    #[serde(default)]
    pub product_id: Option<String>,
    pub product_name: String,
    pub quantity: i64,
    pub raw_price: f64,
}

/// Self-contained quotation payload encoded into the link token
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub product_name: String,
    pub quantity: i64,
    pub raw_price: f64,
    pub final_price: f64,
    pub total_amount: f64,
    pub generated_at: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationLink {
    pub link: String,
    pub quotation: QuotationPayload,
}

/// Encode a payload into the opaque token carried by the link
pub fn encode_token(payload: &QuotationPayload) -> AppResult<String> {
    let json = serde_json::to_vec(payload)
        .map_err(|e| AppError::internal(format!("Quotation encoding failed: {e}")))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decode a link token back into its payload
pub fn decode_token(token: &str) -> AppResult<QuotationPayload> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|_| AppError::not_found("Quotation not found".to_string()))?;
    serde_json::from_slice(&bytes)
        .map_err(|_| AppError::not_found("Quotation not found".to_string()))
}

/// POST /api/quotations - 生成报价链接
pub async fn generate(
    State(_state): State<ServerState>,
    Json(req): Json<QuotationRequest>,
) -> AppResult<Json<QuotationLink>> {
    validate_required_text(&req.product_name, "productName", MAX_NAME_LEN)?;
    validate_quantity(req.quantity)?;
    validate_non_negative_price(req.raw_price, "rawPrice")?;

    let final_price = compute_final_price(req.raw_price);
    let generated_at = Utc::now();

    let payload = QuotationPayload {
        product_id: req.product_id,
        product_name: req.product_name,
        quantity: req.quantity,
        raw_price: req.raw_price,
        final_price,
        total_amount: compute_total_amount(final_price, req.quantity),
        generated_at,
        valid_until: generated_at + Duration::days(QUOTATION_VALIDITY_DAYS),
    };

    let token = encode_token(&payload)?;
    Ok(Json(QuotationLink {
        link: format!("/quote/{token}"),
        quotation: payload,
    }))
}

/// GET /quote/:token - 公开的报价解码页
///
/// Malformed tokens degrade to the not-found envelope for the public caller.
pub async fn decode(Path(token): Path<String>) -> AppResult<Json<QuotationPayload>> {
    Ok(Json(decode_token(&token)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blade_quote() -> QuotationPayload {
        let generated_at = Utc::now();
        QuotationPayload {
            product_id: Some("products:abc".to_string()),
            product_name: "Blade A".to_string(),
            quantity: 2,
            raw_price: 100.0,
            final_price: compute_final_price(100.0),
            total_amount: compute_total_amount(300.0, 2),
            generated_at,
            valid_until: generated_at + Duration::days(QUOTATION_VALIDITY_DAYS),
        }
    }

    #[test]
    fn test_token_round_trip() {
        let payload = blade_quote();
        let token = encode_token(&payload).unwrap();
        let decoded = decode_token(&token).unwrap();

        assert_eq!(decoded.product_name, "Blade A");
        assert_eq!(decoded.final_price, 300.0);
        assert_eq!(decoded.total_amount, 600.0);
        assert_eq!(decoded.valid_until - decoded.generated_at, Duration::days(7));
    }

    #[test]
    fn test_malformed_token_is_not_found() {
        assert!(matches!(
            decode_token("not base64!!"),
            Err(AppError::NotFound(_))
        ));
        // Valid base64 but not a quotation payload
        let bogus = URL_SAFE_NO_PAD.encode(b"{\"hello\":1}");
        assert!(matches!(decode_token(&bogus), Err(AppError::NotFound(_))));
    }
}
