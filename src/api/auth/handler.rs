//! Authentication Handlers
//!
//! Handles login and session introspection. A salesperson account doubles as
//! an admin login: authentication is by email + argon2-verified password.

use std::time::Duration;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::SalespersonRepository;
use crate::utils::{AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Login handler
///
/// Authenticates salesperson credentials and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let repo = SalespersonRepository::new(state.db());
    let salesperson = repo.find_by_email(&req.email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent account enumeration
    let salesperson = match salesperson {
        Some(sp) => {
            let password_valid = sp
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

            if !password_valid {
                tracing::warn!(email = %req.email, "Login failed - invalid credentials");
                return Err(AppError::invalid("Invalid email or password".to_string()));
            }
            sp
        }
        None => {
            tracing::warn!(email = %req.email, "Login failed - account not found");
            return Err(AppError::invalid("Invalid email or password".to_string()));
        }
    };

    let user_id = salesperson
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_default();

    let token = state
        .jwt_service()
        .generate_token(&user_id, &salesperson.name, &salesperson.email)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    tracing::info!(email = %salesperson.email, "Login successful");

    Ok(Json(LoginResponse {
        token,
        user: UserInfo {
            id: user_id,
            name: salesperson.name,
            email: salesperson.email,
        },
    }))
}

/// Current session introspection
pub async fn me(user: CurrentUser) -> Json<UserInfo> {
    Json(UserInfo {
        id: user.id,
        name: user.name,
        email: user.email,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::db::models::SalespersonCreate;

    async fn state_with_account() -> ServerState {
        let state = ServerState::initialize_in_memory(&Config::default())
            .await
            .expect("in-memory state");
        SalespersonRepository::new(state.db())
            .create(SalespersonCreate {
                name: "Ravi".to_string(),
                email: "ravi@toolworks.in".to_string(),
                password: "secret-pass".to_string(),
            })
            .await
            .expect("create account");
        state
    }

    #[tokio::test]
    async fn test_login_issues_valid_token() {
        let state = state_with_account().await;

        let Json(resp) = login(
            State(state.clone()),
            Json(LoginRequest {
                email: "ravi@toolworks.in".to_string(),
                password: "secret-pass".to_string(),
            }),
        )
        .await
        .expect("login");

        assert_eq!(resp.user.email, "ravi@toolworks.in");
        let claims = state
            .jwt_service()
            .validate_token(&resp.token)
            .expect("token validates");
        assert_eq!(claims.email, "ravi@toolworks.in");
        assert_eq!(claims.name, "Ravi");
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_share_one_error() {
        let state = state_with_account().await;

        let wrong_pass = login(
            State(state.clone()),
            Json(LoginRequest {
                email: "ravi@toolworks.in".to_string(),
                password: "not-the-pass".to_string(),
            }),
        )
        .await
        .expect_err("wrong password rejected");

        let unknown_email = login(
            State(state),
            Json(LoginRequest {
                email: "nobody@toolworks.in".to_string(),
                password: "whatever-pass".to_string(),
            }),
        )
        .await
        .expect_err("unknown account rejected");

        // 两条失败路径对外不可区分
        assert!(matches!(wrong_pass, AppError::Invalid(_)));
        assert!(matches!(unknown_email, AppError::Invalid(_)));
        assert_eq!(wrong_pass.to_string(), unknown_email.to_string());
    }
}
