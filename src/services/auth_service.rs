use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::Utc;
use password_hash::rand_core::OsRng;
use uuid::Uuid;

use crate::{
    dto::auth::{AuthResponse, LoginRequest, SignupRequest, UserSummary},
    error::{AppError, AppResult},
    models::User,
    state::AppState,
};

/// Trimmed, non-empty value of an optional text field.
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

fn verify_password(user: &User, password: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(&user.password_hash) else {
        tracing::warn!(email = %user.email, "stored credential is not a password hash");
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

pub async fn signup(state: &AppState, payload: SignupRequest) -> AppResult<AuthResponse> {
    let (Some(name), Some(email), Some(password)) = (
        present(payload.name),
        present(payload.email),
        payload.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(AppError::BadRequest("All fields are required".into()));
    };

    let email = normalize_email(&email);
    let password_hash = hash_password(&password)?;

    let user = User {
        id: Uuid::new_v4(),
        name,
        email,
        password_hash,
        created_at: Utc::now(),
    };

    let user = state
        .users
        .update(|users| {
            if users.iter().any(|u| normalize_email(&u.email) == user.email) {
                return Err(AppError::Conflict("User already exists".into()));
            }
            users.push(user.clone());
            Ok(user)
        })
        .await?;

    tracing::info!(user_id = %user.id, "user signed up");

    Ok(AuthResponse {
        message: "User created successfully".into(),
        user: UserSummary::from(&user),
    })
}

pub async fn login(state: &AppState, payload: LoginRequest) -> AppResult<AuthResponse> {
    let (Some(email), Some(password)) = (
        present(payload.email),
        payload.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(AppError::BadRequest("Email and password required".into()));
    };

    let email = normalize_email(&email);
    let users = state.users.read_all().await?;
    let user = users
        .iter()
        .find(|u| normalize_email(&u.email) == email)
        .filter(|u| verify_password(u, &password))
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".into()))?;

    tracing::info!(user_id = %user.id, "user logged in");

    Ok(AuthResponse {
        message: "Login successful".into(),
        user: UserSummary::from(user),
    })
}
