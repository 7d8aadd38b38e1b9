use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use argon2::{
    password_hash::{
        rand_core::OsRng, Error as PasswordHashError, PasswordHash, PasswordHasher,
        PasswordVerifier, SaltString,
    },
    Argon2,
};
use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{header::AUTHORIZATION, request::Parts, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use trainlog_core::users::{NewUser, UserProfile};
use trainlog_core::errors::{DatabaseError, Error};

use crate::main_lib::AppState;

const ACCESS_TOKEN_TTL: Duration = Duration::from_secs(15 * 60);
const REFRESH_TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);
const MIN_PASSWORD_LEN: usize = 6;

const TOKEN_TYPE_ACCESS: &str = "access";
const TOKEN_TYPE_REFRESH: &str = "refresh";

pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

#[derive(Debug)]
pub enum AuthError {
    Unauthorized,
    InvalidCredentials,
    BadRequest(String),
    Internal(String),
}

#[derive(Serialize)]
struct AuthErrorBody {
    error: String,
}

/// JWT claims. `sub` is the user id; `token_type` keeps refresh tokens
/// from being accepted on resource routes and vice versa.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    token_type: String,
    exp: usize,
    iat: usize,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub password: String,
}

#[derive(Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

#[derive(Serialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub user: UserProfile,
    pub tokens: TokenPair,
}

#[derive(Serialize)]
pub struct RefreshResponse {
    pub access: String,
}

impl AuthManager {
    pub fn new(secret: &[u8]) -> Self {
        let encoding_key = EncodingKey::from_secret(secret);
        let decoding_key = DecodingKey::from_secret(secret);
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        Self {
            encoding_key,
            decoding_key,
            validation,
        }
    }

    pub fn hash_password(&self, raw: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(raw.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::Internal(format!("Password hashing failed: {e}")))
    }

    pub fn verify_password(&self, candidate: &str, stored_hash: &str) -> Result<(), AuthError> {
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid stored password hash: {e}")))?;
        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .map_err(|err| match err {
                PasswordHashError::Password => AuthError::InvalidCredentials,
                other => AuthError::Internal(format!("Password verification failed: {other}")),
            })
    }

    fn issue_token(
        &self,
        user_id: &str,
        token_type: &str,
        ttl: Duration,
    ) -> Result<String, AuthError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| AuthError::Internal("System clock is before UNIX_EPOCH".into()))?;
        let claims = Claims {
            sub: user_id.to_string(),
            token_type: token_type.to_string(),
            iat: now.as_secs() as usize,
            exp: (now + ttl).as_secs() as usize,
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to sign token: {e}")))
    }

    pub fn issue_pair(&self, user_id: &str) -> Result<TokenPair, AuthError> {
        Ok(TokenPair {
            access: self.issue_token(user_id, TOKEN_TYPE_ACCESS, ACCESS_TOKEN_TTL)?,
            refresh: self.issue_token(user_id, TOKEN_TYPE_REFRESH, REFRESH_TOKEN_TTL)?,
        })
    }

    fn validate_token(&self, token: &str, expected_type: &str) -> Result<String, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|err| {
            match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature
                | jsonwebtoken::errors::ErrorKind::InvalidToken
                | jsonwebtoken::errors::ErrorKind::InvalidSignature
                | jsonwebtoken::errors::ErrorKind::MissingRequiredClaim(_) => {
                    AuthError::Unauthorized
                }
                other => AuthError::Internal(format!("Failed to validate token: {other:?}")),
            }
        })?;
        if data.claims.token_type != expected_type {
            return Err(AuthError::Unauthorized);
        }
        Ok(data.claims.sub)
    }

    /// Validates an access token and returns the caller's user id.
    pub fn authenticate(&self, token: &str) -> Result<String, AuthError> {
        self.validate_token(token, TOKEN_TYPE_ACCESS)
    }

    /// Validates a refresh token and issues a fresh access token.
    pub fn refresh_access(&self, refresh_token: &str) -> Result<String, AuthError> {
        let user_id = self.validate_token(refresh_token, TOKEN_TYPE_REFRESH)?;
        self.issue_token(&user_id, TOKEN_TYPE_ACCESS, ACCESS_TOKEN_TTL)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AuthError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            AuthError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AuthError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        let body = Json(AuthErrorBody { error: message });
        (status, body).into_response()
    }
}

/// Identity of the authenticated caller, inserted by [`require_auth`].
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(AuthError::Unauthorized)
    }
}

pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::Unauthorized)?;

    let mut parts = header.splitn(2, ' ');
    let (Some(scheme), Some(token)) = (parts.next(), parts.next()) else {
        return Err(AuthError::Unauthorized);
    };

    if !scheme.eq_ignore_ascii_case("Bearer") {
        return Err(AuthError::Unauthorized);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::Unauthorized);
    }

    let user_id = state.auth.authenticate(token)?;
    request.extensions_mut().insert(CurrentUser { id: user_id });
    Ok(next.run(request).await)
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AuthError> {
    if payload.username.trim().is_empty() {
        return Err(AuthError::BadRequest("username is required".into()));
    }
    if payload.password.len() < MIN_PASSWORD_LEN {
        return Err(AuthError::BadRequest(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    let password_hash = state.auth.hash_password(&payload.password)?;
    // The unique index on username is the authority; two racing
    // registrations both reach the insert and the loser gets the 400.
    let user = state
        .user_repository
        .insert(NewUser {
            username: payload.username,
            email: payload.email,
            password_hash,
        })
        .await
        .map_err(|e| match e {
            Error::Database(DatabaseError::UniqueViolation(_)) => {
                AuthError::BadRequest("username is already taken".into())
            }
            other => AuthError::Internal(other.to_string()),
        })?;

    let tokens = state.auth.issue_pair(&user.id)?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user: UserProfile::from(user),
            tokens,
        }),
    ))
}

pub async fn obtain_token(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TokenRequest>,
) -> Result<Json<TokenPair>, AuthError> {
    let user = state
        .user_repository
        .find_by_username(&payload.username)
        .map_err(|e| AuthError::Internal(e.to_string()))?
        .ok_or(AuthError::InvalidCredentials)?;
    state.auth.verify_password(&payload.password, &user.password_hash)?;
    let tokens = state.auth.issue_pair(&user.id)?;
    Ok(Json(tokens))
}

pub async fn refresh_token(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, AuthError> {
    let access = state.auth.refresh_access(&payload.refresh)?;
    Ok(Json(RefreshResponse { access }))
}
