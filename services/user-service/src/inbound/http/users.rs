//! Account API handlers.
//!
//! ```text
//! POST /users {"name":"Ada","surname":"Lovelace","displayName":"ada","email":"a@x.com","tel":"555","password":"pw"}
//! POST /login {"email":"a@x.com","password":"pw"}
//! GET /users/{id}
//! PUT /users/{id} {"name":"Ada","surname":"King","displayName":"ada","email":"a@x.com","tel":"555"}
//! DELETE /users/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    CredentialsValidationError, Error, LoginCredentials, Password, Registration, UserId,
    UserProfile,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::AuthenticatedUser;
use crate::inbound::http::state::HttpState;

/// Registration body for `POST /users`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub surname: String,
    pub display_name: String,
    pub email: String,
    pub tel: String,
    pub password: String,
}

impl TryFrom<RegisterRequest> for Registration {
    type Error = CredentialsValidationError;

    fn try_from(value: RegisterRequest) -> Result<Self, Self::Error> {
        let RegisterRequest {
            name,
            surname,
            display_name,
            email,
            tel,
            password,
        } = value;
        Ok(Self {
            password: Password::new(&password)?,
            profile: UserProfile {
                name,
                surname,
                display_name,
                email,
                tel,
            },
        })
    }
}

/// Login body for `POST /login`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl From<LoginRequest> for LoginCredentials {
    fn from(value: LoginRequest) -> Self {
        Self::new(value.email, &value.password)
    }
}

/// Profile body for `PUT /users/{id}`. Every field is replaced.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: String,
    pub surname: String,
    pub display_name: String,
    pub email: String,
    pub tel: String,
}

impl From<UpdateProfileRequest> for UserProfile {
    fn from(value: UpdateProfileRequest) -> Self {
        Self {
            name: value.name,
            surname: value.surname,
            display_name: value.display_name,
            email: value.email,
            tel: value.tel,
        }
    }
}

#[derive(Debug, Serialize)]
struct DeletedResponse {
    message: &'static str,
}

fn map_credentials_error(err: &CredentialsValidationError) -> Error {
    Error::invalid_request(err.to_string())
}

fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::parse(raw).map_err(|err| {
        debug!(raw, "rejected user id");
        Error::invalid_request(err.to_string())
    })
}

/// Register a new account. Responds `201` with the stored record.
#[post("/users")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let registration =
        Registration::try_from(payload.into_inner()).map_err(|err| map_credentials_error(&err))?;
    let user = state.accounts.register(registration).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Exchange credentials for a bearer token.
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials = LoginCredentials::from(payload.into_inner());
    let token = state.accounts.login(&credentials).await?;
    Ok(HttpResponse::Ok().json(token))
}

/// Fetch an account by identifier.
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    _caller: AuthenticatedUser,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path)?;
    let user = state.accounts.profile(id).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Replace the profile fields of an account.
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    _caller: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<UpdateProfileRequest>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path)?;
    let user = state
        .accounts
        .update_profile(id, payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Remove an account.
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    _caller: AuthenticatedUser,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path)?;
    state.accounts.delete(id).await?;
    Ok(HttpResponse::Ok().json(DeletedResponse {
        message: "User deleted successfully",
    }))
}
