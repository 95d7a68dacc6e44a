// src/services/auth.rs

use serde_json::Value;
use validator::Validate;

use crate::{
    common::error::AppError,
    models::auth::{AuthResponse, LoginPayload, RegisterPayload, Session},
    services::api_client::ApiClient,
};

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    // POST /auth/login, e a sessão fica salva
    pub async fn login(&self, payload: &LoginPayload) -> Result<Session, AppError> {
        payload.validate()?;

        let resposta: AuthResponse = self
            .api
            .post_public("/auth/login", payload)
            .await?
            .ok_or_else(|| AppError::Decode("login sem token na resposta".to_string()))?;

        self.api.session().login(resposta.user, resposta.token).await
    }

    // POST /auth/register. Se o backend já devolver token, a sessão é iniciada.
    pub async fn registrar(&self, payload: &RegisterPayload) -> Result<Option<Session>, AppError> {
        payload.validate()?;

        let resposta: Option<Value> = self.api.post_public("/auth/register", payload).await?;

        match resposta.and_then(|v| serde_json::from_value::<AuthResponse>(v).ok()) {
            Some(auth) => Ok(Some(self.api.session().login(auth.user, auth.token).await?)),
            None => Ok(None),
        }
    }

    pub async fn logout(&self) -> Result<(), AppError> {
        self.api.session().logout().await
    }
}
