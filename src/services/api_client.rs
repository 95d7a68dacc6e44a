// src/services/api_client.rs

use reqwest::{Client, Method, StatusCode, header};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{common::error::AppError, session::SessionStore};

// Cliente HTTP compartilhado por todos os serviços.
// Uma tentativa por chamada: sem retry, sem timeout, sem cache.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Result<Self, AppError> {
        let http = Client::builder()
            .user_agent(concat!("terra-manager/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // --- Chamadas autenticadas ---

    pub(crate) async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, AppError> {
        let corpo = self.send(Method::GET, endpoint, &[], None::<&()>, true).await?;
        decode(endpoint, corpo)
    }

    pub(crate) async fn get_query<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let corpo = self.send(Method::GET, endpoint, query, None::<&()>, true).await?;
        decode(endpoint, corpo)
    }

    pub(crate) async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let corpo = self.send(Method::POST, endpoint, &[], Some(body), true).await?;
        decode(endpoint, corpo)
    }

    // Criação cujo corpo de resposta não é necessário
    pub(crate) async fn post_optional<B, T>(&self, endpoint: &str, body: &B) -> Result<Option<T>, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let corpo = self.send(Method::POST, endpoint, &[], Some(body), true).await?;
        Ok(entidade_opcional(endpoint, corpo))
    }

    // PUT pode responder sem corpo
    pub(crate) async fn put<B, T>(&self, endpoint: &str, body: &B) -> Result<Option<T>, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let corpo = self.send(Method::PUT, endpoint, &[], Some(body), true).await?;
        Ok(entidade_opcional(endpoint, corpo))
    }

    pub(crate) async fn delete(&self, endpoint: &str) -> Result<(), AppError> {
        self.send(Method::DELETE, endpoint, &[], None::<&()>, true).await?;
        Ok(())
    }

    // --- Chamadas públicas (login/registro) ---

    pub(crate) async fn post_public<B, T>(&self, endpoint: &str, body: &B) -> Result<Option<T>, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let corpo = self.send(Method::POST, endpoint, &[], Some(body), false).await?;
        Ok(corpo.map(serde_json::from_value).transpose()?)
    }

    async fn send<B>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<&B>,
        autenticado: bool,
    ) -> Result<Option<Value>, AppError>
    where
        B: Serialize + ?Sized,
    {
        // 1. Sem token não há requisição
        let token = if autenticado {
            Some(self.session.token()?)
        } else {
            None
        };

        let url = format!("{}{}", self.base_url, endpoint);
        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%method, endpoint, "requisição ao backend");

        // 2. Falha de transporte
        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, endpoint, "Falha de conexão: {}", e);
            AppError::Network(e.to_string())
        })?;

        // 3. Status não-2xx
        let status = response.status();
        if !status.is_success() {
            if autenticado && status == StatusCode::UNAUTHORIZED {
                tracing::warn!(%method, endpoint, "Token recusado pelo backend");
                return Err(AppError::Authentication);
            }

            let texto = response.text().await.unwrap_or_default();
            let message = extract_error_message(&texto)
                .unwrap_or_else(|| format!("Falha na requisição para: {endpoint}"));
            tracing::warn!(status = status.as_u16(), %method, endpoint, "{}", message);
            return Err(AppError::Request {
                status: status.as_u16(),
                message,
            });
        }

        // 4. Corpo: 204 e respostas sem JSON viram `None`
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let is_json = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));

        let texto = response.text().await?;
        if !is_json || texto.trim().is_empty() {
            return Ok(None);
        }

        let valor: Value = serde_json::from_str(&texto)?;
        Ok(Some(unwrap_envelope(valor)))
    }
}

fn decode<T: DeserializeOwned>(endpoint: &str, corpo: Option<Value>) -> Result<T, AppError> {
    let valor = corpo.ok_or_else(|| AppError::Decode(format!("resposta vazia de {endpoint}")))?;
    Ok(serde_json::from_value(valor)?)
}

// 2xx já confirma a gravação; corpo sem a entidade (só `message`, por exemplo) vira None
fn entidade_opcional<T: DeserializeOwned>(endpoint: &str, corpo: Option<Value>) -> Option<T> {
    match serde_json::from_value(corpo?) {
        Ok(entidade) => Some(entidade),
        Err(e) => {
            tracing::debug!("Resposta de {} sem entidade: {}", endpoint, e);
            None
        }
    }
}

// O backend às vezes embrulha a resposta em `{ "data": ... }`
fn unwrap_envelope(valor: Value) -> Value {
    match valor {
        Value::Object(mut map) if map.get("data").is_some_and(|d| !d.is_null()) => {
            map.remove("data").unwrap_or(Value::Null)
        }
        outro => outro,
    }
}

// `{ "message": "..." }`, `{ "message": ["..."] }` ou `{ "error": "..." }`
fn extract_error_message(texto: &str) -> Option<String> {
    let valor: Value = serde_json::from_str(texto).ok()?;

    let message = match valor.get("message") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Array(itens)) => itens.first().and_then(Value::as_str).map(str::to_string),
        _ => None,
    };

    message
        .or_else(|| valor.get("error").and_then(Value::as_str).map(str::to_string))
        .filter(|m| !m.trim().is_empty())
}
