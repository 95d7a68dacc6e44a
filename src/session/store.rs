// src/session/store.rs

use std::sync::{Arc, PoisonError, RwLock};

use crate::{
    common::error::AppError,
    models::auth::{Session, Usuario},
    session::storage::KeyValueStorage,
};

pub const TOKEN_KEY: &str = "@TerraManager:token";
pub const USER_KEY: &str = "@TerraManager:user";

// Sessão do usuário, injetada explicitamente em quem precisa dela.
// Clonar o handle compartilha o mesmo estado.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
    atual: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            atual: Arc::new(RwLock::new(None)),
        }
    }

    /// Recarrega a sessão persistida (login persistente).
    ///
    /// Um par incompleto ou ilegível é descartado do armazenamento.
    pub async fn restore(&self) -> Result<Option<Session>, AppError> {
        let token = self.storage.get_item(TOKEN_KEY).await?;
        let usuario = self.storage.get_item(USER_KEY).await?;

        let sessao = match (token, usuario) {
            (Some(token), Some(json)) => match serde_json::from_str::<Usuario>(&json) {
                Ok(usuario) => Some(Session { usuario, token }),
                Err(e) => {
                    tracing::warn!("Usuário salvo ilegível, descartando sessão: {}", e);
                    None
                }
            },
            (None, None) => None,
            _ => {
                tracing::warn!("Sessão salva incompleta, descartando.");
                None
            }
        };

        if sessao.is_none() {
            self.storage.remove_item(TOKEN_KEY).await?;
            self.storage.remove_item(USER_KEY).await?;
        }

        *self.atual.write().unwrap_or_else(PoisonError::into_inner) = sessao.clone();
        Ok(sessao)
    }

    pub async fn login(&self, usuario: Usuario, token: String) -> Result<Session, AppError> {
        let json = serde_json::to_string(&usuario)?;
        self.storage.set_item(TOKEN_KEY, &token).await?;
        self.storage.set_item(USER_KEY, &json).await?;

        let sessao = Session { usuario, token };
        *self.atual.write().unwrap_or_else(PoisonError::into_inner) = Some(sessao.clone());

        tracing::info!("🔐 Sessão iniciada para {}", sessao.usuario.email);
        Ok(sessao)
    }

    pub async fn logout(&self) -> Result<(), AppError> {
        // A memória é limpa primeiro: nenhuma chamada nova usa o token antigo
        *self.atual.write().unwrap_or_else(PoisonError::into_inner) = None;

        self.storage.remove_item(TOKEN_KEY).await?;
        self.storage.remove_item(USER_KEY).await?;

        tracing::info!("Sessão encerrada.");
        Ok(())
    }

    pub fn current(&self) -> Option<Session> {
        self.atual.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn usuario(&self) -> Option<Usuario> {
        self.current().map(|s| s.usuario)
    }

    /// Token bearer atual; a ausência é falha de autenticação.
    pub fn token(&self) -> Result<String, AppError> {
        self.atual
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|s| s.token.clone())
            .ok_or(AppError::Authentication)
    }
}
