// src/services/fazenda_service.rs

use crate::{
    common::error::AppError,
    models::fazenda::{Fazenda, FazendaPayload},
    services::api_client::ApiClient,
};

#[derive(Clone)]
pub struct FazendaService {
    api: ApiClient,
}

impl FazendaService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn listar(&self) -> Result<Vec<Fazenda>, AppError> {
        self.api.get("/fazenda/lista").await
    }

    pub async fn criar(&self, payload: &FazendaPayload) -> Result<Option<Fazenda>, AppError> {
        let fazenda: Option<Fazenda> = self.api.post_optional("/fazenda", payload).await?;
        match &fazenda {
            Some(f) => tracing::info!("🌾 Fazenda {} criada (id {})", f.nome, f.id),
            None => tracing::info!("🌾 Fazenda {} criada", payload.nome),
        }
        Ok(fazenda)
    }

    pub async fn atualizar(&self, id: i64, payload: &FazendaPayload) -> Result<Option<Fazenda>, AppError> {
        self.api.put(&format!("/fazenda/{id}"), payload).await
    }

    pub async fn excluir(&self, id: i64) -> Result<(), AppError> {
        self.api.delete(&format!("/fazenda/{id}")).await
    }
}
