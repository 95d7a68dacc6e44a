// src/services/cultivar_service.rs

use crate::{
    common::error::AppError,
    models::cultivar::{Cultivar, CultivarPayload, TipoPlanta},
    services::api_client::ApiClient,
};

#[derive(Clone)]
pub struct CultivarService {
    api: ApiClient,
}

impl CultivarService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn listar(&self) -> Result<Vec<Cultivar>, AppError> {
        self.api.get("/cultivar/lista").await
    }

    // O backend não filtra: o filtro por tipo de planta é feito aqui
    pub async fn listar_por_tipo(&self, tipo: TipoPlanta) -> Result<Vec<Cultivar>, AppError> {
        let cultivares = self.listar().await?;
        Ok(cultivares.into_iter().filter(|c| c.e_do_tipo(tipo)).collect())
    }

    // Qualquer 2xx é sucesso, mesmo sem o cultivar no corpo
    pub async fn criar(&self, payload: &CultivarPayload) -> Result<Option<Cultivar>, AppError> {
        self.api.post_optional("/cultivar", payload).await
    }

    pub async fn atualizar(&self, id: i64, payload: &CultivarPayload) -> Result<Option<Cultivar>, AppError> {
        self.api.put(&format!("/cultivar/{id}"), payload).await
    }

    pub async fn excluir(&self, id: i64) -> Result<(), AppError> {
        self.api.delete(&format!("/cultivar/{id}")).await
    }
}
