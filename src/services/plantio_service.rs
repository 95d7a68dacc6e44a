// src/services/plantio_service.rs

use crate::{
    common::error::AppError,
    models::{
        cultivar::TipoPlanta,
        plantio::{Plantio, PlantioPayload},
    },
    services::api_client::ApiClient,
};

#[derive(Clone)]
pub struct PlantioService {
    api: ApiClient,
}

impl PlantioService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    // GET /plantio/fazenda/:fazendaId/tipo-planta/:tipo
    pub async fn listar_por_fazenda(&self, fazenda_id: i64, tipo: TipoPlanta) -> Result<Vec<Plantio>, AppError> {
        self.api
            .get(&format!("/plantio/fazenda/{fazenda_id}/tipo-planta/{tipo}"))
            .await
    }

    pub async fn criar(&self, payload: &PlantioPayload) -> Result<Option<Plantio>, AppError> {
        self.api.post_optional("/plantio", payload).await
    }

    pub async fn atualizar(&self, id: i64, payload: &PlantioPayload) -> Result<Option<Plantio>, AppError> {
        self.api.put(&format!("/plantio/{id}"), payload).await
    }

    pub async fn excluir(&self, id: i64) -> Result<(), AppError> {
        self.api.delete(&format!("/plantio/{id}")).await
    }
}
