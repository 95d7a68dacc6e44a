// src/services/analise_solo_service.rs

use crate::{
    common::error::AppError,
    models::analise_solo::{
        AnaliseSolo, AnaliseSoloPayload, CalculoAdubacao, CalculoCalagem, ComparativoNutrientes,
        ResultadoAnalise,
    },
    services::api_client::ApiClient,
};

#[derive(Clone)]
pub struct AnaliseSoloService {
    api: ApiClient,
}

impl AnaliseSoloService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    // --- CRUD ---

    pub async fn criar(&self, payload: &AnaliseSoloPayload) -> Result<AnaliseSolo, AppError> {
        let analise: AnaliseSolo = self.api.post("/analise-solo", payload).await?;
        tracing::info!("🧪 Análise de solo {} criada para a fazenda {}", analise.id, payload.id_fazenda);
        Ok(analise)
    }

    pub async fn buscar(&self, id: i64) -> Result<AnaliseSolo, AppError> {
        self.api.get(&format!("/analise-solo/{id}")).await
    }

    pub async fn atualizar(&self, id: i64, payload: &AnaliseSoloPayload) -> Result<Option<AnaliseSolo>, AppError> {
        self.api.put(&format!("/analise-solo/{id}"), payload).await
    }

    pub async fn excluir(&self, id: i64) -> Result<(), AppError> {
        self.api.delete(&format!("/analise-solo/{id}")).await
    }

    // --- Recomendações (calculadas no servidor a partir do plantio) ---

    pub async fn calagem(&self, id_plantio: i64) -> Result<CalculoCalagem, AppError> {
        self.api.get(&format!("/analise-solo/calagem/{id_plantio}")).await
    }

    pub async fn adubacao(&self, id_plantio: i64) -> Result<CalculoAdubacao, AppError> {
        self.api.get(&format!("/analise-solo/adubacao/{id_plantio}")).await
    }

    pub async fn comparativo(&self, id_plantio: i64) -> Result<ComparativoNutrientes, AppError> {
        self.api
            .get(&format!("/analise-solo/comparativo-nutrientes/{id_plantio}"))
            .await
    }

    // As três em paralelo; qualquer falha derruba o conjunto
    pub async fn resultado(&self, id_plantio: i64) -> Result<ResultadoAnalise, AppError> {
        let (calagem, adubacao, comparativo) = tokio::try_join!(
            self.calagem(id_plantio),
            self.adubacao(id_plantio),
            self.comparativo(id_plantio),
        )?;

        Ok(ResultadoAnalise {
            calagem,
            adubacao,
            comparativo,
        })
    }
}
