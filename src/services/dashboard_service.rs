// src/services/dashboard_service.rs

use chrono::NaiveDate;

use crate::{
    common::error::AppError,
    config::DashboardConfig,
    models::dashboard::{Clima, Cotacao, DashboardData, Noticia, Noticias, PrevisaoDia},
    services::api_client::ApiClient,
};

#[derive(Clone)]
pub struct DashboardService {
    api: ApiClient,
}

impl DashboardService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    // GET /dashboard/clima?city=&state=&country=
    pub async fn clima(&self, cidade: &str, estado: &str, pais: &str) -> Result<Clima, AppError> {
        self.api
            .get_query(
                "/dashboard/clima",
                &[
                    ("city", cidade.to_string()),
                    ("state", estado.to_string()),
                    ("country", pais.to_string()),
                ],
            )
            .await
    }

    // GET /dashboard/cotacao-bolsa?symbol=
    pub async fn cotacao(&self, simbolo: &str) -> Result<Cotacao, AppError> {
        self.api
            .get_query("/dashboard/cotacao-bolsa", &[("symbol", simbolo.to_string())])
            .await
    }

    // GET /dashboard/noticias?query=&size=
    pub async fn noticias(&self, consulta: &str, quantidade: u32) -> Result<Vec<Noticia>, AppError> {
        let noticias: Noticias = self
            .api
            .get_query(
                "/dashboard/noticias",
                &[("query", consulta.to_string()), ("size", quantidade.to_string())],
            )
            .await?;
        Ok(noticias.articles)
    }

    /// Fan-out das três consultas e fan-in sem resultado parcial:
    /// se uma falhar, o dashboard inteiro falha.
    pub async fn carregar(&self, config: &DashboardConfig, hoje: NaiveDate) -> Result<DashboardData, AppError> {
        let (clima, cotacao, noticias) = tokio::try_join!(
            self.clima(&config.cidade, &config.estado, &config.pais),
            self.cotacao(&config.simbolo),
            self.noticias(&config.consulta_noticias, config.quantidade_noticias),
        )?;

        Ok(DashboardData {
            clima: selecionar_previsao(&clima.previsao_proximos_dias, hoje),
            cotacao,
            noticias,
        })
    }
}

/// A previsão de hoje; sem ela, a primeira da lista.
pub fn selecionar_previsao(previsoes: &[PrevisaoDia], hoje: NaiveDate) -> Option<PrevisaoDia> {
    let hoje = hoje.format("%Y-%m-%d").to_string();
    previsoes
        .iter()
        .find(|p| p.data == hoje)
        .or_else(|| previsoes.first())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn previsao(data: &str) -> PrevisaoDia {
        PrevisaoDia {
            data: data.to_string(),
            temperatura_max: None,
            condicao: "Sol".to_string(),
        }
    }

    #[test]
    fn escolhe_a_previsao_de_hoje() {
        let hoje = NaiveDate::from_ymd_opt(2025, 3, 16).unwrap();
        let lista = vec![previsao("2025-03-15"), previsao("2025-03-16")];
        assert_eq!(selecionar_previsao(&lista, hoje).unwrap().data, "2025-03-16");
    }

    #[test]
    fn sem_hoje_usa_a_primeira() {
        let hoje = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let lista = vec![previsao("2025-03-15"), previsao("2025-03-16")];
        assert_eq!(selecionar_previsao(&lista, hoje).unwrap().data, "2025-03-15");
        assert!(selecionar_previsao(&[], hoje).is_none());
    }
}
