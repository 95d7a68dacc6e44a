// src/config.rs

use std::{env, path::PathBuf, sync::Arc};

use anyhow::Context;

use crate::{
    services::{
        AnaliseSoloService, ApiClient, AuthService, CultivarService, DashboardService, FazendaService,
        PlantioService,
    },
    session::{FileStorage, KeyValueStorage, SessionStore},
    workflow::PoliticaCompensacao,
};

// Parâmetros das três consultas do dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub cidade: String,
    pub estado: String,
    pub pais: String,
    pub simbolo: String,
    pub consulta_noticias: String,
    pub quantidade_noticias: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            cidade: "ARINOS".to_string(),
            estado: "MG".to_string(),
            pais: "BR".to_string(),
            simbolo: "SOJA".to_string(),
            consulta_noticias: "milho,soja".to_string(),
            quantidade_noticias: 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub storage_path: PathBuf,
    pub dashboard: DashboardConfig,
    pub politica_compensacao: PoliticaCompensacao,
}

impl AppConfig {
    // Lê o `.env` (se existir) e as variáveis de ambiente
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|chave| env::var(chave).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ler = |chave: &str, padrao: &str| {
            lookup(chave)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| padrao.to_string())
        };

        let padrao = DashboardConfig::default();
        let quantidade = ler("DASHBOARD_NOTICIAS_QUANTIDADE", &padrao.quantidade_noticias.to_string());

        let dashboard = DashboardConfig {
            cidade: ler("DASHBOARD_CIDADE", &padrao.cidade),
            estado: ler("DASHBOARD_ESTADO", &padrao.estado),
            pais: ler("DASHBOARD_PAIS", &padrao.pais),
            simbolo: ler("DASHBOARD_SIMBOLO", &padrao.simbolo),
            consulta_noticias: ler("DASHBOARD_NOTICIAS_CONSULTA", &padrao.consulta_noticias),
            quantidade_noticias: quantidade
                .parse()
                .with_context(|| format!("DASHBOARD_NOTICIAS_QUANTIDADE inválida: {quantidade}"))?,
        };

        let politica_compensacao = ler("PLANTIO_COMPENSACAO", "manter")
            .parse::<PoliticaCompensacao>()
            .map_err(anyhow::Error::msg)?;

        Ok(Self {
            api_base_url: ler("API_BASE_URL", "http://localhost:3000"),
            storage_path: PathBuf::from(ler("TERRA_STORAGE_PATH", ".terra-manager/storage.json")),
            dashboard,
            politica_compensacao,
        })
    }
}

// Tudo que as telas precisam, montado uma única vez
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub session: SessionStore,
    pub api: ApiClient,
    pub auth_service: AuthService,
    pub fazenda_service: FazendaService,
    pub cultivar_service: CultivarService,
    pub plantio_service: PlantioService,
    pub analise_solo_service: AnaliseSoloService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub async fn new(config: AppConfig) -> anyhow::Result<Self> {
        let storage = FileStorage::new(config.storage_path.clone());
        Self::with_storage(config, Arc::new(storage)).await
    }

    pub async fn with_storage(config: AppConfig, storage: Arc<dyn KeyValueStorage>) -> anyhow::Result<Self> {
        // 1. Sessão persistida
        let session = SessionStore::new(storage);
        let restaurada = session
            .restore()
            .await
            .context("Falha ao ler a sessão salva")?;

        if let Some(sessao) = &restaurada {
            tracing::info!("✅ Sessão restaurada para {}", sessao.usuario.email);
        }

        // 2. Cliente HTTP e serviços
        let api = ApiClient::new(config.api_base_url.clone(), session.clone())
            .context("Falha ao criar o cliente HTTP")?;

        Ok(Self {
            auth_service: AuthService::new(api.clone()),
            fazenda_service: FazendaService::new(api.clone()),
            cultivar_service: CultivarService::new(api.clone()),
            plantio_service: PlantioService::new(api.clone()),
            analise_solo_service: AnaliseSoloService::new(api.clone()),
            dashboard_service: DashboardService::new(api.clone()),
            config,
            session,
            api,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let mapa: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|chave| mapa.get(chave).cloned())
    }

    #[test]
    fn valores_padrao() {
        let config = config(&[]).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.storage_path, PathBuf::from(".terra-manager/storage.json"));
        assert_eq!(config.dashboard, DashboardConfig::default());
        assert_eq!(config.politica_compensacao, PoliticaCompensacao::ManterVinculada);
    }

    #[test]
    fn variaveis_sobrescrevem_o_padrao() {
        let config = config(&[
            ("API_BASE_URL", "https://api.terra.dev"),
            ("DASHBOARD_CIDADE", "UNAI"),
            ("DASHBOARD_NOTICIAS_QUANTIDADE", "3"),
            ("PLANTIO_COMPENSACAO", "excluir"),
            ("DASHBOARD_SIMBOLO", "  "),
        ])
        .unwrap();

        assert_eq!(config.api_base_url, "https://api.terra.dev");
        assert_eq!(config.dashboard.cidade, "UNAI");
        assert_eq!(config.dashboard.quantidade_noticias, 3);
        assert_eq!(config.dashboard.simbolo, "SOJA");
        assert_eq!(config.politica_compensacao, PoliticaCompensacao::ExcluirOrfa);
    }

    #[test]
    fn valores_invalidos_sao_rejeitados() {
        assert!(config(&[("DASHBOARD_NOTICIAS_QUANTIDADE", "sete")]).is_err());
        assert!(config(&[("PLANTIO_COMPENSACAO", "talvez")]).is_err());
    }
}
