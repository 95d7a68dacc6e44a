// src/screens/dashboard.rs

use chrono::{Local, NaiveDate};

use crate::{
    common::error::Alerta,
    config::DashboardConfig,
    models::dashboard::DashboardData,
    services::DashboardService,
};

#[derive(Debug, Clone, PartialEq)]
pub enum EstadoDashboard {
    Carregando,
    Pronto(DashboardData),
    // Sem visão parcial: qualquer falha derruba a tela inteira
    Erro(Alerta),
}

pub struct DashboardScreen {
    servico: DashboardService,
    config: DashboardConfig,
    estado: EstadoDashboard,
}

impl DashboardScreen {
    pub fn new(servico: DashboardService, config: DashboardConfig) -> Self {
        Self {
            servico,
            config,
            estado: EstadoDashboard::Carregando,
        }
    }

    pub fn estado(&self) -> &EstadoDashboard {
        &self.estado
    }

    pub async fn carregar(&mut self) -> &EstadoDashboard {
        self.carregar_em(Local::now().date_naive()).await
    }

    // `hoje` decide qual previsão do clima é exibida
    pub async fn carregar_em(&mut self, hoje: NaiveDate) -> &EstadoDashboard {
        self.estado = match self.servico.carregar(&self.config, hoje).await {
            Ok(dados) => EstadoDashboard::Pronto(dados),
            Err(e) => {
                tracing::warn!("Falha ao carregar o dashboard: {}", e);
                EstadoDashboard::Erro(e.to_alerta("Erro ao carregar dados"))
            }
        };
        &self.estado
    }
}
