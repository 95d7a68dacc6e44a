// src/screens/resultado_analise.rs

use crate::{
    common::error::Alerta,
    models::{analise_solo::ResultadoAnalise, plantio::Plantio},
    services::AnaliseSoloService,
};

#[derive(Debug, Clone, PartialEq)]
pub enum EstadoResultado {
    Carregando,
    // Plantio sem análise vinculada: nada a buscar
    SemAnalise,
    Pronto(ResultadoAnalise),
    // A análise vinculada sumiu do backend (404)
    AnaliseRemovida,
    Erro(Alerta),
}

/// Calagem, adubação e comparativo de nutrientes de um plantio.
pub struct ResultadoAnaliseScreen {
    servico: AnaliseSoloService,
    estado: EstadoResultado,
}

impl ResultadoAnaliseScreen {
    pub fn new(servico: AnaliseSoloService) -> Self {
        Self {
            servico,
            estado: EstadoResultado::Carregando,
        }
    }

    pub fn estado(&self) -> &EstadoResultado {
        &self.estado
    }

    pub async fn carregar(&mut self, plantio: &Plantio) -> &EstadoResultado {
        if plantio.id_analise_solo.is_none() {
            self.estado = EstadoResultado::SemAnalise;
            return &self.estado;
        }

        self.estado = match self.servico.resultado(plantio.id).await {
            Ok(resultado) => EstadoResultado::Pronto(resultado),
            Err(e) if e.is_not_found() => {
                tracing::warn!("Análise do plantio {} não existe mais", plantio.id);
                EstadoResultado::AnaliseRemovida
            }
            Err(e) => EstadoResultado::Erro(e.to_alerta("Erro ao buscar resultado")),
        };
        &self.estado
    }
}
