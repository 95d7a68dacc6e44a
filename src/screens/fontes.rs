// src/screens/fontes.rs

use async_trait::async_trait;

use crate::{
    common::error::AppError,
    models::{cultivar::Cultivar, cultivar::TipoPlanta, fazenda::Fazenda, plantio::Plantio},
    screens::list::FonteLista,
    services::{CultivarService, FazendaService, PlantioService},
};

// --- Fazendas ---

pub struct FazendasFonte {
    servico: FazendaService,
}

impl FazendasFonte {
    pub fn new(servico: FazendaService) -> Self {
        Self { servico }
    }
}

#[async_trait]
impl FonteLista for FazendasFonte {
    type Item = Fazenda;

    async fn carregar(&self) -> Result<Vec<Fazenda>, AppError> {
        self.servico.listar().await
    }

    async fn excluir(&self, id: i64) -> Result<(), AppError> {
        self.servico.excluir(id).await
    }

    fn confirmacao_exclusao(&self) -> (&'static str, &'static str) {
        ("Excluir fazenda", "Tem certeza que deseja excluir esta fazenda?")
    }
}

// --- Cultivares (opcionalmente de uma só cultura) ---

pub struct CultivaresFonte {
    servico: CultivarService,
    tipo: Option<TipoPlanta>,
}

impl CultivaresFonte {
    pub fn new(servico: CultivarService, tipo: Option<TipoPlanta>) -> Self {
        Self { servico, tipo }
    }
}

#[async_trait]
impl FonteLista for CultivaresFonte {
    type Item = Cultivar;

    async fn carregar(&self) -> Result<Vec<Cultivar>, AppError> {
        match self.tipo {
            Some(tipo) => self.servico.listar_por_tipo(tipo).await,
            None => self.servico.listar().await,
        }
    }

    async fn excluir(&self, id: i64) -> Result<(), AppError> {
        self.servico.excluir(id).await
    }

    fn confirmacao_exclusao(&self) -> (&'static str, &'static str) {
        ("Excluir cultivar", "Tem certeza que deseja excluir este cultivar?")
    }
}

// --- Plantios de uma fazenda + cultura ---

pub struct PlantiosFonte {
    servico: PlantioService,
    fazenda_id: i64,
    tipo: TipoPlanta,
}

impl PlantiosFonte {
    pub fn new(servico: PlantioService, fazenda_id: i64, tipo: TipoPlanta) -> Self {
        Self {
            servico,
            fazenda_id,
            tipo,
        }
    }
}

#[async_trait]
impl FonteLista for PlantiosFonte {
    type Item = Plantio;

    async fn carregar(&self) -> Result<Vec<Plantio>, AppError> {
        self.servico.listar_por_fazenda(self.fazenda_id, self.tipo).await
    }

    async fn excluir(&self, id: i64) -> Result<(), AppError> {
        self.servico.excluir(id).await
    }

    fn confirmacao_exclusao(&self) -> (&'static str, &'static str) {
        ("Excluir plantio", "Tem certeza que deseja excluir este plantio?")
    }
}
