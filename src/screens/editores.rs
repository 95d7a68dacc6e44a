// src/screens/editores.rs

use crate::{
    common::{confirmacao::Confirmacao, error::AppError},
    forms::{cultivar_form::CultivarForm, fazenda_form::FazendaForm},
    models::{
        cultivar::{Cultivar, TipoPlanta},
        fazenda::Fazenda,
    },
    screens::Navegacao,
    services::{CultivarService, FazendaService},
};

// --- Cadastro / edição de fazenda ---

pub struct FazendaEditor {
    servico: FazendaService,
    id: Option<i64>,
    pub formulario: FazendaForm,
}

impl FazendaEditor {
    pub fn novo(servico: FazendaService) -> Self {
        Self {
            servico,
            id: None,
            formulario: FazendaForm::default(),
        }
    }

    pub fn editar(servico: FazendaService, fazenda: &Fazenda) -> Self {
        Self {
            servico,
            id: Some(fazenda.id),
            formulario: FazendaForm::from_fazenda(fazenda),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub async fn salvar(&mut self) -> Result<Navegacao, AppError> {
        let payload = self.formulario.to_payload()?;

        match self.id {
            Some(id) => {
                self.servico.atualizar(id, &payload).await?;
            }
            None => {
                // Sem corpo o id fica desconhecido; o editor segue em modo criação
                let criada = self.servico.criar(&payload).await?;
                self.id = criada.map(|f| f.id);
            }
        }
        Ok(Navegacao::Voltar)
    }

    pub async fn excluir(&self, confirmacao: &dyn Confirmacao) -> Result<Option<Navegacao>, AppError> {
        let id = self
            .id
            .ok_or(AppError::InvalidState("a fazenda ainda não foi salva"))?;

        if !confirmacao
            .confirmar("Excluir fazenda", "Tem certeza que deseja excluir esta fazenda?")
            .await
        {
            return Ok(None);
        }

        self.servico.excluir(id).await?;
        Ok(Some(Navegacao::Voltar))
    }
}

// --- Cadastro / edição de cultivar ---

pub struct CultivarEditor {
    servico: CultivarService,
    id: Option<i64>,
    pub formulario: CultivarForm,
}

impl CultivarEditor {
    pub fn novo(servico: CultivarService, tipo: TipoPlanta) -> Self {
        Self {
            servico,
            id: None,
            formulario: CultivarForm::new(tipo),
        }
    }

    pub fn editar(servico: CultivarService, cultivar: &Cultivar) -> Self {
        Self {
            servico,
            id: Some(cultivar.id),
            formulario: CultivarForm::from_cultivar(cultivar),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub async fn salvar(&mut self) -> Result<Navegacao, AppError> {
        let payload = self.formulario.to_payload()?;

        match self.id {
            Some(id) => {
                self.servico.atualizar(id, &payload).await?;
            }
            None => {
                let criado = self.servico.criar(&payload).await?;
                tracing::info!("🌿 Cultivar {} criado", payload.nome_popular);
                self.id = criado.map(|c| c.id);
            }
        }
        Ok(Navegacao::Voltar)
    }

    pub async fn excluir(&self, confirmacao: &dyn Confirmacao) -> Result<Option<Navegacao>, AppError> {
        let id = self
            .id
            .ok_or(AppError::InvalidState("o cultivar ainda não foi salvo"))?;

        if !confirmacao
            .confirmar("Excluir cultivar", "Tem certeza que deseja excluir este cultivar?")
            .await
        {
            return Ok(None);
        }

        self.servico.excluir(id).await?;
        Ok(Some(Navegacao::Voltar))
    }
}
