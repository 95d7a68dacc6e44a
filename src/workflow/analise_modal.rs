// src/workflow/analise_modal.rs

use crate::{
    forms::analise_solo_form::AnaliseSoloForm,
    models::analise_solo::{AnaliseSolo, AnaliseSoloPayload},
};

// Sub-fluxo de análise de solo aberto a partir do formulário de plantio
#[derive(Debug, Clone, PartialEq)]
pub struct AnaliseSoloModal {
    pub formulario: AnaliseSoloForm,
    // Preenchido quando a análise já existe no backend
    id: Option<i64>,
}

impl AnaliseSoloModal {
    pub fn nova() -> Self {
        Self {
            formulario: AnaliseSoloForm::default(),
            id: None,
        }
    }

    pub fn salva(analise: &AnaliseSolo) -> Self {
        Self {
            formulario: AnaliseSoloForm::from_analise(analise),
            id: Some(analise.id),
        }
    }

    pub fn rascunho(payload: &AnaliseSoloPayload) -> Self {
        Self {
            formulario: AnaliseSoloForm::from_payload(payload),
            id: None,
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }
}
