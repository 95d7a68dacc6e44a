// src/forms/fazenda_form.rs

use rust_decimal::Decimal;
use validator::ValidationErrors;

use crate::{
    common::error::AppError,
    forms::field::{EmptyPolicy, NumericField, exigir_texto},
    models::fazenda::{Fazenda, FazendaPayload},
};

#[derive(Debug, Clone)]
pub struct FazendaForm {
    pub nome: String,
    pub cnpj: String,
    pub latitude: NumericField<Decimal>,
    pub longitude: NumericField<Decimal>,
    pub area_total: NumericField<Decimal>,
    pub solo_predominante: String,
    pub cultivo_predominante: String,
    pub municipio: String,
    pub uf: String,
    pub ativo: bool,
}

impl Default for FazendaForm {
    fn default() -> Self {
        Self {
            nome: String::new(),
            cnpj: String::new(),
            latitude: NumericField::new(EmptyPolicy::Zero),
            longitude: NumericField::new(EmptyPolicy::Zero),
            area_total: NumericField::new(EmptyPolicy::Zero),
            solo_predominante: String::new(),
            cultivo_predominante: String::new(),
            municipio: String::new(),
            uf: String::new(),
            ativo: true,
        }
    }
}

impl FazendaForm {
    pub fn from_fazenda(fazenda: &Fazenda) -> Self {
        Self {
            nome: fazenda.nome.clone(),
            cnpj: fazenda.cnpj.clone(),
            latitude: NumericField::with_value(EmptyPolicy::Zero, Some(fazenda.latitude)),
            longitude: NumericField::with_value(EmptyPolicy::Zero, Some(fazenda.longitude)),
            area_total: NumericField::with_value(EmptyPolicy::Zero, Some(fazenda.area_total)),
            solo_predominante: fazenda.solo_predominante.clone(),
            cultivo_predominante: fazenda.cultivo_predominante.clone(),
            municipio: fazenda.municipio.clone(),
            uf: fazenda.uf.clone(),
            ativo: fazenda.ativo,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let mut erros = ValidationErrors::new();
        exigir_texto(&self.nome, "nome", &mut erros);

        if erros.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(erros))
        }
    }

    pub fn to_payload(&self) -> Result<FazendaPayload, AppError> {
        self.validate()?;

        Ok(FazendaPayload {
            nome: self.nome.trim().to_string(),
            cnpj: self.cnpj.trim().to_string(),
            latitude: self.latitude.resolve().unwrap_or_default(),
            longitude: self.longitude.resolve().unwrap_or_default(),
            area_total: self.area_total.resolve().unwrap_or_default(),
            solo_predominante: self.solo_predominante.clone(),
            cultivo_predominante: self.cultivo_predominante.clone(),
            municipio: self.municipio.trim().to_string(),
            uf: self.uf.trim().to_uppercase(),
            ativo: self.ativo,
        })
    }
}
