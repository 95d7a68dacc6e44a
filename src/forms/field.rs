// src/forms/field.rs

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use validator::ValidationErrors;

use crate::common::{dates, error::erro_de_campo};

// O que um campo opcional vale quando está vazio ou não é um número
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyPolicy {
    Zero,
    Nulo,
}

// --- Tipos numéricos aceitos pelos campos ---

pub trait FieldNumber: Copy + PartialEq + Default + ToString {
    fn parse_field(texto: &str) -> Option<Self>;
}

impl FieldNumber for Decimal {
    // Vírgula decimal é aceita e vira ponto
    fn parse_field(texto: &str) -> Option<Self> {
        let normalizado = texto.trim().replace(',', ".");
        if normalizado.is_empty() {
            return None;
        }
        Decimal::from_str(&normalizado).ok()
    }
}

impl FieldNumber for i64 {
    // Inteiros digitados com casas decimais são truncados ("300000,9" -> 300000)
    fn parse_field(texto: &str) -> Option<Self> {
        Decimal::parse_field(texto).and_then(|d| d.trunc().to_i64())
    }
}

/// Campo numérico de formulário: texto digitado, valor interpretado e validade.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericField<N: FieldNumber> {
    raw: String,
    valor: Option<N>,
    politica: EmptyPolicy,
}

impl<N: FieldNumber> NumericField<N> {
    pub fn new(politica: EmptyPolicy) -> Self {
        Self {
            raw: String::new(),
            valor: None,
            politica,
        }
    }

    // Preenchido a partir de um valor salvo (modo edição)
    pub fn with_value(politica: EmptyPolicy, valor: Option<N>) -> Self {
        let mut campo = Self::new(politica);
        if let Some(valor) = valor {
            campo.set(valor.to_string());
        }
        campo
    }

    pub fn set(&mut self, texto: impl Into<String>) {
        self.raw = texto.into();
        self.valor = N::parse_field(&self.raw);
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn parsed(&self) -> Option<N> {
        self.valor
    }

    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.is_blank() || self.valor.is_some()
    }

    /// Valor enviado ao backend, aplicando a política do campo.
    pub fn resolve(&self) -> Option<N> {
        self.valor.or(match self.politica {
            EmptyPolicy::Zero => Some(N::default()),
            EmptyPolicy::Nulo => None,
        })
    }

    // Campo obrigatório: precisa estar preenchido e ser um número
    pub(crate) fn exigir(&self, campo: &'static str, erros: &mut ValidationErrors) {
        if self.is_blank() {
            erros.add(campo, erro_de_campo("required", "Campo obrigatório."));
        } else if self.valor.is_none() {
            erros.add(campo, erro_de_campo("invalid_number", "Número inválido."));
        }
    }

    // Só chamar depois de `exigir` sem erros
    pub(crate) fn obrigatorio(&self) -> N {
        self.valor.unwrap_or_default()
    }
}

/// Campo de data `DD/MM/AAAA`, mascarado a cada alteração.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateField {
    raw: String,
}

impl DateField {
    // Data ISO vinda do backend
    pub fn from_iso(iso: Option<&str>) -> Self {
        Self {
            raw: dates::format_date_for_input(iso),
        }
    }

    pub fn set(&mut self, texto: &str) {
        self.raw = dates::mask_date(texto);
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_blank(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.is_blank() || dates::parse_display_date(&self.raw).is_some()
    }

    pub fn iso(&self) -> Option<DateTime<Utc>> {
        dates::to_iso_date(&self.raw)
    }

    pub(crate) fn validar(&self, campo: &'static str, obrigatorio: bool, erros: &mut ValidationErrors) {
        if self.is_blank() {
            if obrigatorio {
                erros.add(campo, erro_de_campo("required", "Campo obrigatório."));
            }
        } else if !self.is_valid() {
            erros.add(campo, erro_de_campo("invalid_date", "Data inválida (DD/MM/AAAA)."));
        }
    }
}

// Texto obrigatório (espaços não contam)
pub(crate) fn exigir_texto(valor: &str, campo: &'static str, erros: &mut ValidationErrors) {
    if valor.trim().is_empty() {
        erros.add(campo, erro_de_campo("required", "Campo obrigatório."));
    }
}

// Texto opcional: vazio vira `None`
pub(crate) fn texto_opcional(valor: &str) -> Option<String> {
    let valor = valor.trim();
    (!valor.is_empty()).then(|| valor.to_string())
}
