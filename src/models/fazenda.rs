// src/models/fazenda.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fazenda {
    pub id: i64,
    pub nome: String,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub latitude: Decimal,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub longitude: Decimal,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub area_total: Decimal,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub cnpj: String,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub solo_predominante: String,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub cultivo_predominante: String,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub municipio: String,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub uf: String,
    #[serde(default = "ativo_por_padrao")]
    pub ativo: bool,
}

fn ativo_por_padrao() -> bool {
    true
}

// Corpo de POST /fazenda e PUT /fazenda/:id
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FazendaPayload {
    pub nome: String,
    pub cnpj: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub area_total: Decimal,
    pub solo_predominante: String,
    pub cultivo_predominante: String,
    pub municipio: String,
    pub uf: String,
    pub ativo: bool,
}
