// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// 1. Clima (previsão dos próximos dias)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrevisaoDia {
    pub data: String, // YYYY-MM-DD
    pub temperatura_max: Option<Decimal>,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub condicao: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clima {
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub previsao_proximos_dias: Vec<PrevisaoDia>,
}

// 2. Cotação da bolsa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cotacao {
    pub preco_atual: Decimal,
    pub simbolo: String,
}

// 3. Notícias
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Noticia {
    pub titulo: String,
    pub url: String,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub descricao: String,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub img: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Noticias {
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub articles: Vec<Noticia>,
}

// O que a tela do dashboard exibe depois do fan-in
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub clima: Option<PrevisaoDia>,
    pub cotacao: Cotacao,
    pub noticias: Vec<Noticia>,
}
