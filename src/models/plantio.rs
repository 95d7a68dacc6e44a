// src/models/plantio.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// --- Enums ---

// Rótulo simples; o cliente não impõe regras de transição
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusPlantio {
    #[default]
    Planejado,     // Vira "PLANEJADO"
    Executado,
    EmMonitoramento, // Vira "EM_MONITORAMENTO"
    Concluido,
}

impl StatusPlantio {
    pub const TODOS: [StatusPlantio; 4] = [
        StatusPlantio::Planejado,
        StatusPlantio::Executado,
        StatusPlantio::EmMonitoramento,
        StatusPlantio::Concluido,
    ];

    pub fn rotulo(&self) -> &'static str {
        match self {
            StatusPlantio::Planejado => "Planejado",
            StatusPlantio::Executado => "Executado",
            StatusPlantio::EmMonitoramento => "Em Monitoramento",
            StatusPlantio::Concluido => "Concluído",
        }
    }
}

// Unidade das doses de adubo e defensivo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnidadeDose {
    KgHa, // Vira "KG_HA"
    GHa,
    MlHa,
    LHa,
    TonHa,
}

impl UnidadeDose {
    pub const PADRAO_ADUBO: UnidadeDose = UnidadeDose::KgHa;
    pub const PADRAO_DEFENSIVO: UnidadeDose = UnidadeDose::LHa;
}

// --- Plantio como devolvido pelo backend ---

// Resumo do cultivar embutido na listagem por fazenda
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CultivarResumo {
    pub id: Option<i64>,
    pub nome_popular: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plantio {
    pub id: i64,
    pub id_fazenda: i64,
    pub id_cultivar: i64,
    pub id_analise_solo: Option<i64>,

    // Datas em ISO, como o backend devolve
    pub data_plantio: Option<String>,
    pub data_emergencia: Option<String>,
    pub data_prevista_colheita: Option<String>,
    pub data_maturacao: Option<String>,

    pub area_plantada: Option<Decimal>,
    pub densidade_planejada: Option<i64>,
    pub densidade_plantio_real: Option<i64>,
    pub ph_solo_inicial: Option<Decimal>,
    pub umidade_solo_inicial: Option<Decimal>,
    pub espacamento_entre_linhas: Option<Decimal>,
    pub lote_semente: Option<String>,
    pub taxa_germinacao: Option<Decimal>,
    pub tratamento_semente: Option<String>,
    pub profundidade_semeadura: Option<Decimal>,
    pub orientacao_transplantio: Option<String>,

    // Irrigação
    pub mm_agua_aplicado: Option<Decimal>,
    pub irrigacao_volume: Option<Decimal>,
    pub irrigacao_duracao: Option<i64>,

    // Adubação e defensivos
    pub adubo_nitrogenio_dose: Option<Decimal>,
    pub adubo_nitrogenio_unidade: Option<UnidadeDose>,
    pub adubo_potassio_dose: Option<Decimal>,
    pub adubo_potassio_unidade: Option<UnidadeDose>,
    pub adubo_fosforo_dose: Option<Decimal>,
    pub adubo_fosforo_unidade: Option<UnidadeDose>,
    pub defensivo_utilizado: Option<String>,
    pub dose_defensivo: Option<Decimal>,
    pub unidade_defensivo: Option<UnidadeDose>,

    // Custos
    pub custo_semente: Option<Decimal>,
    pub custo_fertilizante: Option<Decimal>,
    pub custo_defensivo: Option<Decimal>,
    pub custo_combustivel: Option<Decimal>,
    pub custo_outros: Option<Decimal>,

    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub status_plantio: StatusPlantio,
    pub observacao: Option<String>,

    pub cultivar: Option<CultivarResumo>,
}

// --- Corpo de POST /plantio e PUT /plantio/:id ---
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantioPayload {
    pub id_fazenda: i64,
    pub id_cultivar: i64,
    // Sempre presente no JSON: `null` quando não há análise vinculada
    pub id_analise_solo: Option<i64>,

    pub data_plantio: DateTime<Utc>,
    pub data_emergencia: Option<DateTime<Utc>>,
    pub data_prevista_colheita: Option<DateTime<Utc>>,
    pub data_maturacao: Option<DateTime<Utc>>,

    pub area_plantada: Decimal,
    pub densidade_planejada: i64,
    pub densidade_plantio_real: Option<i64>,
    pub ph_solo_inicial: Option<Decimal>,
    pub umidade_solo_inicial: Option<Decimal>,
    pub espacamento_entre_linhas: Option<Decimal>,
    pub lote_semente: String,
    pub taxa_germinacao: Option<Decimal>,
    pub tratamento_semente: String,
    pub profundidade_semeadura: Option<Decimal>,
    pub orientacao_transplantio: String,

    pub mm_agua_aplicado: Option<Decimal>,
    pub irrigacao_volume: Option<Decimal>,
    pub irrigacao_duracao: Option<i64>,

    pub adubo_nitrogenio_dose: Option<Decimal>,
    pub adubo_nitrogenio_unidade: UnidadeDose,
    pub adubo_potassio_dose: Option<Decimal>,
    pub adubo_potassio_unidade: UnidadeDose,
    pub adubo_fosforo_dose: Option<Decimal>,
    pub adubo_fosforo_unidade: UnidadeDose,
    pub defensivo_utilizado: String,
    pub dose_defensivo: Option<Decimal>,
    pub unidade_defensivo: UnidadeDose,

    pub custo_semente: Option<Decimal>,
    pub custo_fertilizante: Option<Decimal>,
    pub custo_defensivo: Option<Decimal>,
    pub custo_combustivel: Option<Decimal>,
    pub custo_outros: Option<Decimal>,

    pub status_plantio: StatusPlantio,
    pub observacao: String,
}
