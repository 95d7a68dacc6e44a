// src/models/cultivar.rs

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// --- Tipos de cultura (os cards da tela de Plantio) ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoPlanta {
    Soja,
    Milho,
    Feijao,
    Arroz,
    Cafe,
    Algodao,
    Banana,
    Laranja,
}

impl TipoPlanta {
    pub const TODOS: [TipoPlanta; 8] = [
        TipoPlanta::Soja,
        TipoPlanta::Milho,
        TipoPlanta::Feijao,
        TipoPlanta::Arroz,
        TipoPlanta::Cafe,
        TipoPlanta::Algodao,
        TipoPlanta::Banana,
        TipoPlanta::Laranja,
    ];

    // Valor enviado ao backend e usado no filtro de cultivares
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoPlanta::Soja => "SOJA",
            TipoPlanta::Milho => "MILHO",
            TipoPlanta::Feijao => "FEIJAO",
            TipoPlanta::Arroz => "ARROZ",
            TipoPlanta::Cafe => "CAFE",
            TipoPlanta::Algodao => "ALGODAO",
            TipoPlanta::Banana => "BANANA",
            TipoPlanta::Laranja => "LARANJA",
        }
    }

    pub fn nome(&self) -> &'static str {
        match self {
            TipoPlanta::Soja => "Soja",
            TipoPlanta::Milho => "Milho",
            TipoPlanta::Feijao => "Feijão",
            TipoPlanta::Arroz => "Arroz",
            TipoPlanta::Cafe => "Café",
            TipoPlanta::Algodao => "Algodão",
            TipoPlanta::Banana => "Banana",
            TipoPlanta::Laranja => "Laranja",
        }
    }
}

impl fmt::Display for TipoPlanta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TipoPlanta {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let alvo = s.trim().to_uppercase();
        TipoPlanta::TODOS
            .into_iter()
            .find(|t| t.as_str() == alvo)
            .ok_or_else(|| format!("Tipo de cultura desconhecido: {s}"))
    }
}

// --- Cultivar: o perfil ideal de uma variedade ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cultivar {
    pub id: i64,
    pub nome_cientifico: String,
    pub nome_popular: String,
    // Texto livre no backend; comparado com `TipoPlanta::as_str`
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub tipo_planta: String,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub tipo_solo: String,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub ph_solo: Decimal,
    pub data_plantio_inicio: Option<String>,
    pub data_plantio_fim: Option<String>,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub periodo_dias: i64,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub mm_agua: i64,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub adubo_nitrogenio: i64,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub adubo_fosforo: i64,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub adubo_potassio: i64,
    pub adubo_calcio: Option<Decimal>,
    pub adubo_magnesio: Option<Decimal>,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub tempo_ciclo_dias: i64,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub densidade_plantio: i64,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub densidade_colheita: i64,
    pub observacao: Option<String>,
    pub praga: Option<String>,
    pub fornecedor: Option<String>,
}

impl Cultivar {
    pub fn e_do_tipo(&self, tipo: TipoPlanta) -> bool {
        self.tipo_planta.trim().eq_ignore_ascii_case(tipo.as_str())
    }
}

// Corpo de POST /cultivar e PUT /cultivar/:id
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CultivarPayload {
    pub nome_cientifico: String,
    pub nome_popular: String,
    pub tipo_planta: String,
    pub tipo_solo: String,
    pub ph_solo: Decimal,
    // Enviadas no formato digitado (DD/MM/AAAA)
    pub data_plantio_inicio: String,
    pub data_plantio_fim: String,
    pub periodo_dias: i64,
    pub mm_agua: i64,
    pub adubo_nitrogenio: i64,
    pub adubo_fosforo: i64,
    pub adubo_potassio: i64,
    pub adubo_calcio: Option<Decimal>,
    pub adubo_magnesio: Option<Decimal>,
    pub tempo_ciclo_dias: i64,
    pub densidade_plantio: i64,
    pub densidade_colheita: i64,
    pub observacao: Option<String>,
    pub praga: Option<String>,
    pub fornecedor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tipo_planta_aceita_minusculas() {
        assert_eq!("soja".parse::<TipoPlanta>(), Ok(TipoPlanta::Soja));
        assert_eq!(" ALGODAO ".parse::<TipoPlanta>(), Ok(TipoPlanta::Algodao));
        assert!("TRIGO".parse::<TipoPlanta>().is_err());
    }

    #[test]
    fn nulos_do_backend_viram_padrao() {
        let cultivar: Cultivar = serde_json::from_value(serde_json::json!({
            "id": 3, "nomeCientifico": "Glycine max", "nomePopular": "Soja",
            "tipoPlanta": "SOJA", "tipoSolo": null, "phSolo": null,
            "dataPlantioInicio": null, "dataPlantioFim": null,
            "mmAgua": null, "aduboNitrogenio": null, "aduboCalcio": null,
            "observacao": null, "praga": null, "fornecedor": null
        }))
        .unwrap();
        assert_eq!(cultivar.ph_solo, Decimal::ZERO);
        assert_eq!(cultivar.mm_agua, 0);
        assert_eq!(cultivar.tipo_solo, "");
        assert_eq!(cultivar.adubo_calcio, None);
    }

    #[test]
    fn tipo_planta_serializa_em_maiusculas() {
        let json = serde_json::to_string(&TipoPlanta::Feijao).unwrap();
        assert_eq!(json, "\"FEIJAO\"");
    }
}
