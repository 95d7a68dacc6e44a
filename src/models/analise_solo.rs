// src/models/analise_solo.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Análise de solo (laudo de laboratório) vinculável a um plantio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnaliseSolo {
    pub id: i64,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub ph: Decimal,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub area_total: Decimal,
    // H+Al (acidez potencial)
    #[serde(default, alias = "hAi", deserialize_with = "super::nulo_como_padrao")]
    pub h_al: Decimal,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub sb: Decimal,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub ctc: Decimal,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub v: Decimal,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub m: Decimal,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub mo: Decimal,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub valor_cultural: Decimal,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub prnt: Decimal,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub n: Decimal,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub p: Decimal,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub k: Decimal,
    pub id_fazenda: Option<i64>,
}

// Corpo de POST /analise-solo e PUT /analise-solo/:id.
// Também é o "rascunho" guardado pelo fluxo de plantio até o envio final.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnaliseSoloPayload {
    pub ph: Decimal,
    pub area_total: Decimal,
    pub h_al: Decimal,
    pub sb: Decimal,
    pub ctc: Decimal,
    pub v: Decimal,
    pub m: Decimal,
    pub mo: Decimal,
    pub valor_cultural: Decimal,
    pub prnt: Decimal,
    pub n: Decimal,
    pub p: Decimal,
    pub k: Decimal,
    pub id_fazenda: i64,
}

// --- Recomendações calculadas no servidor ---

// A chave `rencomedacaoCalagem` é a grafia usada pelo backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculoCalagem {
    #[serde(alias = "recomendacaoCalagem")]
    pub rencomedacao_calagem: Option<Decimal>,
    pub recomendacao_calagem_total: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculoAdubacao {
    pub area_ha: Option<Decimal>,
    pub n: Option<Decimal>,
    pub p: Option<Decimal>,
    pub k: Option<Decimal>,
    pub n_total_area_kg: Option<Decimal>,
    pub p_total_area_kg: Option<Decimal>,
    pub k_total_area_kg: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrientes {
    pub ph: Option<Decimal>,
    pub n: Option<Decimal>,
    pub p: Option<Decimal>,
    pub k: Option<Decimal>,
    pub ca: Option<Decimal>,
    pub mg: Option<Decimal>,
}

// Solo medido x exigência do cultivar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparativoNutrientes {
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub analise_solo: Nutrientes,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub cultivar: Nutrientes,
}

// As três respostas juntas, como a tela de resultado exibe
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultadoAnalise {
    pub calagem: CalculoCalagem,
    pub adubacao: CalculoAdubacao,
    pub comparativo: ComparativoNutrientes,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn aceita_a_grafia_alternativa_de_h_al() {
        let analise: AnaliseSolo = serde_json::from_value(serde_json::json!({
            "id": 4, "ph": 5.5, "areaTotal": 12, "hAi": 3.1, "idFazenda": 1
        }))
        .unwrap();
        assert_eq!(analise.h_al, Decimal::new(31, 1));
        assert_eq!(analise.k, Decimal::ZERO);
    }

    #[test]
    fn nutriente_nulo_nao_derruba_a_leitura() {
        let analise: AnaliseSolo = serde_json::from_value(serde_json::json!({
            "id": 4, "ph": 5.5, "areaTotal": 12, "k": null, "mo": null, "idFazenda": 1
        }))
        .unwrap();
        assert_eq!(analise.k, Decimal::ZERO);
        assert_eq!(analise.mo, Decimal::ZERO);
        assert_eq!(analise.ph, Decimal::new(55, 1));
    }

    #[test]
    fn payload_usa_as_chaves_do_backend() {
        let payload = AnaliseSoloPayload {
            ph: Decimal::new(55, 1),
            area_total: Decimal::from(10),
            h_al: Decimal::ZERO,
            sb: Decimal::ZERO,
            ctc: Decimal::ZERO,
            v: Decimal::ZERO,
            m: Decimal::ZERO,
            mo: Decimal::ZERO,
            valor_cultural: Decimal::ZERO,
            prnt: Decimal::ZERO,
            n: Decimal::ZERO,
            p: Decimal::ZERO,
            k: Decimal::ZERO,
            id_fazenda: 1,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["hAl"], serde_json::json!(0.0));
        assert_eq!(json["valorCultural"], serde_json::json!(0.0));
        assert_eq!(json["idFazenda"], serde_json::json!(1));
        assert_eq!(json["ph"], serde_json::json!(5.5));
    }
}
