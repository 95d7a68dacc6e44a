// src/forms/plantio_form.rs

use rust_decimal::Decimal;
use validator::ValidationErrors;

use crate::{
    common::error::AppError,
    forms::field::{DateField, EmptyPolicy, NumericField},
    models::plantio::{Plantio, PlantioPayload, StatusPlantio, UnidadeDose},
};

/// Formulário de plantio.
///
/// Obrigatórios: `dataPlantio`, `areaPlantada` e `densidadePlanejada`.
/// Os demais números, quando vazios ou ilegíveis, vão como `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantioForm {
    // --- Datas ---
    pub data_plantio: DateField,
    pub data_emergencia: DateField,
    pub data_prevista_colheita: DateField,
    pub data_maturacao: DateField,

    // --- Semeadura ---
    pub area_plantada: NumericField<Decimal>,
    pub densidade_planejada: NumericField<i64>,
    pub densidade_plantio_real: NumericField<i64>,
    pub ph_solo_inicial: NumericField<Decimal>,
    pub umidade_solo_inicial: NumericField<Decimal>,
    pub espacamento_entre_linhas: NumericField<Decimal>,
    pub lote_semente: String,
    pub taxa_germinacao: NumericField<Decimal>,
    pub tratamento_semente: String,
    pub profundidade_semeadura: NumericField<Decimal>,
    pub orientacao_transplantio: String,

    // --- Irrigação ---
    pub mm_agua_aplicado: NumericField<Decimal>,
    pub irrigacao_volume: NumericField<Decimal>,
    pub irrigacao_duracao: NumericField<i64>,

    // --- Adubação e defensivos ---
    pub adubo_nitrogenio_dose: NumericField<Decimal>,
    pub adubo_nitrogenio_unidade: UnidadeDose,
    pub adubo_potassio_dose: NumericField<Decimal>,
    pub adubo_potassio_unidade: UnidadeDose,
    pub adubo_fosforo_dose: NumericField<Decimal>,
    pub adubo_fosforo_unidade: UnidadeDose,
    pub defensivo_utilizado: String,
    pub dose_defensivo: NumericField<Decimal>,
    pub unidade_defensivo: UnidadeDose,

    // --- Custos ---
    pub custo_semente: NumericField<Decimal>,
    pub custo_fertilizante: NumericField<Decimal>,
    pub custo_defensivo: NumericField<Decimal>,
    pub custo_combustivel: NumericField<Decimal>,
    pub custo_outros: NumericField<Decimal>,

    pub status_plantio: StatusPlantio,
    pub observacao: String,
}

fn decimal() -> NumericField<Decimal> {
    NumericField::new(EmptyPolicy::Nulo)
}

fn inteiro() -> NumericField<i64> {
    NumericField::new(EmptyPolicy::Nulo)
}

fn decimal_de(valor: Option<Decimal>) -> NumericField<Decimal> {
    NumericField::with_value(EmptyPolicy::Nulo, valor)
}

fn inteiro_de(valor: Option<i64>) -> NumericField<i64> {
    NumericField::with_value(EmptyPolicy::Nulo, valor)
}

impl Default for PlantioForm {
    fn default() -> Self {
        Self {
            data_plantio: DateField::default(),
            data_emergencia: DateField::default(),
            data_prevista_colheita: DateField::default(),
            data_maturacao: DateField::default(),
            area_plantada: decimal(),
            densidade_planejada: inteiro(),
            densidade_plantio_real: inteiro(),
            ph_solo_inicial: decimal(),
            umidade_solo_inicial: decimal(),
            espacamento_entre_linhas: decimal(),
            lote_semente: String::new(),
            taxa_germinacao: decimal(),
            tratamento_semente: String::new(),
            profundidade_semeadura: decimal(),
            orientacao_transplantio: String::new(),
            mm_agua_aplicado: decimal(),
            irrigacao_volume: decimal(),
            irrigacao_duracao: inteiro(),
            adubo_nitrogenio_dose: decimal(),
            adubo_nitrogenio_unidade: UnidadeDose::PADRAO_ADUBO,
            adubo_potassio_dose: decimal(),
            adubo_potassio_unidade: UnidadeDose::PADRAO_ADUBO,
            adubo_fosforo_dose: decimal(),
            adubo_fosforo_unidade: UnidadeDose::PADRAO_ADUBO,
            defensivo_utilizado: String::new(),
            dose_defensivo: decimal(),
            unidade_defensivo: UnidadeDose::PADRAO_DEFENSIVO,
            custo_semente: decimal(),
            custo_fertilizante: decimal(),
            custo_defensivo: decimal(),
            custo_combustivel: decimal(),
            custo_outros: decimal(),
            status_plantio: StatusPlantio::default(),
            observacao: String::new(),
        }
    }
}

impl PlantioForm {
    // Modo edição: todos os campos vêm do plantio existente
    pub fn from_plantio(plantio: &Plantio) -> Self {
        Self {
            data_plantio: DateField::from_iso(plantio.data_plantio.as_deref()),
            data_emergencia: DateField::from_iso(plantio.data_emergencia.as_deref()),
            data_prevista_colheita: DateField::from_iso(plantio.data_prevista_colheita.as_deref()),
            data_maturacao: DateField::from_iso(plantio.data_maturacao.as_deref()),
            area_plantada: decimal_de(plantio.area_plantada),
            densidade_planejada: inteiro_de(plantio.densidade_planejada),
            densidade_plantio_real: inteiro_de(plantio.densidade_plantio_real),
            ph_solo_inicial: decimal_de(plantio.ph_solo_inicial),
            umidade_solo_inicial: decimal_de(plantio.umidade_solo_inicial),
            espacamento_entre_linhas: decimal_de(plantio.espacamento_entre_linhas),
            lote_semente: plantio.lote_semente.clone().unwrap_or_default(),
            taxa_germinacao: decimal_de(plantio.taxa_germinacao),
            tratamento_semente: plantio.tratamento_semente.clone().unwrap_or_default(),
            profundidade_semeadura: decimal_de(plantio.profundidade_semeadura),
            orientacao_transplantio: plantio.orientacao_transplantio.clone().unwrap_or_default(),
            mm_agua_aplicado: decimal_de(plantio.mm_agua_aplicado),
            irrigacao_volume: decimal_de(plantio.irrigacao_volume),
            irrigacao_duracao: inteiro_de(plantio.irrigacao_duracao),
            adubo_nitrogenio_dose: decimal_de(plantio.adubo_nitrogenio_dose),
            adubo_nitrogenio_unidade: plantio.adubo_nitrogenio_unidade.unwrap_or(UnidadeDose::PADRAO_ADUBO),
            adubo_potassio_dose: decimal_de(plantio.adubo_potassio_dose),
            adubo_potassio_unidade: plantio.adubo_potassio_unidade.unwrap_or(UnidadeDose::PADRAO_ADUBO),
            adubo_fosforo_dose: decimal_de(plantio.adubo_fosforo_dose),
            adubo_fosforo_unidade: plantio.adubo_fosforo_unidade.unwrap_or(UnidadeDose::PADRAO_ADUBO),
            defensivo_utilizado: plantio.defensivo_utilizado.clone().unwrap_or_default(),
            dose_defensivo: decimal_de(plantio.dose_defensivo),
            unidade_defensivo: plantio.unidade_defensivo.unwrap_or(UnidadeDose::PADRAO_DEFENSIVO),
            custo_semente: decimal_de(plantio.custo_semente),
            custo_fertilizante: decimal_de(plantio.custo_fertilizante),
            custo_defensivo: decimal_de(plantio.custo_defensivo),
            custo_combustivel: decimal_de(plantio.custo_combustivel),
            custo_outros: decimal_de(plantio.custo_outros),
            status_plantio: plantio.status_plantio,
            observacao: plantio.observacao.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let mut erros = ValidationErrors::new();

        self.data_plantio.validar("dataPlantio", true, &mut erros);
        self.area_plantada.exigir("areaPlantada", &mut erros);
        self.densidade_planejada.exigir("densidadePlanejada", &mut erros);

        // Datas opcionais: vazias passam, incompletas não
        self.data_emergencia.validar("dataEmergencia", false, &mut erros);
        self.data_prevista_colheita.validar("dataPrevistaColheita", false, &mut erros);
        self.data_maturacao.validar("dataMaturacao", false, &mut erros);

        if erros.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(erros))
        }
    }

    pub fn to_payload(
        &self,
        id_fazenda: i64,
        id_cultivar: i64,
        id_analise_solo: Option<i64>,
    ) -> Result<PlantioPayload, AppError> {
        self.validate()?;

        let data_plantio = self
            .data_plantio
            .iso()
            .ok_or_else(|| AppError::campo_invalido("dataPlantio", "invalid_date", "Data inválida (DD/MM/AAAA)."))?;

        Ok(PlantioPayload {
            id_fazenda,
            id_cultivar,
            id_analise_solo,
            data_plantio,
            data_emergencia: self.data_emergencia.iso(),
            data_prevista_colheita: self.data_prevista_colheita.iso(),
            data_maturacao: self.data_maturacao.iso(),
            area_plantada: self.area_plantada.obrigatorio(),
            densidade_planejada: self.densidade_planejada.obrigatorio(),
            densidade_plantio_real: self.densidade_plantio_real.resolve(),
            ph_solo_inicial: self.ph_solo_inicial.resolve(),
            umidade_solo_inicial: self.umidade_solo_inicial.resolve(),
            espacamento_entre_linhas: self.espacamento_entre_linhas.resolve(),
            lote_semente: self.lote_semente.trim().to_string(),
            taxa_germinacao: self.taxa_germinacao.resolve(),
            tratamento_semente: self.tratamento_semente.trim().to_string(),
            profundidade_semeadura: self.profundidade_semeadura.resolve(),
            orientacao_transplantio: self.orientacao_transplantio.trim().to_string(),
            mm_agua_aplicado: self.mm_agua_aplicado.resolve(),
            irrigacao_volume: self.irrigacao_volume.resolve(),
            irrigacao_duracao: self.irrigacao_duracao.resolve(),
            adubo_nitrogenio_dose: self.adubo_nitrogenio_dose.resolve(),
            adubo_nitrogenio_unidade: self.adubo_nitrogenio_unidade,
            adubo_potassio_dose: self.adubo_potassio_dose.resolve(),
            adubo_potassio_unidade: self.adubo_potassio_unidade,
            adubo_fosforo_dose: self.adubo_fosforo_dose.resolve(),
            adubo_fosforo_unidade: self.adubo_fosforo_unidade,
            defensivo_utilizado: self.defensivo_utilizado.trim().to_string(),
            dose_defensivo: self.dose_defensivo.resolve(),
            unidade_defensivo: self.unidade_defensivo,
            custo_semente: self.custo_semente.resolve(),
            custo_fertilizante: self.custo_fertilizante.resolve(),
            custo_defensivo: self.custo_defensivo.resolve(),
            custo_combustivel: self.custo_combustivel.resolve(),
            custo_outros: self.custo_outros.resolve(),
            status_plantio: self.status_plantio,
            observacao: self.observacao.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn preenchido() -> PlantioForm {
        let mut form = PlantioForm::default();
        form.data_plantio.set("15/03/2025");
        form.area_plantada.set("10.5");
        form.densidade_planejada.set("300000");
        form
    }

    #[test]
    fn cenario_de_plantio_novo_sem_analise() {
        let payload = preenchido().to_payload(1, 3, None).unwrap();
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["dataPlantio"], json!("2025-03-15T00:00:00Z"));
        assert_eq!(json["areaPlantada"], json!(10.5));
        assert_eq!(json["densidadePlanejada"], json!(300000));
        assert_eq!(json["idAnaliseSolo"], json!(null));
        assert_eq!(json["statusPlantio"], json!("PLANEJADO"));
        assert_eq!(json["aduboNitrogenioUnidade"], json!("KG_HA"));
        assert_eq!(json["unidadeDefensivo"], json!("L_HA"));
        assert_eq!(json["custoSemente"], json!(null));
    }

    #[test]
    fn qualquer_obrigatorio_faltando_bloqueia() {
        let limpar: [fn(&mut PlantioForm); 3] = [
            |f| f.data_plantio.set(""),
            |f| f.area_plantada.set(""),
            |f| f.densidade_planejada.set(""),
        ];

        for mascara in 1u8..8 {
            let mut form = preenchido();
            for (i, limpa) in limpar.iter().enumerate() {
                if mascara & (1 << i) != 0 {
                    limpa(&mut form);
                }
            }
            let erro = form.to_payload(1, 3, None).unwrap_err();
            assert_eq!(erro.campos_invalidos().len(), mascara.count_ones() as usize);
        }
    }

    #[test]
    fn virgula_decimal_e_opcionais_ilegiveis() {
        let mut form = preenchido();
        form.area_plantada.set("10,5");
        form.custo_semente.set("1.200,00");
        form.taxa_germinacao.set("0");

        let payload = form.to_payload(1, 3, Some(8)).unwrap();
        assert_eq!(payload.area_plantada, Decimal::new(105, 1));
        assert_eq!(payload.custo_semente, None);
        assert_eq!(payload.taxa_germinacao, Some(Decimal::ZERO));
        assert_eq!(payload.id_analise_solo, Some(8));
    }

    #[test]
    fn data_opcional_incompleta_bloqueia() {
        let mut form = preenchido();
        form.data_emergencia.set("0104");
        assert_eq!(form.validate().unwrap_err().campos_invalidos(), vec!["dataEmergencia"]);
    }

    #[test]
    fn edicao_preenche_tudo_do_plantio() {
        let plantio: Plantio = serde_json::from_value(json!({
            "id": 7,
            "idFazenda": 1,
            "idCultivar": 3,
            "idAnaliseSolo": 11,
            "dataPlantio": "2025-03-15T00:00:00.000Z",
            "areaPlantada": 10.5,
            "densidadePlanejada": 300000,
            "unidadeDefensivo": "ML_HA",
            "statusPlantio": "EXECUTADO",
            "loteSemente": "L-42"
        }))
        .unwrap();

        let form = PlantioForm::from_plantio(&plantio);
        assert_eq!(form.data_plantio.raw(), "15/03/2025");
        assert_eq!(form.area_plantada.raw(), "10.5");
        assert_eq!(form.densidade_planejada.raw(), "300000");
        assert_eq!(form.unidade_defensivo, UnidadeDose::MlHa);
        assert_eq!(form.adubo_fosforo_unidade, UnidadeDose::KgHa);
        assert_eq!(form.status_plantio, StatusPlantio::Executado);
        assert_eq!(form.lote_semente, "L-42");

        // Reenviar sem mudanças preserva os valores
        let payload = form.to_payload(1, 3, plantio.id_analise_solo).unwrap();
        assert_eq!(payload.area_plantada, Decimal::new(105, 1));
        assert_eq!(payload.densidade_planejada, 300000);
    }
}
