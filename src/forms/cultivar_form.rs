// src/forms/cultivar_form.rs

use rust_decimal::Decimal;
use validator::ValidationErrors;

use crate::{
    common::{dates, error::AppError},
    forms::field::{EmptyPolicy, NumericField, exigir_texto, texto_opcional},
    models::cultivar::{Cultivar, CultivarPayload, TipoPlanta},
};

// Opções dos seletores da tela de cultivar
pub const TIPOS_DE_SOLO: [&str; 4] = ["Arenoso", "Argiloso", "Siltoso", "Misto"];

pub const PRAGAS: [&str; 6] = [
    "Lagarta",
    "Percevejo",
    "Mosca-branca",
    "Pulgão",
    "Ferrugem",
    "Nematoide",
];

#[derive(Debug, Clone)]
pub struct CultivarForm {
    pub nome_cientifico: String,
    pub nome_popular: String,
    pub tipo_planta: TipoPlanta,
    pub tipo_solo: String,
    pub ph_solo: NumericField<Decimal>,
    data_plantio_inicio: String,
    data_plantio_fim: String,
    pub periodo_dias: NumericField<i64>,
    pub mm_agua: NumericField<i64>,
    pub adubo_nitrogenio: NumericField<i64>,
    pub adubo_fosforo: NumericField<i64>,
    pub adubo_potassio: NumericField<i64>,
    pub adubo_calcio: NumericField<Decimal>,
    pub adubo_magnesio: NumericField<Decimal>,
    pub tempo_ciclo_dias: NumericField<i64>,
    pub densidade_plantio: NumericField<i64>,
    pub densidade_colheita: NumericField<i64>,
    pub observacao: String,
    pub praga: String,
    pub fornecedor: String,
}

impl CultivarForm {
    pub fn new(tipo_planta: TipoPlanta) -> Self {
        Self {
            nome_cientifico: String::new(),
            nome_popular: String::new(),
            tipo_planta,
            tipo_solo: String::new(),
            ph_solo: NumericField::new(EmptyPolicy::Zero),
            data_plantio_inicio: String::new(),
            data_plantio_fim: String::new(),
            periodo_dias: NumericField::new(EmptyPolicy::Zero),
            mm_agua: NumericField::new(EmptyPolicy::Zero),
            adubo_nitrogenio: NumericField::new(EmptyPolicy::Zero),
            adubo_fosforo: NumericField::new(EmptyPolicy::Zero),
            adubo_potassio: NumericField::new(EmptyPolicy::Zero),
            adubo_calcio: NumericField::new(EmptyPolicy::Nulo),
            adubo_magnesio: NumericField::new(EmptyPolicy::Nulo),
            tempo_ciclo_dias: NumericField::new(EmptyPolicy::Zero),
            densidade_plantio: NumericField::new(EmptyPolicy::Zero),
            densidade_colheita: NumericField::new(EmptyPolicy::Zero),
            observacao: String::new(),
            praga: String::new(),
            fornecedor: String::new(),
        }
    }

    pub fn from_cultivar(cultivar: &Cultivar) -> Self {
        let tipo = cultivar.tipo_planta.parse().unwrap_or(TipoPlanta::Soja);
        let mut form = Self::new(tipo);

        form.nome_cientifico = cultivar.nome_cientifico.clone();
        form.nome_popular = cultivar.nome_popular.clone();
        form.tipo_solo = cultivar.tipo_solo.clone();
        form.ph_solo = NumericField::with_value(EmptyPolicy::Zero, Some(cultivar.ph_solo));
        // O backend pode devolver ISO ou o texto já mascarado
        form.data_plantio_inicio = data_para_campo(cultivar.data_plantio_inicio.as_deref());
        form.data_plantio_fim = data_para_campo(cultivar.data_plantio_fim.as_deref());
        form.periodo_dias = NumericField::with_value(EmptyPolicy::Zero, Some(cultivar.periodo_dias));
        form.mm_agua = NumericField::with_value(EmptyPolicy::Zero, Some(cultivar.mm_agua));
        form.adubo_nitrogenio = NumericField::with_value(EmptyPolicy::Zero, Some(cultivar.adubo_nitrogenio));
        form.adubo_fosforo = NumericField::with_value(EmptyPolicy::Zero, Some(cultivar.adubo_fosforo));
        form.adubo_potassio = NumericField::with_value(EmptyPolicy::Zero, Some(cultivar.adubo_potassio));
        form.adubo_calcio = NumericField::with_value(EmptyPolicy::Nulo, cultivar.adubo_calcio);
        form.adubo_magnesio = NumericField::with_value(EmptyPolicy::Nulo, cultivar.adubo_magnesio);
        form.tempo_ciclo_dias = NumericField::with_value(EmptyPolicy::Zero, Some(cultivar.tempo_ciclo_dias));
        form.densidade_plantio = NumericField::with_value(EmptyPolicy::Zero, Some(cultivar.densidade_plantio));
        form.densidade_colheita = NumericField::with_value(EmptyPolicy::Zero, Some(cultivar.densidade_colheita));
        form.observacao = cultivar.observacao.clone().unwrap_or_default();
        form.praga = cultivar.praga.clone().unwrap_or_default();
        form.fornecedor = cultivar.fornecedor.clone().unwrap_or_default();
        form
    }

    // --- Datas (mascaradas a cada tecla) ---

    pub fn set_data_plantio_inicio(&mut self, texto: &str) {
        self.data_plantio_inicio = dates::mask_date(texto);
    }

    pub fn set_data_plantio_fim(&mut self, texto: &str) {
        self.data_plantio_fim = dates::mask_date(texto);
    }

    pub fn data_plantio_inicio(&self) -> &str {
        &self.data_plantio_inicio
    }

    pub fn data_plantio_fim(&self) -> &str {
        &self.data_plantio_fim
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let mut erros = ValidationErrors::new();
        exigir_texto(&self.nome_cientifico, "nomeCientifico", &mut erros);
        exigir_texto(&self.nome_popular, "nomePopular", &mut erros);

        if erros.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(erros))
        }
    }

    pub fn to_payload(&self) -> Result<CultivarPayload, AppError> {
        self.validate()?;

        Ok(CultivarPayload {
            nome_cientifico: self.nome_cientifico.trim().to_string(),
            nome_popular: self.nome_popular.trim().to_string(),
            tipo_planta: self.tipo_planta.as_str().to_string(),
            tipo_solo: self.tipo_solo.clone(),
            ph_solo: self.ph_solo.resolve().unwrap_or_default(),
            data_plantio_inicio: self.data_plantio_inicio.clone(),
            data_plantio_fim: self.data_plantio_fim.clone(),
            periodo_dias: self.periodo_dias.resolve().unwrap_or_default(),
            mm_agua: self.mm_agua.resolve().unwrap_or_default(),
            adubo_nitrogenio: self.adubo_nitrogenio.resolve().unwrap_or_default(),
            adubo_fosforo: self.adubo_fosforo.resolve().unwrap_or_default(),
            adubo_potassio: self.adubo_potassio.resolve().unwrap_or_default(),
            adubo_calcio: self.adubo_calcio.resolve(),
            adubo_magnesio: self.adubo_magnesio.resolve(),
            tempo_ciclo_dias: self.tempo_ciclo_dias.resolve().unwrap_or_default(),
            densidade_plantio: self.densidade_plantio.resolve().unwrap_or_default(),
            densidade_colheita: self.densidade_colheita.resolve().unwrap_or_default(),
            observacao: texto_opcional(&self.observacao),
            praga: texto_opcional(&self.praga),
            fornecedor: texto_opcional(&self.fornecedor),
        })
    }
}

fn data_para_campo(valor: Option<&str>) -> String {
    match valor {
        Some(texto) if dates::parse_display_date(texto).is_some() => texto.to_string(),
        outro => dates::format_date_for_input(outro),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nomes_sao_obrigatorios() {
        let form = CultivarForm::new(TipoPlanta::Milho);
        assert_eq!(
            form.to_payload().unwrap_err().campos_invalidos(),
            vec!["nomeCientifico", "nomePopular"]
        );
    }

    #[test]
    fn payload_segue_a_tabela_de_vazios() {
        let mut form = CultivarForm::new(TipoPlanta::Milho);
        form.nome_cientifico = "Zea mays".to_string();
        form.nome_popular = "Milho AG".to_string();
        form.ph_solo.set("6,2");
        form.set_data_plantio_inicio("01102025");
        form.densidade_plantio.set("65000");

        let payload = form.to_payload().unwrap();
        assert_eq!(payload.tipo_planta, "MILHO");
        assert_eq!(payload.ph_solo, Decimal::new(62, 1));
        assert_eq!(payload.data_plantio_inicio, "01/10/2025");
        assert_eq!(payload.data_plantio_fim, "");
        assert_eq!(payload.densidade_plantio, 65000);
        assert_eq!(payload.mm_agua, 0);
        assert_eq!(payload.adubo_calcio, None);
        assert_eq!(payload.praga, None);
    }

    #[test]
    fn edicao_aceita_data_iso_ou_mascarada() {
        let cultivar: Cultivar = serde_json::from_value(serde_json::json!({
            "id": 3,
            "nomeCientifico": "Glycine max",
            "nomePopular": "Soja BRS",
            "tipoPlanta": "SOJA",
            "dataPlantioInicio": "2025-10-01T00:00:00.000Z",
            "dataPlantioFim": "30/11/2025",
            "aduboCalcio": 2.5
        }))
        .unwrap();

        let form = CultivarForm::from_cultivar(&cultivar);
        assert_eq!(form.data_plantio_inicio(), "01/10/2025");
        assert_eq!(form.data_plantio_fim(), "30/11/2025");
        assert_eq!(form.adubo_calcio.raw(), "2.5");
        assert_eq!(form.tipo_planta, TipoPlanta::Soja);
    }
}
