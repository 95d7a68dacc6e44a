// src/forms/analise_solo_form.rs

use rust_decimal::Decimal;
use validator::ValidationErrors;

use crate::{
    common::error::AppError,
    forms::field::{EmptyPolicy, NumericField},
    models::analise_solo::{AnaliseSolo, AnaliseSoloPayload},
};

// pH e área são obrigatórios; os demais nutrientes vazios vão como 0
#[derive(Debug, Clone, PartialEq)]
pub struct AnaliseSoloForm {
    pub ph: NumericField<Decimal>,
    pub area_total: NumericField<Decimal>,
    pub h_al: NumericField<Decimal>,
    pub sb: NumericField<Decimal>,
    pub ctc: NumericField<Decimal>,
    pub v: NumericField<Decimal>,
    pub m: NumericField<Decimal>,
    pub mo: NumericField<Decimal>,
    pub valor_cultural: NumericField<Decimal>,
    pub prnt: NumericField<Decimal>,
    pub n: NumericField<Decimal>,
    pub p: NumericField<Decimal>,
    pub k: NumericField<Decimal>,
}

impl Default for AnaliseSoloForm {
    fn default() -> Self {
        let zero = || NumericField::new(EmptyPolicy::Zero);
        Self {
            ph: zero(),
            area_total: zero(),
            h_al: zero(),
            sb: zero(),
            ctc: zero(),
            v: zero(),
            m: zero(),
            mo: zero(),
            valor_cultural: zero(),
            prnt: zero(),
            n: zero(),
            p: zero(),
            k: zero(),
        }
    }
}

impl AnaliseSoloForm {
    pub fn from_analise(analise: &AnaliseSolo) -> Self {
        let campo = |valor: Decimal| NumericField::with_value(EmptyPolicy::Zero, Some(valor));
        Self {
            ph: campo(analise.ph),
            area_total: campo(analise.area_total),
            h_al: campo(analise.h_al),
            sb: campo(analise.sb),
            ctc: campo(analise.ctc),
            v: campo(analise.v),
            m: campo(analise.m),
            mo: campo(analise.mo),
            valor_cultural: campo(analise.valor_cultural),
            prnt: campo(analise.prnt),
            n: campo(analise.n),
            p: campo(analise.p),
            k: campo(analise.k),
        }
    }

    // Rascunho guardado pelo fluxo de plantio
    pub fn from_payload(payload: &AnaliseSoloPayload) -> Self {
        let campo = |valor: Decimal| NumericField::with_value(EmptyPolicy::Zero, Some(valor));
        Self {
            ph: campo(payload.ph),
            area_total: campo(payload.area_total),
            h_al: campo(payload.h_al),
            sb: campo(payload.sb),
            ctc: campo(payload.ctc),
            v: campo(payload.v),
            m: campo(payload.m),
            mo: campo(payload.mo),
            valor_cultural: campo(payload.valor_cultural),
            prnt: campo(payload.prnt),
            n: campo(payload.n),
            p: campo(payload.p),
            k: campo(payload.k),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let mut erros = ValidationErrors::new();
        self.ph.exigir("ph", &mut erros);
        self.area_total.exigir("areaTotal", &mut erros);

        if erros.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(erros))
        }
    }

    pub fn to_payload(&self, id_fazenda: i64) -> Result<AnaliseSoloPayload, AppError> {
        self.validate()?;

        let valor = |campo: &NumericField<Decimal>| campo.resolve().unwrap_or_default();
        Ok(AnaliseSoloPayload {
            ph: self.ph.obrigatorio(),
            area_total: self.area_total.obrigatorio(),
            h_al: valor(&self.h_al),
            sb: valor(&self.sb),
            ctc: valor(&self.ctc),
            v: valor(&self.v),
            m: valor(&self.m),
            mo: valor(&self.mo),
            valor_cultural: valor(&self.valor_cultural),
            prnt: valor(&self.prnt),
            n: valor(&self.n),
            p: valor(&self.p),
            k: valor(&self.k),
            id_fazenda,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ph_e_area_sao_obrigatorios() {
        let mut form = AnaliseSoloForm::default();
        form.ph.set("ácido");
        assert_eq!(
            form.to_payload(1).unwrap_err().campos_invalidos(),
            vec!["areaTotal", "ph"]
        );
    }

    #[test]
    fn nutrientes_vazios_ou_invalidos_viram_zero() {
        let mut form = AnaliseSoloForm::default();
        form.ph.set("5,8");
        form.area_total.set("12");
        form.k.set("0,15");
        form.p.set("n/d");

        let payload = form.to_payload(9).unwrap();
        assert_eq!(payload.ph, Decimal::new(58, 1));
        assert_eq!(payload.area_total, Decimal::from(12));
        assert_eq!(payload.k, Decimal::new(15, 2));
        assert_eq!(payload.p, Decimal::ZERO);
        assert_eq!(payload.ctc, Decimal::ZERO);
        assert_eq!(payload.id_fazenda, 9);
    }

    #[test]
    fn rascunho_volta_para_o_formulario() {
        let mut form = AnaliseSoloForm::default();
        form.ph.set("6.1");
        form.area_total.set("30");
        form.mo.set("2,4");

        let payload = form.to_payload(2).unwrap();
        let reaberto = AnaliseSoloForm::from_payload(&payload);
        assert_eq!(reaberto.to_payload(2).unwrap(), payload);
        assert_eq!(reaberto.mo.raw(), "2.4");
    }
}
