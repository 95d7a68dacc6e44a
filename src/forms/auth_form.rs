// src/forms/auth_form.rs

use validator::{Validate, ValidationErrors};

use crate::{
    common::error::{AppError, erro_de_campo},
    models::auth::{LoginPayload, RegisterPayload},
};

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub senha: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginPayload, AppError> {
        let payload = LoginPayload {
            email: self.email.trim().to_string(),
            senha: self.senha.clone(),
        };
        payload.validate()?;
        Ok(payload)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegistroForm {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub confirmacao: String,
}

impl RegistroForm {
    pub fn validate(&self) -> Result<RegisterPayload, AppError> {
        let payload = RegisterPayload {
            nome: self.nome.trim().to_string(),
            email: self.email.trim().to_string(),
            senha: self.senha.clone(),
        };

        let mut erros = payload.validate().err().unwrap_or_else(ValidationErrors::new);
        if self.senha != self.confirmacao {
            erros.add("confirmacao", erro_de_campo("mismatch", "As senhas não coincidem."));
        }

        if erros.is_empty() {
            Ok(payload)
        } else {
            Err(AppError::Validation(erros))
        }
    }
}
