// src/models/auth.rs

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

// Usuário autenticado, como devolvido pelo backend no login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: i64,
    pub nome: String,
    pub email: String,
    #[serde(default, deserialize_with = "super::nulo_como_padrao")]
    pub role: String,
}

// A sessão ativa: identidade + token bearer
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub usuario: Usuario,
    pub token: String,
}

// O token nunca aparece em logs
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("usuario", &self.usuario)
            .field("token", &"***")
            .finish()
    }
}

// Dados para login
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub senha: String,
}

// Dados para registro de um novo usuário
#[derive(Debug, Clone, Serialize, Validate)]
pub struct RegisterPayload {
    #[validate(length(min = 1, message = "Informe o nome."))]
    pub nome: String,
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub senha: String,
}

// Resposta de autenticação
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(alias = "accessToken", alias = "access_token")]
    pub token: String,
    #[serde(alias = "usuario")]
    pub user: Usuario,
}
