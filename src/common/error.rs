// src/common/error.rs

use std::borrow::Cow;

use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

// Taxonomia de erros do cliente. Toda tela converte estes erros em um `Alerta`.
#[derive(Debug, Error)]
pub enum AppError {
    // Token ausente ou expirado: o usuário precisa entrar de novo.
    #[error("Sessão expirada. Faça login novamente.")]
    Authentication,

    // Resposta não-2xx do backend. A mensagem vem do corpo quando existe.
    #[error("{message}")]
    Request { status: u16, message: String },

    // Falha de transporte (host inacessível, conexão recusada...)
    #[error("Não foi possível conectar ao servidor: {0}")]
    Network(String),

    // Validação local dos formulários, antes de qualquer chamada de rede.
    #[error("Um ou mais campos são inválidos.")]
    Validation(#[from] ValidationErrors),

    #[error("Resposta inesperada do servidor: {0}")]
    Decode(String),

    #[error("Falha no armazenamento local: {0}")]
    Storage(String),

    // Ação pedida fora da etapa em que ela existe (ex.: excluir um plantio ainda não salvo)
    #[error("Operação indisponível: {0}")]
    InvalidState(&'static str),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl AppError {
    /// Erro de validação para um único campo com código e mensagem próprios.
    pub fn campo_invalido(campo: &'static str, codigo: &'static str, mensagem: &'static str) -> Self {
        let mut erros = ValidationErrors::new();
        erros.add(campo, erro_de_campo(codigo, mensagem));
        AppError::Validation(erros)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Request { status: 404, .. })
    }

    /// Nomes dos campos rejeitados, em ordem alfabética.
    pub fn campos_invalidos(&self) -> Vec<String> {
        match self {
            AppError::Validation(erros) => {
                let mut campos: Vec<String> = erros
                    .field_errors()
                    .keys()
                    .map(|campo| campo.to_string())
                    .collect();
                campos.sort();
                campos
            }
            _ => Vec::new(),
        }
    }

    // Equivalente ao `Alert.alert(titulo, mensagem)` das telas.
    pub fn to_alerta(&self, titulo: &str) -> Alerta {
        let mensagem = match self {
            AppError::Validation(erros) => {
                let mut detalhes: Vec<String> = erros
                    .field_errors()
                    .iter()
                    .map(|(campo, lista)| {
                        let mensagens: Vec<String> = lista
                            .iter()
                            .map(|e| {
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            })
                            .collect();
                        format!("{}: {}", campo, mensagens.join(", "))
                    })
                    .collect();
                detalhes.sort();
                format!("{} {}", self, detalhes.join("; "))
            }
            outro => outro.to_string(),
        };

        Alerta {
            titulo: titulo.to_string(),
            mensagem,
        }
    }
}

pub(crate) fn erro_de_campo(codigo: &'static str, mensagem: &'static str) -> ValidationError {
    let mut erro = ValidationError::new(codigo);
    erro.message = Some(Cow::Borrowed(mensagem));
    erro
}

// Mensagem bloqueante exibida ao usuário.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alerta {
    pub titulo: String,
    pub mensagem: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alerta_de_validacao_lista_os_campos() {
        let mut erros = ValidationErrors::new();
        erros.add("dataPlantio", erro_de_campo("required", "Campo obrigatório."));
        erros.add("areaPlantada", erro_de_campo("required", "Campo obrigatório."));
        let err = AppError::Validation(erros);

        assert_eq!(err.campos_invalidos(), vec!["areaPlantada", "dataPlantio"]);
        let alerta = err.to_alerta("Erro");
        assert_eq!(alerta.titulo, "Erro");
        assert!(alerta.mensagem.starts_with("Um ou mais campos são inválidos."));
        assert!(alerta.mensagem.contains("areaPlantada: Campo obrigatório."));
    }

    #[test]
    fn alerta_de_requisicao_repete_a_mensagem_do_servidor() {
        let err = AppError::Request {
            status: 409,
            message: "Plantio duplicado".to_string(),
        };
        assert_eq!(err.to_alerta("Erro ao Salvar").mensagem, "Plantio duplicado");
        assert!(!err.is_not_found());
    }
}
