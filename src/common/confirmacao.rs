// src/common/confirmacao.rs

use async_trait::async_trait;

// Pergunta "Confirmar Exclusão" feita antes de toda exclusão.
#[async_trait]
pub trait Confirmacao: Send + Sync {
    async fn confirmar(&self, titulo: &str, mensagem: &str) -> bool;
}

// Resposta fixa, usada pela linha de comando (`--sim`) e pelos testes.
#[derive(Debug, Clone, Copy)]
pub struct RespostaFixa(pub bool);

#[async_trait]
impl Confirmacao for RespostaFixa {
    async fn confirmar(&self, titulo: &str, _mensagem: &str) -> bool {
        tracing::debug!(titulo, resposta = self.0, "confirmação automática");
        self.0
    }
}
