// src/screens/list.rs

use std::sync::{
    Mutex, PoisonError,
    atomic::{AtomicU64, Ordering},
};

use async_trait::async_trait;

use crate::common::{
    confirmacao::Confirmacao,
    error::{AppError, Alerta},
};

// De onde uma tela de lista busca e exclui seus itens
#[async_trait]
pub trait FonteLista: Send + Sync {
    type Item: Clone + Send;

    async fn carregar(&self) -> Result<Vec<Self::Item>, AppError>;

    async fn excluir(&self, id: i64) -> Result<(), AppError>;

    // Texto do pedido de confirmação
    fn confirmacao_exclusao(&self) -> (&'static str, &'static str);
}

#[derive(Debug, Clone, PartialEq)]
pub struct EstadoLista<T> {
    pub itens: Vec<T>,
    pub carregando: bool,
    pub erro: Option<Alerta>,
}

impl<T> Default for EstadoLista<T> {
    fn default() -> Self {
        Self {
            itens: Vec::new(),
            carregando: false,
            erro: None,
        }
    }
}

/// Tela de lista com busca a cada foco.
///
/// Cada foco dispara exatamente uma busca. Buscas sobrepostas recebem uma
/// geração; só a resposta da mais recente substitui a lista.
pub struct ListScreen<F: FonteLista> {
    fonte: F,
    geracao: AtomicU64,
    estado: Mutex<EstadoLista<F::Item>>,
}

impl<F: FonteLista> ListScreen<F> {
    pub fn new(fonte: F) -> Self {
        Self {
            fonte,
            geracao: AtomicU64::new(0),
            estado: Mutex::new(EstadoLista::default()),
        }
    }

    pub fn fonte(&self) -> &F {
        &self.fonte
    }

    pub fn estado(&self) -> EstadoLista<F::Item> {
        self.lock().clone()
    }

    pub async fn ao_focar(&self) {
        let minha = self.geracao.fetch_add(1, Ordering::SeqCst) + 1;
        self.lock().carregando = true;

        let resultado = self.fonte.carregar().await;

        let mut estado = self.lock();
        if self.geracao.load(Ordering::SeqCst) != minha {
            tracing::debug!(geracao = minha, "resposta de busca antiga descartada");
            return;
        }

        estado.carregando = false;
        match resultado {
            Ok(itens) => {
                estado.itens = itens;
                estado.erro = None;
            }
            Err(e) => {
                estado.itens.clear();
                estado.erro = Some(e.to_alerta("Erro"));
            }
        }
    }

    /// Pede confirmação, exclui e recarrega a lista, com ou sem sucesso.
    ///
    /// `Ok(false)` quando o usuário desiste.
    pub async fn excluir(&self, id: i64, confirmacao: &dyn Confirmacao) -> Result<bool, AppError> {
        let (titulo, mensagem) = self.fonte.confirmacao_exclusao();
        if !confirmacao.confirmar(titulo, mensagem).await {
            return Ok(false);
        }

        let resultado = self.fonte.excluir(id).await;
        self.ao_focar().await;

        match resultado {
            Ok(()) => Ok(true),
            Err(e) => {
                self.lock().erro = Some(e.to_alerta("Erro ao excluir"));
                Err(e)
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, EstadoLista<F::Item>> {
        self.estado.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    use crate::common::confirmacao::RespostaFixa;

    // Fonte em memória: cada busca devolve o número da chamada
    struct Contador {
        chamadas: AtomicUsize,
        falhar: bool,
    }

    #[async_trait]
    impl FonteLista for Contador {
        type Item = usize;

        async fn carregar(&self) -> Result<Vec<usize>, AppError> {
            let n = self.chamadas.fetch_add(1, Ordering::SeqCst) + 1;
            if self.falhar {
                return Err(AppError::Network("offline".to_string()));
            }
            Ok(vec![n])
        }

        async fn excluir(&self, _id: i64) -> Result<(), AppError> {
            Err(AppError::Request {
                status: 409,
                message: "Fazenda possui plantios".to_string(),
            })
        }

        fn confirmacao_exclusao(&self) -> (&'static str, &'static str) {
            ("Excluir", "Confirma?")
        }
    }

    fn tela(falhar: bool) -> ListScreen<Contador> {
        ListScreen::new(Contador {
            chamadas: AtomicUsize::new(0),
            falhar,
        })
    }

    #[tokio::test]
    async fn cada_foco_substitui_a_lista() {
        let tela = tela(false);
        tela.ao_focar().await;
        tela.ao_focar().await;

        let estado = tela.estado();
        assert_eq!(estado.itens, vec![2]);
        assert!(!estado.carregando);
        assert_eq!(tela.fonte().chamadas.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn falha_limpa_a_lista_e_guarda_alerta() {
        let tela = tela(true);
        tela.lock().itens = vec![99];
        tela.ao_focar().await;

        let estado = tela.estado();
        assert!(estado.itens.is_empty());
        assert!(estado.erro.unwrap().mensagem.contains("offline"));
    }

    #[tokio::test]
    async fn exclusao_recusada_nao_faz_nada() {
        let tela = tela(false);
        assert!(!tela.excluir(1, &RespostaFixa(false)).await.unwrap());
        assert_eq!(tela.fonte().chamadas.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn exclusao_com_falha_ainda_recarrega() {
        let tela = tela(false);
        let erro = tela.excluir(1, &RespostaFixa(true)).await.unwrap_err();

        assert_eq!(erro.to_string(), "Fazenda possui plantios");
        assert_eq!(tela.fonte().chamadas.load(Ordering::SeqCst), 1);
        let estado = tela.estado();
        assert_eq!(estado.itens, vec![1]);
        assert_eq!(estado.erro.unwrap().titulo, "Erro ao excluir");
    }
}
