// tests/sessao.rs

mod common;

use std::collections::HashMap;

use terra_manager::{AppConfig, AppState, forms::LoginForm, session::store::TOKEN_KEY};

use common::{MockBackend, TOKEN};

fn config(mock: &MockBackend, caminho: &std::path::Path) -> AppConfig {
    let vars = HashMap::from([
        ("API_BASE_URL".to_string(), mock.base_url.clone()),
        ("TERRA_STORAGE_PATH".to_string(), caminho.display().to_string()),
    ]);
    AppConfig::from_lookup(|chave| vars.get(chave).cloned()).unwrap()
}

#[tokio::test]
async fn sessao_sobrevive_ao_reinicio() {
    let mock = MockBackend::iniciar().await;
    let dir = tempfile::tempdir().unwrap();
    let caminho = dir.path().join("storage.json");

    // Primeira execução: login
    let state = AppState::new(config(&mock, &caminho)).await.unwrap();
    assert!(state.session.current().is_none());
    let payload = LoginForm {
        email: "ana@fazenda.com".to_string(),
        senha: "segredo123".to_string(),
    }
    .validate()
    .unwrap();
    state.auth_service.login(&payload).await.unwrap();

    // Segunda execução: a sessão volta do arquivo e já autentica
    let state = AppState::new(config(&mock, &caminho)).await.unwrap();
    let sessao = state.session.current().unwrap();
    assert_eq!(sessao.usuario.email, "ana@fazenda.com");

    state.fazenda_service.listar().await.unwrap();
    let req = &mock.requisicoes_para("GET", "/fazenda/lista")[0];
    assert_eq!(req.auth.as_deref(), Some(format!("Bearer {TOKEN}").as_str()));

    // Logout apaga do arquivo
    state.auth_service.logout().await.unwrap();
    let conteudo = std::fs::read_to_string(&caminho).unwrap();
    assert!(!conteudo.contains(TOKEN_KEY));

    let state = AppState::new(config(&mock, &caminho)).await.unwrap();
    assert!(state.session.current().is_none());
}
