// tests/common/mod.rs
//
// Backend falso em processo: registra cada requisição e responde como a API do TerraManager.

#![allow(dead_code)]

use std::{
    collections::{BTreeMap, HashMap, VecDeque},
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use terra_manager::{
    models::auth::Usuario,
    services::ApiClient,
    session::{MemoryStorage, SessionStore},
};

pub const TOKEN: &str = "tok-123";

#[derive(Debug, Clone)]
pub struct Requisicao {
    pub metodo: String,
    pub caminho: String,
    pub query: Option<String>,
    pub auth: Option<String>,
    pub corpo: Option<Value>,
}

#[derive(Default)]
struct Estado {
    requisicoes: Vec<Requisicao>,
    // (método, caminho) -> resposta forçada
    falhas: HashMap<(String, String), (u16, Value)>,
    // caminho -> atrasos (ms) das próximas chamadas
    atrasos: HashMap<String, VecDeque<u64>>,
    proximo_id: i64,
    analises: BTreeMap<i64, Value>,
    plantios: BTreeMap<i64, Value>,
}

type Compartilhado = Arc<Mutex<Estado>>;

pub struct MockBackend {
    pub base_url: String,
    estado: Compartilhado,
}

impl MockBackend {
    pub async fn iniciar() -> Self {
        let estado: Compartilhado = Arc::new(Mutex::new(Estado {
            proximo_id: 100,
            ..Default::default()
        }));

        let app = Router::new().fallback(responder).with_state(estado.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            estado,
        }
    }

    pub fn requisicoes(&self) -> Vec<Requisicao> {
        self.estado.lock().unwrap().requisicoes.clone()
    }

    pub fn requisicoes_para(&self, metodo: &str, caminho: &str) -> Vec<Requisicao> {
        self.requisicoes()
            .into_iter()
            .filter(|r| r.metodo == metodo && r.caminho == caminho)
            .collect()
    }

    pub fn falhar(&self, metodo: &str, caminho: &str, status: u16, corpo: Value) {
        self.estado
            .lock()
            .unwrap()
            .falhas
            .insert((metodo.to_string(), caminho.to_string()), (status, corpo));
    }

    pub fn limpar_falhas(&self) {
        self.estado.lock().unwrap().falhas.clear();
    }

    pub fn atrasar(&self, caminho: &str, ms: u64) {
        self.estado
            .lock()
            .unwrap()
            .atrasos
            .entry(caminho.to_string())
            .or_default()
            .push_back(ms);
    }

    pub fn analise(&self, id: i64) -> Option<Value> {
        self.estado.lock().unwrap().analises.get(&id).cloned()
    }

    pub fn total_analises(&self) -> usize {
        self.estado.lock().unwrap().analises.len()
    }

    pub fn plantio(&self, id: i64) -> Option<Value> {
        self.estado.lock().unwrap().plantios.get(&id).cloned()
    }

    pub fn inserir_analise(&self, id: i64, corpo: Value) {
        let mut corpo = corpo;
        corpo["id"] = json!(id);
        self.estado.lock().unwrap().analises.insert(id, corpo);
    }

    pub fn inserir_plantio(&self, id: i64, corpo: Value) {
        let mut corpo = corpo;
        corpo["id"] = json!(id);
        self.estado.lock().unwrap().plantios.insert(id, corpo);
    }

    // Cliente já autenticado com `TOKEN`
    pub async fn cliente(&self) -> ApiClient {
        let session = SessionStore::new(Arc::new(MemoryStorage::new()));
        session.login(usuario(), TOKEN.to_string()).await.unwrap();
        ApiClient::new(self.base_url.clone(), session).unwrap()
    }

    pub fn cliente_anonimo(&self) -> ApiClient {
        let session = SessionStore::new(Arc::new(MemoryStorage::new()));
        ApiClient::new(self.base_url.clone(), session).unwrap()
    }
}

pub fn usuario() -> Usuario {
    Usuario {
        id: 1,
        nome: "Ana Souza".to_string(),
        email: "ana@fazenda.com".to_string(),
        role: "PRODUTOR".to_string(),
    }
}

pub fn plantio_salvo(id: i64, id_analise_solo: Option<i64>) -> Value {
    json!({
        "id": id,
        "idFazenda": 1,
        "idCultivar": 3,
        "idAnaliseSolo": id_analise_solo,
        "dataPlantio": "2025-03-15T00:00:00.000Z",
        "areaPlantada": 10.5,
        "densidadePlanejada": 300000,
        "statusPlantio": "PLANEJADO",
        "cultivar": { "id": 3, "nomePopular": "Soja BRS 284" }
    })
}

pub fn analise_salva() -> Value {
    json!({ "ph": 5.4, "areaTotal": 20, "hAl": 2.8, "ctc": 7.5, "idFazenda": 1 })
}

// --- Rotas ---

async fn responder(
    State(estado): State<Compartilhado>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    corpo: Bytes,
) -> Response {
    let caminho = uri.path().to_string();
    let corpo: Option<Value> = serde_json::from_slice(&corpo).ok();

    let (atraso, resposta) = {
        let mut estado = estado.lock().unwrap();
        estado.requisicoes.push(Requisicao {
            metodo: method.to_string(),
            caminho: caminho.clone(),
            query: uri.query().map(str::to_string),
            auth: headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            corpo: corpo.clone(),
        });

        let atraso = estado
            .atrasos
            .get_mut(&caminho)
            .and_then(VecDeque::pop_front)
            .unwrap_or(0);

        let forcada = estado
            .falhas
            .get(&(method.to_string(), caminho.clone()))
            .cloned();

        let resposta = match forcada {
            Some((status, corpo)) => (StatusCode::from_u16(status).unwrap(), Some(corpo)),
            None => rotear(&mut estado, &method, &caminho, corpo),
        };
        (atraso, resposta)
    };

    if atraso > 0 {
        tokio::time::sleep(Duration::from_millis(atraso)).await;
    }

    match resposta {
        (status, Some(corpo)) => (status, Json(corpo)).into_response(),
        (status, None) => status.into_response(),
    }
}

fn nao_encontrado(o_que: &str) -> (StatusCode, Option<Value>) {
    (
        StatusCode::NOT_FOUND,
        Some(json!({ "message": format!("{o_que} não encontrado(a)") })),
    )
}

fn rotear(estado: &mut Estado, method: &Method, caminho: &str, corpo: Option<Value>) -> (StatusCode, Option<Value>) {
    let partes: Vec<&str> = caminho.trim_matches('/').split('/').collect();
    let id = |i: usize| partes.get(i).and_then(|p| p.parse::<i64>().ok());

    match (method.as_str(), partes.as_slice()) {
        // --- Auth ---
        ("POST", ["auth", "login"]) => (
            StatusCode::OK,
            Some(json!({ "token": TOKEN, "user": usuario() })),
        ),
        ("POST", ["auth", "register"]) => (StatusCode::CREATED, Some(json!({ "message": "ok" }))),

        // --- Fazendas e cultivares ---
        ("GET", ["fazenda", "lista"]) => (
            StatusCode::OK,
            Some(json!([
                { "id": 1, "nome": "Fazenda Santa Rita", "areaTotal": 120.5, "uf": "MG" },
                { "id": 2, "nome": "Sítio Boa Vista", "areaTotal": 33, "uf": "MG" }
            ])),
        ),
        ("POST", ["fazenda"]) => {
            estado.proximo_id += 1;
            let mut fazenda = corpo.unwrap_or_else(|| json!({}));
            fazenda["id"] = json!(estado.proximo_id);
            (StatusCode::CREATED, Some(fazenda))
        }
        ("PUT", ["fazenda", _]) | ("PUT", ["cultivar", _]) => {
            let mut atualizado = corpo.unwrap_or_else(|| json!({}));
            atualizado["id"] = json!(id(1));
            (StatusCode::OK, Some(atualizado))
        }
        ("DELETE", ["fazenda", _]) | ("DELETE", ["cultivar", _]) => (StatusCode::NO_CONTENT, None),
        ("GET", ["cultivar", "lista"]) => (
            StatusCode::OK,
            Some(json!({ "data": [
                { "id": 3, "nomeCientifico": "Glycine max", "nomePopular": "Soja BRS 284", "tipoPlanta": "SOJA" },
                { "id": 4, "nomeCientifico": "Zea mays", "nomePopular": "Milho AG 1051", "tipoPlanta": "MILHO" },
                { "id": 5, "nomeCientifico": "Glycine max", "nomePopular": "Soja M 6410", "tipoPlanta": "soja" }
            ]})),
        ),
        ("POST", ["cultivar"]) => {
            estado.proximo_id += 1;
            let mut cultivar = corpo.unwrap_or_else(|| json!({}));
            cultivar["id"] = json!(estado.proximo_id);
            (StatusCode::CREATED, Some(cultivar))
        }

        // --- Análise de solo ---
        ("GET", ["analise-solo", "calagem", _]) => (
            StatusCode::OK,
            Some(json!({ "rencomedacaoCalagem": 2.1, "recomendacaoCalagemTotal": 42.0 })),
        ),
        ("GET", ["analise-solo", "adubacao", _]) => (
            StatusCode::OK,
            Some(json!({ "areaHa": 20, "n": 30, "p": 80, "k": 60, "nTotalAreaKg": 600, "pTotalAreaKg": 1600, "kTotalAreaKg": 1200 })),
        ),
        ("GET", ["analise-solo", "comparativo-nutrientes", _]) => (
            StatusCode::OK,
            Some(json!({
                "analiseSolo": { "ph": 5.4, "n": 10, "p": 12, "k": 0.2 },
                "cultivar": { "ph": 6.0, "n": 30, "p": 80, "k": 60, "ca": 2.0, "mg": 1.0 }
            })),
        ),
        ("POST", ["analise-solo"]) => {
            estado.proximo_id += 1;
            let id = estado.proximo_id;
            let mut analise = corpo.unwrap_or_else(|| json!({}));
            analise["id"] = json!(id);
            estado.analises.insert(id, analise.clone());
            (StatusCode::CREATED, Some(analise))
        }
        ("GET", ["analise-solo", _]) => match id(1).and_then(|id| estado.analises.get(&id)) {
            Some(analise) => (StatusCode::OK, Some(analise.clone())),
            None => nao_encontrado("Análise"),
        },
        ("PUT", ["analise-solo", _]) => match id(1) {
            Some(id) if estado.analises.contains_key(&id) => {
                let mut analise = corpo.unwrap_or_else(|| json!({}));
                analise["id"] = json!(id);
                estado.analises.insert(id, analise.clone());
                (StatusCode::OK, Some(analise))
            }
            _ => nao_encontrado("Análise"),
        },
        ("DELETE", ["analise-solo", _]) => match id(1).and_then(|id| estado.analises.remove(&id)) {
            Some(_) => (StatusCode::NO_CONTENT, None),
            None => nao_encontrado("Análise"),
        },

        // --- Plantio ---
        ("GET", ["plantio", "fazenda", _, "tipo-planta", _]) => {
            let fazenda = id(2);
            let lista: Vec<Value> = estado
                .plantios
                .values()
                .filter(|p| p["idFazenda"].as_i64() == fazenda)
                .cloned()
                .collect();
            (StatusCode::OK, Some(Value::Array(lista)))
        }
        ("POST", ["plantio"]) => {
            estado.proximo_id += 1;
            let id = estado.proximo_id;
            let mut plantio = corpo.unwrap_or_else(|| json!({}));
            plantio["id"] = json!(id);
            estado.plantios.insert(id, plantio.clone());
            (StatusCode::CREATED, Some(plantio))
        }
        ("PUT", ["plantio", _]) => match id(1) {
            Some(id) if estado.plantios.contains_key(&id) => {
                let mut plantio = corpo.unwrap_or_else(|| json!({}));
                plantio["id"] = json!(id);
                estado.plantios.insert(id, plantio.clone());
                (StatusCode::OK, Some(plantio))
            }
            _ => nao_encontrado("Plantio"),
        },
        ("DELETE", ["plantio", _]) => match id(1).and_then(|id| estado.plantios.remove(&id)) {
            Some(_) => (StatusCode::NO_CONTENT, None),
            None => nao_encontrado("Plantio"),
        },

        // --- Dashboard ---
        ("GET", ["dashboard", "clima"]) => (
            StatusCode::OK,
            Some(json!({ "previsaoProximosDias": [
                { "data": "2025-03-15", "temperaturaMax": 31.0, "condicao": "Ensolarado" },
                { "data": "2025-03-16", "temperaturaMax": 28.5, "condicao": "Chuva" }
            ]})),
        ),
        ("GET", ["dashboard", "cotacao-bolsa"]) => (
            StatusCode::OK,
            Some(json!({ "precoAtual": 132.4, "simbolo": "SOJA" })),
        ),
        ("GET", ["dashboard", "noticias"]) => (
            StatusCode::OK,
            Some(json!({ "articles": [
                { "titulo": "Safra de soja bate recorde", "url": "https://noticias.agro/1" },
                { "titulo": "Milho safrinha avança", "url": "https://noticias.agro/2", "img": "https://img/2.jpg" }
            ]})),
        ),

        _ => (
            StatusCode::NOT_FOUND,
            Some(json!({ "error": format!("Rota {} {} não existe", method, caminho) })),
        ),
    }
}
