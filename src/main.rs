//src/main.rs

use std::io::Write;

use async_trait::async_trait;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use terra_manager::{
    AppConfig, AppError, AppState,
    common::confirmacao::{Confirmacao, RespostaFixa},
    forms::{LoginForm, RegistroForm},
    models::{cultivar::TipoPlanta, plantio::Plantio},
    screens::{
        CultivaresFonte, DashboardScreen, EstadoDashboard, EstadoResultado, FazendasFonte, ListScreen, PlantiosFonte,
        ResultadoAnaliseScreen,
    },
    workflow::PlantioWorkflow,
};

#[derive(Parser)]
#[command(name = "terra-manager", version, about = "Cliente do TerraManager")]
struct Cli {
    #[command(subcommand)]
    comando: Comando,
}

#[derive(Subcommand)]
enum Comando {
    /// Entra e guarda a sessão
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "TERRA_SENHA", hide_env_values = true)]
        senha: String,
    },
    Logout,
    /// Cria uma conta nova
    Registrar {
        #[arg(long)]
        nome: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "TERRA_SENHA", hide_env_values = true)]
        senha: String,
    },
    /// Clima, cotação e notícias
    Dashboard,
    Fazendas,
    Cultivares {
        #[arg(long)]
        tipo: Option<TipoPlanta>,
    },
    Plantios(PlantiosArgs),
    /// Calagem, adubação e comparativo de um plantio
    Resultado {
        #[command(flatten)]
        lista: PlantiosArgs,
        #[arg(long)]
        plantio: i64,
    },
    /// Cadastra um plantio pelo fluxo completo
    PlantioNovo(PlantioNovoArgs),
    ExcluirPlantio {
        #[command(flatten)]
        lista: PlantiosArgs,
        #[arg(long)]
        plantio: i64,
        /// Não pergunta antes de excluir
        #[arg(long)]
        sim: bool,
    },
}

#[derive(Args)]
struct PlantiosArgs {
    #[arg(long)]
    fazenda: i64,
    #[arg(long)]
    tipo: TipoPlanta,
}

#[derive(Args)]
struct PlantioNovoArgs {
    #[arg(long)]
    tipo: TipoPlanta,
    #[arg(long)]
    fazenda: i64,
    #[arg(long)]
    cultivar: i64,
    /// DD/MM/AAAA
    #[arg(long)]
    data_plantio: String,
    #[arg(long)]
    area: String,
    #[arg(long)]
    densidade: String,
    #[arg(long)]
    observacao: Option<String>,
    /// pH da análise de solo (cria a análise junto com o plantio)
    #[arg(long, requires = "analise_area")]
    analise_ph: Option<String>,
    #[arg(long)]
    analise_area: Option<String>,
}

// --- Confirmação pelo terminal ---

struct PerguntaTerminal;

#[async_trait]
impl Confirmacao for PerguntaTerminal {
    async fn confirmar(&self, titulo: &str, mensagem: &str) -> bool {
        print!("{titulo}: {mensagem} [s/N] ");
        if std::io::stdout().flush().is_err() {
            return false;
        }

        let mut linha = String::new();
        let mut entrada = BufReader::new(tokio::io::stdin());
        match entrada.read_line(&mut linha).await {
            Ok(_) => matches!(linha.trim().to_lowercase().as_str(), "s" | "sim"),
            Err(_) => false,
        }
    }
}

fn imprimir<T: Serialize>(valor: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(valor)?);
    Ok(())
}

async fn buscar_plantio(state: &AppState, lista: &PlantiosArgs, id: i64) -> Result<Plantio, AppError> {
    state
        .plantio_service
        .listar_por_fazenda(lista.fazenda, lista.tipo)
        .await?
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| AppError::Request {
            status: 404,
            message: format!("Plantio {id} não encontrado"),
        })
}

async fn executar(comando: Comando, state: &AppState) -> Result<(), AppError> {
    match comando {
        Comando::Login { email, senha } => {
            let payload = LoginForm { email, senha }.validate()?;
            let sessao = state.auth_service.login(&payload).await?;
            println!("Bem-vindo, {}!", sessao.usuario.nome);
        }
        Comando::Logout => {
            state.auth_service.logout().await?;
            println!("Sessão encerrada.");
        }
        Comando::Registrar { nome, email, senha } => {
            let form = RegistroForm {
                nome,
                email,
                confirmacao: senha.clone(),
                senha,
            };
            match state.auth_service.registrar(&form.validate()?).await? {
                Some(sessao) => println!("Conta criada. Bem-vindo, {}!", sessao.usuario.nome),
                None => println!("Conta criada. Faça login para continuar."),
            }
        }
        Comando::Dashboard => {
            let mut tela = DashboardScreen::new(state.dashboard_service.clone(), state.config.dashboard.clone());
            match tela.carregar().await {
                EstadoDashboard::Pronto(dados) => imprimir(dados)?,
                EstadoDashboard::Erro(alerta) => eprintln!("{}: {}", alerta.titulo, alerta.mensagem),
                EstadoDashboard::Carregando => {}
            }
        }
        Comando::Fazendas => {
            let tela = ListScreen::new(FazendasFonte::new(state.fazenda_service.clone()));
            tela.ao_focar().await;
            mostrar_lista(tela.estado())?;
        }
        Comando::Cultivares { tipo } => {
            let tela = ListScreen::new(CultivaresFonte::new(state.cultivar_service.clone(), tipo));
            tela.ao_focar().await;
            mostrar_lista(tela.estado())?;
        }
        Comando::Plantios(lista) => {
            let fonte = PlantiosFonte::new(state.plantio_service.clone(), lista.fazenda, lista.tipo);
            let tela = ListScreen::new(fonte);
            tela.ao_focar().await;
            mostrar_lista(tela.estado())?;
        }
        Comando::Resultado { lista, plantio } => {
            let plantio = buscar_plantio(state, &lista, plantio).await?;
            let mut tela = ResultadoAnaliseScreen::new(state.analise_solo_service.clone());
            match tela.carregar(&plantio).await {
                EstadoResultado::Pronto(resultado) => imprimir(resultado)?,
                EstadoResultado::SemAnalise => println!("Este plantio não tem análise de solo vinculada."),
                EstadoResultado::AnaliseRemovida => println!("A análise de solo deste plantio foi removida."),
                EstadoResultado::Erro(alerta) => eprintln!("{}: {}", alerta.titulo, alerta.mensagem),
                EstadoResultado::Carregando => {}
            }
        }
        Comando::PlantioNovo(args) => plantio_novo(state, args).await?,
        Comando::ExcluirPlantio { lista, plantio, sim } => {
            let plantio = buscar_plantio(state, &lista, plantio).await?;
            let mut fluxo =
                PlantioWorkflow::editar(state.api.clone(), state.config.politica_compensacao, &plantio, lista.tipo);

            let resposta = if sim {
                fluxo.excluir_plantio(&RespostaFixa(true)).await?
            } else {
                fluxo.excluir_plantio(&PerguntaTerminal).await?
            };
            match resposta {
                Some(_) => println!("Plantio {} excluído.", plantio.id),
                None => println!("Exclusão cancelada."),
            }
        }
    }
    Ok(())
}

async fn plantio_novo(state: &AppState, args: PlantioNovoArgs) -> Result<(), AppError> {
    let mut fluxo = PlantioWorkflow::new(state.api.clone(), state.config.politica_compensacao);

    // 1. Cultura, fazenda e cultivar
    fluxo.selecionar_cultura(args.tipo).await?;
    fluxo.selecionar_fazenda(Some(args.fazenda)).await?;
    fluxo.selecionar_cultivar(args.cultivar)?;

    // 2. Formulário
    let form = fluxo.formulario_mut();
    form.data_plantio.set(&args.data_plantio);
    form.area_plantada.set(args.area);
    form.densidade_planejada.set(args.densidade);
    if let Some(observacao) = args.observacao {
        form.observacao = observacao;
    }

    // 3. Análise de solo opcional, criada só no envio
    if let (Some(ph), Some(area)) = (args.analise_ph, args.analise_area) {
        let modal = fluxo.abrir_analise().await?;
        modal.formulario.ph.set(ph);
        modal.formulario.area_total.set(area);
        fluxo.guardar_rascunho_analise()?;
    }

    // 4. Envio
    let envio = fluxo.submeter().await?;
    match envio.plantio {
        Some(plantio) => imprimir(&plantio)?,
        None => println!("Plantio cadastrado."),
    }
    Ok(())
}

fn mostrar_lista<T: Serialize>(estado: terra_manager::screens::EstadoLista<T>) -> Result<(), AppError> {
    match estado.erro {
        Some(alerta) => {
            eprintln!("{}: {}", alerta.titulo, alerta.mensagem);
            Ok(())
        }
        None => imprimir(&estado.itens),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let state = AppState::new(config).await?;

    if let Err(e) = executar(cli.comando, &state).await {
        let alerta = e.to_alerta("Erro");
        tracing::error!("🔥 {}", alerta.mensagem);
        std::process::exit(1);
    }
    Ok(())
}
