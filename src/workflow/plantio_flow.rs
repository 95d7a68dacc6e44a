// src/workflow/plantio_flow.rs

use std::str::FromStr;

use crate::{
    common::{confirmacao::Confirmacao, error::AppError},
    forms::plantio_form::PlantioForm,
    models::{
        analise_solo::AnaliseSoloPayload,
        cultivar::{Cultivar, TipoPlanta},
        fazenda::Fazenda,
        plantio::Plantio,
    },
    screens::Navegacao,
    services::{AnaliseSoloService, ApiClient, CultivarService, FazendaService, PlantioService},
    workflow::analise_modal::AnaliseSoloModal,
};

// --- Estados do fluxo ---

#[derive(Debug, Clone, PartialEq)]
pub enum Etapa {
    SelecionarCultura,
    SelecionarFazenda { fazendas: Vec<Fazenda> },
    SelecionarCultivar { cultivares: Vec<Cultivar> },
    PreencherFormulario,
    Concluido,
}

// Como o plantio está ligado a uma análise de solo
#[derive(Debug, Clone, PartialEq)]
pub enum VinculoAnalise {
    Nenhuma,
    Salva { id: i64 },
    // Criada no backend só no envio final
    Rascunho(AnaliseSoloPayload),
}

/// O que fazer com a análise criada no envio quando o plantio falha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoliticaCompensacao {
    /// A análise continua vinculada como salva; um novo envio a reaproveita.
    #[default]
    ManterVinculada,
    /// A análise órfã é excluída e volta a ser rascunho.
    ExcluirOrfa,
}

impl FromStr for PoliticaCompensacao {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "manter" => Ok(PoliticaCompensacao::ManterVinculada),
            "excluir" => Ok(PoliticaCompensacao::ExcluirOrfa),
            outro => Err(format!("Política de compensação desconhecida: {outro}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultadoEnvio {
    // Nem todo backend devolve o plantio salvo
    pub plantio: Option<Plantio>,
    pub navegacao: Navegacao,
}

pub struct PlantioWorkflow {
    fazendas: FazendaService,
    cultivares: CultivarService,
    plantios: PlantioService,
    analises: AnaliseSoloService,
    politica: PoliticaCompensacao,

    etapa: Etapa,
    cultura: Option<TipoPlanta>,
    fazenda_id: Option<i64>,
    cultivar_id: Option<i64>,
    // Presente em modo edição
    plantio_id: Option<i64>,

    formulario: PlantioForm,
    analise: VinculoAnalise,
    modal: Option<AnaliseSoloModal>,
}

impl PlantioWorkflow {
    pub fn new(api: ApiClient, politica: PoliticaCompensacao) -> Self {
        Self {
            fazendas: FazendaService::new(api.clone()),
            cultivares: CultivarService::new(api.clone()),
            plantios: PlantioService::new(api.clone()),
            analises: AnaliseSoloService::new(api),
            politica,
            etapa: Etapa::SelecionarCultura,
            cultura: None,
            fazenda_id: None,
            cultivar_id: None,
            plantio_id: None,
            formulario: PlantioForm::default(),
            analise: VinculoAnalise::Nenhuma,
            modal: None,
        }
    }

    /// Entra direto no formulário, com os dados de um plantio existente.
    pub fn editar(api: ApiClient, politica: PoliticaCompensacao, plantio: &Plantio, cultura: TipoPlanta) -> Self {
        let mut fluxo = Self::new(api, politica);
        fluxo.etapa = Etapa::PreencherFormulario;
        fluxo.cultura = Some(cultura);
        fluxo.fazenda_id = Some(plantio.id_fazenda);
        fluxo.cultivar_id = Some(plantio.id_cultivar);
        fluxo.plantio_id = Some(plantio.id);
        fluxo.formulario = PlantioForm::from_plantio(plantio);
        fluxo.analise = match plantio.id_analise_solo {
            Some(id) => VinculoAnalise::Salva { id },
            None => VinculoAnalise::Nenhuma,
        };
        fluxo
    }

    // --- Leitura do estado ---

    pub fn etapa(&self) -> &Etapa {
        &self.etapa
    }

    pub fn cultura(&self) -> Option<TipoPlanta> {
        self.cultura
    }

    pub fn fazenda_id(&self) -> Option<i64> {
        self.fazenda_id
    }

    pub fn cultivar_id(&self) -> Option<i64> {
        self.cultivar_id
    }

    pub fn is_edicao(&self) -> bool {
        self.plantio_id.is_some()
    }

    pub fn formulario(&self) -> &PlantioForm {
        &self.formulario
    }

    pub fn formulario_mut(&mut self) -> &mut PlantioForm {
        &mut self.formulario
    }

    pub fn vinculo_analise(&self) -> &VinculoAnalise {
        &self.analise
    }

    pub fn id_analise_solo(&self) -> Option<i64> {
        match self.analise {
            VinculoAnalise::Salva { id } => Some(id),
            _ => None,
        }
    }

    pub fn modal(&self) -> Option<&AnaliseSoloModal> {
        self.modal.as_ref()
    }

    pub fn modal_mut(&mut self) -> Option<&mut AnaliseSoloModal> {
        self.modal.as_mut()
    }

    // --- Seleções ---

    pub async fn selecionar_cultura(&mut self, tipo: TipoPlanta) -> Result<(), AppError> {
        if !matches!(self.etapa, Etapa::SelecionarCultura | Etapa::SelecionarFazenda { .. }) {
            return Err(AppError::InvalidState("a cultura já foi escolhida"));
        }

        let fazendas = self.fazendas.listar().await?;
        self.cultura = Some(tipo);
        self.etapa = Etapa::SelecionarFazenda { fazendas };
        Ok(())
    }

    pub async fn selecionar_fazenda(&mut self, fazenda_id: Option<i64>) -> Result<(), AppError> {
        let Etapa::SelecionarFazenda { fazendas } = &self.etapa else {
            return Err(AppError::InvalidState("não há fazenda para escolher agora"));
        };
        let Some(cultura) = self.cultura else {
            return Err(AppError::InvalidState("escolha a cultura primeiro"));
        };

        // 1. Seleção vazia ou fora da lista não chega ao backend
        let Some(id) = fazenda_id else {
            return Err(AppError::campo_invalido("fazenda", "required", "Selecione uma fazenda."));
        };
        if !fazendas.iter().any(|f| f.id == id) {
            return Err(AppError::campo_invalido("fazenda", "invalid_choice", "Fazenda inválida."));
        }

        // 2. Cultivares da cultura escolhida
        let cultivares = self.cultivares.listar_por_tipo(cultura).await?;
        self.fazenda_id = Some(id);
        self.etapa = Etapa::SelecionarCultivar { cultivares };
        Ok(())
    }

    pub fn selecionar_cultivar(&mut self, cultivar_id: i64) -> Result<(), AppError> {
        let Etapa::SelecionarCultivar { cultivares } = &self.etapa else {
            return Err(AppError::InvalidState("não há cultivar para escolher agora"));
        };
        if !cultivares.iter().any(|c| c.id == cultivar_id) {
            return Err(AppError::campo_invalido("cultivar", "invalid_choice", "Cultivar inválido."));
        }

        self.cultivar_id = Some(cultivar_id);
        self.formulario = PlantioForm::default();
        self.analise = VinculoAnalise::Nenhuma;
        self.etapa = Etapa::PreencherFormulario;
        Ok(())
    }

    // --- Sub-fluxo de análise de solo ---

    pub async fn abrir_analise(&mut self) -> Result<&mut AnaliseSoloModal, AppError> {
        self.exigir_formulario()?;

        let modal = match &self.analise {
            // Análise já vinculada: sempre buscada de novo pelo id
            &VinculoAnalise::Salva { id } => match self.analises.buscar(id).await {
                Ok(analise) => AnaliseSoloModal::salva(&analise),
                // Removida por fora: o vínculo morto é descartado
                Err(e) if e.is_not_found() => {
                    tracing::warn!("Análise de solo {} não existe mais, vínculo removido", id);
                    self.analise = VinculoAnalise::Nenhuma;
                    AnaliseSoloModal::nova()
                }
                Err(e) => return Err(e),
            },
            VinculoAnalise::Rascunho(payload) => AnaliseSoloModal::rascunho(payload),
            VinculoAnalise::Nenhuma => AnaliseSoloModal::nova(),
        };

        Ok(self.modal.insert(modal))
    }

    /// Cria ou atualiza a análise na hora e vincula o id devolvido.
    pub async fn salvar_analise(&mut self) -> Result<i64, AppError> {
        let fazenda_id = self.exigir_fazenda()?;
        let modal = self
            .modal
            .as_ref()
            .ok_or(AppError::InvalidState("a análise de solo não está aberta"))?;

        let payload = modal.formulario.to_payload(fazenda_id)?;
        let id = match modal.id() {
            Some(id) => {
                self.analises.atualizar(id, &payload).await?;
                id
            }
            None => self.analises.criar(&payload).await?.id,
        };

        self.analise = VinculoAnalise::Salva { id };
        self.modal = None;
        Ok(id)
    }

    /// Guarda a análise em memória para ser criada no envio do plantio.
    pub fn guardar_rascunho_analise(&mut self) -> Result<(), AppError> {
        let fazenda_id = self.exigir_fazenda()?;
        let modal = self
            .modal
            .as_ref()
            .ok_or(AppError::InvalidState("a análise de solo não está aberta"))?;
        if modal.id().is_some() {
            return Err(AppError::InvalidState("a análise já está salva"));
        }

        let payload = modal.formulario.to_payload(fazenda_id)?;
        self.analise = VinculoAnalise::Rascunho(payload);
        self.modal = None;
        Ok(())
    }

    pub async fn excluir_analise(&mut self) -> Result<(), AppError> {
        if self.modal.is_none() {
            return Err(AppError::InvalidState("a análise de solo não está aberta"));
        }

        if let VinculoAnalise::Salva { id } = self.analise {
            // Em caso de falha, vínculo e modal ficam como estavam
            match self.analises.excluir(id).await {
                Ok(()) => tracing::info!("🧪 Análise de solo {} excluída e desvinculada", id),
                Err(e) if e.is_not_found() => tracing::warn!("Análise de solo {} já havia sido removida", id),
                Err(e) => return Err(e),
            }
        }

        self.analise = VinculoAnalise::Nenhuma;
        self.modal = None;
        Ok(())
    }

    pub fn fechar_analise(&mut self) {
        self.modal = None;
    }

    // --- Envio (saga em dois passos) ---

    pub async fn submeter(&mut self) -> Result<ResultadoEnvio, AppError> {
        self.exigir_formulario()?;
        let (Some(fazenda_id), Some(cultivar_id), Some(cultura)) = (self.fazenda_id, self.cultivar_id, self.cultura)
        else {
            return Err(AppError::InvalidState("fazenda e cultivar precisam estar escolhidos"));
        };

        // 1. Validação e montagem sem rede
        let mut payload = self.formulario.to_payload(fazenda_id, cultivar_id, self.id_analise_solo())?;

        // 2. Rascunho de análise vira registro antes do plantio
        let mut criada_agora = None;
        if let VinculoAnalise::Rascunho(rascunho) = &self.analise {
            let analise = self.analises.criar(rascunho).await?;
            criada_agora = Some((analise.id, rascunho.clone()));
            self.analise = VinculoAnalise::Salva { id: analise.id };
            payload.id_analise_solo = Some(analise.id);
        }

        // 3. Plantio
        let resultado = match self.plantio_id {
            Some(id) => self.plantios.atualizar(id, &payload).await,
            None => self.plantios.criar(&payload).await,
        };

        match resultado {
            Ok(plantio) => {
                tracing::info!(
                    "🌱 Plantio {} na fazenda {}",
                    if self.is_edicao() { "atualizado" } else { "criado" },
                    fazenda_id
                );
                self.etapa = Etapa::Concluido;
                Ok(ResultadoEnvio {
                    plantio,
                    navegacao: Navegacao::ListaPlantios { fazenda_id, cultura },
                })
            }
            Err(err) => {
                // 4. Compensação; o formulário nunca é tocado
                if let Some((id, rascunho)) = criada_agora {
                    self.compensar(id, rascunho).await;
                }
                Err(err)
            }
        }
    }

    async fn compensar(&mut self, id: i64, rascunho: AnaliseSoloPayload) {
        match self.politica {
            PoliticaCompensacao::ManterVinculada => {
                tracing::warn!("Plantio falhou; análise {} mantida vinculada para o próximo envio", id);
            }
            PoliticaCompensacao::ExcluirOrfa => match self.analises.excluir(id).await {
                Ok(()) => {
                    tracing::warn!("Plantio falhou; análise órfã {} excluída", id);
                    self.analise = VinculoAnalise::Rascunho(rascunho);
                }
                Err(e) => {
                    tracing::warn!("Não foi possível excluir a análise órfã {}: {}", id, e);
                }
            },
        }
    }

    /// Exclusão (só em modo edição). `None` quando o usuário desiste.
    pub async fn excluir_plantio(&mut self, confirmacao: &dyn Confirmacao) -> Result<Option<Navegacao>, AppError> {
        let Some(id) = self.plantio_id else {
            return Err(AppError::InvalidState("o plantio ainda não foi salvo"));
        };
        let (Some(fazenda_id), Some(cultura)) = (self.fazenda_id, self.cultura) else {
            return Err(AppError::InvalidState("fazenda e cultura precisam estar escolhidas"));
        };

        if !confirmacao
            .confirmar("Excluir plantio", "Tem certeza que deseja excluir este plantio?")
            .await
        {
            return Ok(None);
        }

        self.plantios.excluir(id).await?;
        tracing::info!("🗑️ Plantio {} excluído", id);
        self.etapa = Etapa::Concluido;
        Ok(Some(Navegacao::ListaPlantios { fazenda_id, cultura }))
    }

    // --- Auxiliares ---

    fn exigir_formulario(&self) -> Result<(), AppError> {
        match self.etapa {
            Etapa::PreencherFormulario => Ok(()),
            _ => Err(AppError::InvalidState("o formulário de plantio não está aberto")),
        }
    }

    fn exigir_fazenda(&self) -> Result<i64, AppError> {
        self.fazenda_id
            .ok_or(AppError::InvalidState("escolha a fazenda primeiro"))
    }
}
