pub mod analise_modal;
pub mod plantio_flow;

pub use analise_modal::AnaliseSoloModal;
pub use plantio_flow::{Etapa, PlantioWorkflow, PoliticaCompensacao, ResultadoEnvio, VinculoAnalise};
