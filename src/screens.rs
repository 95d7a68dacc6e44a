pub mod dashboard;
pub mod editores;
pub mod fontes;
pub mod list;
pub mod resultado_analise;

pub use dashboard::{DashboardScreen, EstadoDashboard};
pub use editores::{CultivarEditor, FazendaEditor};
pub use fontes::{CultivaresFonte, FazendasFonte, PlantiosFonte};
pub use list::{EstadoLista, FonteLista, ListScreen};
pub use resultado_analise::{EstadoResultado, ResultadoAnaliseScreen};

use crate::models::cultivar::TipoPlanta;

// Para onde a tela manda o usuário depois de uma ação bem-sucedida
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navegacao {
    Voltar,
    // A lista é recarregada ao receber o foco
    ListaPlantios { fazenda_id: i64, cultura: TipoPlanta },
}
