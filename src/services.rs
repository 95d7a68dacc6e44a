pub mod analise_solo_service;
pub mod api_client;
pub mod auth;
pub mod cultivar_service;
pub mod dashboard_service;
pub mod fazenda_service;
pub mod plantio_service;

pub use analise_solo_service::AnaliseSoloService;
pub use api_client::ApiClient;
pub use auth::AuthService;
pub use cultivar_service::CultivarService;
pub use dashboard_service::DashboardService;
pub use fazenda_service::FazendaService;
pub use plantio_service::PlantioService;
