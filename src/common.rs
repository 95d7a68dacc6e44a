pub mod confirmacao;
pub mod dates;
pub mod error;

pub use confirmacao::{Confirmacao, RespostaFixa};
pub use error::{Alerta, AppError};
