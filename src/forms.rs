pub mod analise_solo_form;
pub mod auth_form;
pub mod cultivar_form;
pub mod fazenda_form;
pub mod field;
pub mod plantio_form;

pub use analise_solo_form::AnaliseSoloForm;
pub use auth_form::{LoginForm, RegistroForm};
pub use cultivar_form::CultivarForm;
pub use fazenda_form::FazendaForm;
pub use field::{DateField, EmptyPolicy, NumericField};
pub use plantio_form::PlantioForm;
