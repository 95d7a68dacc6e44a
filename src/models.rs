pub mod analise_solo;
pub mod auth;
pub mod cultivar;
pub mod dashboard;
pub mod fazenda;
pub mod plantio;

use serde::{Deserialize, Deserializer};

// Campo ausente ou `null` no JSON do backend vira o valor padrão
pub(crate) fn nulo_como_padrao<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
