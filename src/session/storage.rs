// src/session/storage.rs

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::common::error::AppError;

/// Armazenamento chave-valor do dispositivo (o equivalente ao AsyncStorage).
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn set_item(&self, key: &str, value: &str) -> Result<(), AppError>;
    async fn remove_item(&self, key: &str) -> Result<(), AppError>;
}

// --- Em memória (testes e execuções sem persistência) ---

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_items<T>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> T) -> Result<T, AppError> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| AppError::Storage("armazenamento em memória indisponível".to_string()))?;
        Ok(f(&mut items))
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        self.with_items(|items| items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.with_items(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    async fn remove_item(&self, key: &str) -> Result<(), AppError> {
        self.with_items(|items| {
            items.remove(key);
        })
    }
}

// --- Em arquivo JSON (persistência entre execuções da CLI) ---

#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    // Serializa o ciclo ler-modificar-gravar
    lock: tokio::sync::Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: tokio::sync::Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, AppError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(conteudo) if conteudo.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(conteudo) => serde_json::from_str(&conteudo).map_err(|e| {
                AppError::Storage(format!("arquivo {} corrompido: {}", self.path.display(), e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    // Grava em um arquivo temporário e renomeia, para nunca deixar o JSON pela metade
    async fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), AppError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir).await?;
        }
        let conteudo = serde_json::to_string_pretty(items)
            .map_err(|e| AppError::Storage(e.to_string()))?;
        let temporario = self.path.with_extension("tmp");
        tokio::fs::write(&temporario, conteudo).await?;
        tokio::fs::rename(&temporario, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_all().await?.remove(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;
        let mut items = self.read_all().await?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items).await
    }

    async fn remove_item(&self, key: &str) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;
        let mut items = self.read_all().await?;
        if items.remove(key).is_some() {
            self.write_all(&items).await?;
        }
        Ok(())
    }
}
