// src/lib.rs

pub mod common;
pub mod config;
pub mod forms;
pub mod models;
pub mod screens;
pub mod services;
pub mod session;
pub mod workflow;

pub use common::error::AppError;
pub use config::{AppConfig, AppState};
