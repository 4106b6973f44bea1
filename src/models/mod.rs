//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema SQLite con las convenciones estándar.

pub mod client;
pub mod company_config;
pub mod delivery_note;
