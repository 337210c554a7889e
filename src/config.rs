// ============================================================================
// CONFIGURACIÓN - Variables de entorno en tiempo de compilación
// ============================================================================
// En WASM no existen variables de entorno en runtime: build.rs vuelca el
// archivo .env en el entorno de compilación y aquí se leen con option_env!.
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub mount_point_id: String,
    pub chunk_base_url: String,
    pub service_worker_url: String,
    pub log_level: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            mount_point_id: "app".to_string(),
            chunk_base_url: "/chunks".to_string(),
            service_worker_url: "/service-worker.js".to_string(),
            log_level: "info".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            mount_point_id: option_env!("MOUNT_POINT_ID")
                .map(str::to_string)
                .unwrap_or(defaults.mount_point_id),
            chunk_base_url: option_env!("CHUNK_BASE_URL")
                .map(str::to_string)
                .unwrap_or(defaults.chunk_base_url),
            service_worker_url: option_env!("SERVICE_WORKER_URL")
                .map(str::to_string)
                .unwrap_or(defaults.service_worker_url),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log para wasm_logger (info si el valor no es válido)
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.mount_point_id, "app");
        assert!(!config.is_production());
    }

    #[test]
    fn test_log_level_fallback() {
        let mut config = AppConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);

        config.log_level = "verbose".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_serde_roundtrip_keeps_mount_point() {
        let json = serde_json::to_value(AppConfig::default()).unwrap();
        assert_eq!(json["mount_point_id"], "app");

        let parsed: AppConfig = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }
}
