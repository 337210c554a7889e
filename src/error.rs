// ============================================================================
// ERRORES - Taxonomía de fallos de arranque, plugins y carga de vistas
// ============================================================================

use thiserror::Error;

/// Errores de la aplicación.
///
/// `Clone` es necesario porque los resultados de carga de vistas diferidas
/// se comparten entre varias navegaciones concurrentes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("mount point #{0} not found in document")]
    MountPointNotFound(String),

    #[error("plugin '{plugin}' failed to register: {reason}")]
    PluginRegistration { plugin: String, reason: String },

    #[error("view '{route}' failed to load: {reason}")]
    ViewLoad { route: String, reason: String },

    #[error("invalid route table: {0}")]
    InvalidRouteTable(String),

    #[error("application already mounted")]
    AlreadyMounted,

    #[error("dom error: {0}")]
    Dom(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn plugin(plugin: &str, reason: impl Into<String>) -> Self {
        Self::PluginRegistration {
            plugin: plugin.to_string(),
            reason: reason.into(),
        }
    }

    pub fn view_load(route: &str, reason: impl Into<String>) -> Self {
        Self::ViewLoad {
            route: route.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<AppError> for wasm_bindgen::JsValue {
    fn from(err: AppError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::MountPointNotFound("app".to_string());
        assert_eq!(err.to_string(), "mount point #app not found in document");

        let err = AppError::view_load("employees", "HTTP 404");
        assert_eq!(err.to_string(), "view 'employees' failed to load: HTTP 404");
    }
}
