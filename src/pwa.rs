// ============================================================================
// PWA - Registro del service worker
// ============================================================================
// Solo en producción. Un fallo se registra en el log y nunca impide el
// arranque de la aplicación.
// ============================================================================

use crate::config::AppConfig;

pub fn should_register_service_worker(config: &AppConfig) -> bool {
    config.is_production() && !config.service_worker_url.is_empty()
}

#[cfg(target_arch = "wasm32")]
pub fn register_service_worker(config: &AppConfig) {
    use wasm_bindgen_futures::JsFuture;

    if !should_register_service_worker(config) {
        log::debug!("ℹ️ [PWA] Service worker desactivado en {}", config.environment);
        return;
    }

    let container = match web_sys::window().map(|w| w.navigator().service_worker()) {
        Some(container) => container,
        None => {
            log::warn!("⚠️ [PWA] Service workers no disponibles");
            return;
        }
    };

    let url = config.service_worker_url.clone();
    let promise = container.register(&url);
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => log::info!("✅ [PWA] Service worker registrado: {}", url),
            Err(e) => log::error!("❌ [PWA] Error registrando service worker: {:?}", e),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_in_production() {
        let mut config = AppConfig::default();
        assert!(!should_register_service_worker(&config));

        config.environment = "production".to_string();
        assert!(should_register_service_worker(&config));

        config.service_worker_url.clear();
        assert!(!should_register_service_worker(&config));
    }
}
