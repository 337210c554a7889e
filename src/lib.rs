// ============================================================================
// CONTRATOS PWA - Shell de la aplicación (Rust + WASM)
// ============================================================================
// - bootstrap: crea la instancia, instala plugins (router, firma) y monta
// - router: tabla de rutas, navegación por hash, vistas diferidas
// - views: vista inicial, chunks descargables y carga memoizada
// - plugins: router y widget de firma
// - dom: acceso al documento (web_sys / memoria)
// ============================================================================

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod dom;
pub mod error;
pub mod plugins;
pub mod pwa;
pub mod router;
pub mod views;

pub use app::{App, AppBuilder};
pub use bootstrap::{bootstrap, current_app, default_plugins, mount_state, MountState};
pub use config::{AppConfig, CONFIG};
pub use error::{AppError, AppResult};

#[cfg(target_arch = "wasm32")]
mod entry {
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::app::App;
    use crate::bootstrap::{bootstrap, default_plugins};
    use crate::config::CONFIG;
    use crate::dom::WebDocument;
    use crate::pwa::register_service_worker;
    use crate::views::HttpChunks;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        // Inicializar panic hook para mejor debugging
        console_error_panic_hook::set_once();

        if CONFIG.enable_logging {
            wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
        }
        log::info!("🚀 [BOOT] Contratos PWA arrancando...");
        log::debug!(
            "⚙️ [BOOT] Config: {}",
            serde_json::to_string(&*CONFIG).unwrap_or_default()
        );

        register_service_worker(&CONFIG);

        let document = WebDocument::current()?;
        let chunks = Rc::new(HttpChunks::new(&CONFIG.chunk_base_url));
        let plugins = default_plugins(&CONFIG, chunks)?;
        let app = bootstrap(&CONFIG, &document, &plugins)?;

        if let Some(router) = app.router() {
            let history = router.history();
            // Listener global: solo se registra aquí, una vez
            let handle = app.clone();
            history.listen(move |path| navigate(handle.clone(), path))?;
            navigate(app.clone(), history.current_location());
        }

        Ok(())
    }

    fn navigate(app: App, path: String) {
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = app.navigate(&path).await {
                log::error!("❌ [ROUTER] Error navegando a '{}': {}", path, e);
            }
        });
    }
}
