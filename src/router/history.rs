// ============================================================================
// HASH HISTORY - Navegación gobernada por el fragmento de la URL
// ============================================================================
// `#/employees` -> `/employees`. El navegador no recarga la página al cambiar
// el hash, así que las vistas ya descargadas se conservan entre navegaciones.
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HashHistory;

impl HashHistory {
    /// Ruta de la aplicación a partir de `location.hash`
    pub fn path_from_hash(&self, hash: &str) -> String {
        let raw = hash.strip_prefix('#').unwrap_or(hash);
        if raw.is_empty() {
            "/".to_string()
        } else if raw.starts_with('/') {
            raw.to_string()
        } else {
            format!("/{}", raw)
        }
    }

    /// Enlace para una ruta de la aplicación
    pub fn href(&self, path: &str) -> String {
        format!("#{}", path)
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    use super::HashHistory;
    use crate::error::{AppError, AppResult};

    impl HashHistory {
        /// Ruta correspondiente al hash actual de la ventana
        pub fn current_location(&self) -> String {
            let hash = web_sys::window()
                .and_then(|w| w.location().hash().ok())
                .unwrap_or_default();
            self.path_from_hash(&hash)
        }

        /// Escucha `hashchange`. Listener global: registrar UNA sola vez.
        pub fn listen<F>(self, on_change: F) -> AppResult<()>
        where
            F: Fn(String) + 'static,
        {
            let window = web_sys::window().ok_or_else(|| AppError::Dom("No window".to_string()))?;

            let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                on_change(self.current_location());
            }) as Box<dyn FnMut(web_sys::Event)>);

            window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())
                .map_err(|e| AppError::Dom(format!("{:?}", e)))?;
            closure.forget();
            Ok(())
        }
    }
}
