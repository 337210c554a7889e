// ============================================================================
// VIEWS - Vistas de la aplicación y su carga diferida
// ============================================================================
// - home: vista inicial, enlazada directamente (sin fetch)
// - chunks: origen de las vistas diferidas (HTTP en WASM, memoria en tests)
// - loader: LazyView, carga diferida memoizada
// - shell: navegación + outlet del router
// ============================================================================

pub mod chunks;
pub mod home;
pub mod loader;
pub mod shell;

use std::rc::Rc;

pub use chunks::ChunkSource;
#[cfg(test)]
pub use chunks::MemoryChunks;
#[cfg(target_arch = "wasm32")]
pub use chunks::HttpChunks;
pub use home::home_view;
pub use loader::{LazyView, ViewFuture};
pub use shell::render_shell;

/// Vista lista para renderizar: nombre + markup
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    name: &'static str,
    markup: Rc<str>,
}

impl View {
    pub fn new(name: &'static str, markup: impl Into<Rc<str>>) -> Self {
        Self {
            name,
            markup: markup.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Markup envuelto en la sección de la vista
    pub fn render(&self) -> String {
        format!(
            r#"<section class="view view-{}">{}</section>"#,
            self.name, self.markup
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_wraps_markup() {
        let view = View::new("about", "<h1>About</h1>");
        assert_eq!(
            view.render(),
            r#"<section class="view view-about"><h1>About</h1></section>"#
        );
    }
}
