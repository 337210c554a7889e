// ============================================================================
// DOM MODULE - Acceso al documento anfitrión
// ============================================================================
// La aplicación solo necesita dos cosas del documento: localizar el punto de
// montaje por id y escribir markup en él. En WASM se usa web_sys; los tests
// nativos usan un documento en memoria.
// ============================================================================

#[cfg(test)]
pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

use std::rc::Rc;

use crate::error::AppResult;

#[cfg(test)]
pub use memory::{MemoryDocument, MemoryElement};
#[cfg(target_arch = "wasm32")]
pub use web::{WebDocument, WebElement};

/// Elemento donde la aplicación renderiza su salida
pub trait MountElement {
    fn set_inner_html(&self, html: &str);
    fn inner_html(&self) -> String;
    fn set_attribute(&self, name: &str, value: &str) -> AppResult<()>;
}

/// Documento que contiene el punto de montaje
pub trait HostDocument {
    fn element_by_id(&self, id: &str) -> Option<Rc<dyn MountElement>>;
}
