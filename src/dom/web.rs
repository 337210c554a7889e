// ============================================================================
// WEB DOM - Implementación sobre web_sys
// ============================================================================

use std::rc::Rc;

use web_sys::{Document, Element};

use super::{HostDocument, MountElement};
use crate::error::{AppError, AppResult};

pub struct WebElement(Element);

impl MountElement for WebElement {
    fn set_inner_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn inner_html(&self) -> String {
        self.0.inner_html()
    }

    fn set_attribute(&self, name: &str, value: &str) -> AppResult<()> {
        self.0
            .set_attribute(name, value)
            .map_err(|e| AppError::Dom(format!("{:?}", e)))
    }
}

pub struct WebDocument(Document);

impl WebDocument {
    /// Documento de la ventana actual
    pub fn current() -> AppResult<Self> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(Self)
            .ok_or_else(|| AppError::Dom("No document".to_string()))
    }
}

impl HostDocument for WebDocument {
    fn element_by_id(&self, id: &str) -> Option<Rc<dyn MountElement>> {
        self.0
            .get_element_by_id(id)
            .map(|el| Rc::new(WebElement(el)) as Rc<dyn MountElement>)
    }
}
