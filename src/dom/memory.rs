// ============================================================================
// MEMORY DOM - Documento en memoria para tests nativos
// ============================================================================

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use super::{HostDocument, MountElement};
use crate::error::AppResult;

#[derive(Default)]
pub struct MemoryElement {
    html: RefCell<String>,
    attributes: RefCell<BTreeMap<String, String>>,
    writes: RefCell<usize>,
}

impl MemoryElement {
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    /// Número de veces que se ha escrito markup en el elemento
    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl MountElement for MemoryElement {
    fn set_inner_html(&self, html: &str) {
        *self.html.borrow_mut() = html.to_string();
        *self.writes.borrow_mut() += 1;
    }

    fn inner_html(&self) -> String {
        self.html.borrow().clone()
    }

    fn set_attribute(&self, name: &str, value: &str) -> AppResult<()> {
        self.attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryDocument {
    elements: HashMap<String, Rc<MemoryElement>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Documento con un único elemento vacío
    pub fn with_element(id: &str) -> Self {
        let mut doc = Self::new();
        doc.elements
            .insert(id.to_string(), Rc::new(MemoryElement::default()));
        doc
    }

    pub fn element(&self, id: &str) -> Option<Rc<MemoryElement>> {
        self.elements.get(id).cloned()
    }
}

impl HostDocument for MemoryDocument {
    fn element_by_id(&self, id: &str) -> Option<Rc<dyn MountElement>> {
        self.elements
            .get(id)
            .map(|el| Rc::clone(el) as Rc<dyn MountElement>)
    }
}
