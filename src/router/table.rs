// ============================================================================
// ROUTE TABLE - Tabla declarativa ruta -> vista
// ============================================================================
// Se construye una sola vez al arrancar y no se modifica después.
// Nombres y rutas son únicos; la comparación de rutas ignora mayúsculas,
// la barra final, la query y el fragmento.
// ============================================================================

use std::collections::HashSet;
use std::rc::Rc;

use crate::error::{AppError, AppResult};
use crate::views::{LazyView, View};

/// Estrategia de carga de la vista de una ruta
pub enum ViewSource {
    /// Vista ya disponible
    Eager(View),
    /// Vista descargada la primera vez que se visita la ruta
    Deferred(Rc<LazyView>),
}

pub struct RouteEntry {
    pub name: &'static str,
    pub path: &'static str,
    pub view: ViewSource,
}

impl RouteEntry {
    pub fn eager(name: &'static str, path: &'static str, view: View) -> Self {
        Self {
            name,
            path,
            view: ViewSource::Eager(view),
        }
    }

    pub fn deferred(name: &'static str, path: &'static str, view: LazyView) -> Self {
        Self {
            name,
            path,
            view: ViewSource::Deferred(Rc::new(view)),
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self.view, ViewSource::Deferred(_))
    }

    pub async fn load(&self) -> AppResult<View> {
        match &self.view {
            ViewSource::Eager(view) => Ok(view.clone()),
            ViewSource::Deferred(lazy) => lazy.load().await,
        }
    }
}

/// Forma canónica de una ruta para compararla
pub fn normalize_path(raw: &str) -> String {
    let path = raw.split(&['?', '#'][..]).next().unwrap_or("");
    let path = path.trim_end_matches('/').to_lowercase();
    if path.starts_with('/') {
        path
    } else {
        format!("/{}", path)
    }
}

pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> AppResult<Self> {
        let mut names = HashSet::new();
        let mut paths = HashSet::new();

        for entry in &entries {
            if entry.name.is_empty() {
                return Err(AppError::InvalidRouteTable(format!(
                    "route '{}' has an empty name",
                    entry.path
                )));
            }
            if !entry.path.starts_with('/') {
                return Err(AppError::InvalidRouteTable(format!(
                    "path '{}' must start with '/'",
                    entry.path
                )));
            }
            if !names.insert(entry.name) {
                return Err(AppError::InvalidRouteTable(format!(
                    "duplicate route name '{}'",
                    entry.name
                )));
            }
            if !paths.insert(normalize_path(entry.path)) {
                return Err(AppError::InvalidRouteTable(format!(
                    "duplicate route path '{}'",
                    entry.path
                )));
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn by_path(&self, path: &str) -> Option<&RouteEntry> {
        let wanted = normalize_path(path);
        self.entries
            .iter()
            .find(|e| normalize_path(e.path) == wanted)
    }
}
