// ============================================================================
// ROUTER - Resolución de rutas y navegación
// ============================================================================
// - Una ruta diferida se resuelve ANTES de confirmar la navegación: la vista
//   anterior sigue visible hasta entonces.
// - Si la carga falla, la navegación se aborta y la vista anterior se queda.
// - Cada navegación toma un ticket; una resolución que ya no es la última
//   se descarta (Superseded).
// ============================================================================

pub mod history;
pub mod routes;
pub mod table;

use std::cell::Cell;

pub use history::HashHistory;
pub use routes::route_table;
pub use table::{normalize_path, RouteEntry, RouteTable, ViewSource};

use crate::error::AppResult;
use crate::views::shell::label_for;
use crate::views::View;

/// Resultado de una navegación
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    /// La vista de la ruta debe mostrarse
    Displayed { route: &'static str, view: View },
    /// Ninguna ruta coincide; el outlet queda vacío
    NotFound(String),
    /// Otra navegación posterior ha tomado el control
    Superseded,
}

pub struct Router {
    history: HashHistory,
    table: RouteTable,
    ticket: Cell<u64>,
    current: Cell<Option<&'static str>>,
}

impl Router {
    pub fn new(table: RouteTable) -> Self {
        Self {
            history: HashHistory,
            table,
            ticket: Cell::new(0),
            current: Cell::new(None),
        }
    }

    pub fn history(&self) -> HashHistory {
        self.history
    }

    /// Nombre de la última ruta confirmada
    pub fn current_route(&self) -> Option<&'static str> {
        self.current.get()
    }

    pub fn resolve(&self, path: &str) -> Option<&RouteEntry> {
        self.table.by_path(path)
    }

    /// Enlace a una ruta por nombre
    pub fn href_for(&self, name: &str) -> Option<String> {
        self.table.by_name(name).map(|e| self.history.href(e.path))
    }

    /// Enlaces (etiqueta, href) de todas las rutas, en orden de declaración
    pub fn links(&self) -> Vec<(String, String)> {
        self.table
            .entries()
            .iter()
            .map(|e| (label_for(e.name), self.history.href(e.path)))
            .collect()
    }

    pub async fn navigate(&self, path: &str) -> AppResult<Navigation> {
        let ticket = self.ticket.get() + 1;
        self.ticket.set(ticket);

        let entry = match self.resolve(path) {
            Some(entry) => entry,
            None => {
                log::warn!("⚠️ [ROUTER] Ninguna ruta coincide con '{}'", path);
                self.current.set(None);
                return Ok(Navigation::NotFound(path.to_string()));
            }
        };

        let result = entry.load().await;

        if self.ticket.get() != ticket {
            log::debug!("⏭️ [ROUTER] Navegación a '{}' reemplazada", path);
            return Ok(Navigation::Superseded);
        }

        let view = result?;
        self.current.set(Some(entry.name));
        log::info!("🧭 [ROUTER] {} -> {}", path, entry.name);
        Ok(Navigation::Displayed {
            route: entry.name,
            view,
        })
    }
}
