// ============================================================================
// ROUTES - Tabla de rutas de la aplicación
// ============================================================================
// home se enlaza directamente; el resto se descarga al visitarse por primera
// vez, cada una desde su propio chunk.
// ============================================================================

use std::rc::Rc;

use super::{RouteEntry, RouteTable};
use crate::error::AppResult;
use crate::views::home::HOME;
use crate::views::{home_view, ChunkSource, LazyView};

pub const EMPLOYEES: &str = "employees";
pub const TEMPLATES: &str = "templates";
pub const CONTRACTS: &str = "contracts";
pub const ABOUT: &str = "about";

pub fn route_table(chunks: Rc<dyn ChunkSource>) -> AppResult<RouteTable> {
    RouteTable::new(vec![
        RouteEntry::eager(HOME, "/", home_view()),
        RouteEntry::deferred(
            EMPLOYEES,
            "/employees",
            LazyView::from_chunk(EMPLOYEES, chunks.clone()),
        ),
        RouteEntry::deferred(
            TEMPLATES,
            "/templates",
            LazyView::from_chunk(TEMPLATES, chunks.clone()),
        ),
        RouteEntry::deferred(
            CONTRACTS,
            "/contracts",
            LazyView::from_chunk(CONTRACTS, chunks.clone()),
        ),
        RouteEntry::deferred(ABOUT, "/about", LazyView::from_chunk(ABOUT, chunks)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::MemoryChunks;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_valid() {
        let table = route_table(Rc::new(MemoryChunks::new())).unwrap();
        assert_eq!(table.len(), 5);

        let names: HashSet<_> = table.entries().iter().map(|e| e.name).collect();
        let paths: HashSet<_> = table.entries().iter().map(|e| e.path).collect();
        assert_eq!(names.len(), table.len());
        assert_eq!(paths.len(), table.len());
    }

    #[test]
    fn test_only_home_is_eager() {
        let table = route_table(Rc::new(MemoryChunks::new())).unwrap();
        for entry in table.entries() {
            assert_eq!(entry.is_deferred(), entry.name != HOME, "{}", entry.name);
        }
    }
}
