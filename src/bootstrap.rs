// ============================================================================
// BOOTSTRAP - Arranque único de la aplicación
// ============================================================================
// unmounted -> mounted, una sola vez por carga de página:
// crear instancia -> instalar plugins en orden fijo -> localizar el punto de
// montaje -> montar -> guardar la instancia en la variable global.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::app::{App, AppBuilder};
use crate::config::AppConfig;
use crate::dom::HostDocument;
use crate::error::{AppError, AppResult};
use crate::plugins::{Plugin, RouterPlugin, SignaturePadPlugin};
use crate::router::{route_table, Router};
use crate::views::ChunkSource;

// Variable global con la instancia montada
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountState {
    Unmounted,
    Mounted,
}

pub fn mount_state() -> MountState {
    APP.with(|app| {
        if app.borrow().is_some() {
            MountState::Mounted
        } else {
            MountState::Unmounted
        }
    })
}

/// Handle de la instancia montada
pub fn current_app() -> Option<App> {
    APP.with(|app| app.borrow().clone())
}

/// Plugins de la aplicación, en orden de instalación: router, firma
pub fn default_plugins(
    config: &AppConfig,
    chunks: Rc<dyn ChunkSource>,
) -> AppResult<Vec<Box<dyn Plugin>>> {
    let router = Router::new(route_table(chunks)?);
    Ok(vec![
        Box::new(RouterPlugin::new(router)),
        Box::new(SignaturePadPlugin::default()),
    ])
}

/// Monta la aplicación. Cualquier fallo es fatal y deja la página sin montar.
///
/// Llamarla una segunda vez no está soportado: devuelve `AlreadyMounted`
/// sin tocar el documento.
pub fn bootstrap<D: HostDocument>(
    config: &AppConfig,
    document: &D,
    plugins: &[Box<dyn Plugin>],
) -> AppResult<App> {
    if mount_state() == MountState::Mounted {
        return Err(AppError::AlreadyMounted);
    }

    let mut builder = AppBuilder::new(config.clone());
    for plugin in plugins {
        builder.use_plugin(plugin.as_ref())?;
    }

    let app = builder.mount(document)?;
    APP.with(|slot| *slot.borrow_mut() = Some(app.clone()));

    log::info!(
        "✅ [BOOT] Aplicación montada en #{} (plugins: {})",
        config.mount_point_id,
        app.plugins().join(", ")
    );
    Ok(app)
}
