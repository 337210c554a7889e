use std::rc::Rc;

use super::Plugin;
use crate::app::AppBuilder;
use crate::error::AppResult;
use crate::router::Router;

/// Registra el router en la aplicación
pub struct RouterPlugin {
    router: Rc<Router>,
}

impl RouterPlugin {
    pub fn new(router: Router) -> Self {
        Self {
            router: Rc::new(router),
        }
    }
}

impl Plugin for RouterPlugin {
    fn name(&self) -> &'static str {
        "router"
    }

    fn install(&self, app: &mut AppBuilder) -> AppResult<()> {
        app.provide_router(Rc::clone(&self.router))
    }
}
