// ============================================================================
// LAZY VIEW - Carga diferida memoizada
// ============================================================================
// Estados: Idle -> Pending (future compartido) -> Ready
// - La primera carga invoca el loader una sola vez.
// - Las cargas concurrentes esperan el mismo future en vuelo.
// - Un éxito queda en caché; un fallo vuelve a Idle y la siguiente
//   navegación reintenta.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};

use super::{ChunkSource, View};
use crate::error::AppResult;

pub type ViewFuture = LocalBoxFuture<'static, AppResult<View>>;

enum Slot {
    Idle,
    Pending(Shared<ViewFuture>),
    Ready(View),
}

pub struct LazyView {
    name: &'static str,
    loader: Box<dyn Fn() -> ViewFuture>,
    slot: RefCell<Slot>,
    invocations: Cell<usize>,
}

impl LazyView {
    pub fn new<F>(name: &'static str, loader: F) -> Self
    where
        F: Fn() -> ViewFuture + 'static,
    {
        Self {
            name,
            loader: Box::new(loader),
            slot: RefCell::new(Slot::Idle),
            invocations: Cell::new(0),
        }
    }

    /// Vista cuyo markup se descarga del chunk con el mismo nombre
    pub fn from_chunk(name: &'static str, source: Rc<dyn ChunkSource>) -> Self {
        Self::new(name, move || {
            let fetch = source.fetch(name);
            async move { fetch.await.map(|markup| View::new(name, markup)) }.boxed_local()
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Número de veces que se ha invocado el loader
    pub fn invocations(&self) -> usize {
        self.invocations.get()
    }

    pub fn is_loaded(&self) -> bool {
        matches!(*self.slot.borrow(), Slot::Ready(_))
    }

    pub async fn load(&self) -> AppResult<View> {
        let pending = {
            let mut slot = self.slot.borrow_mut();
            match &*slot {
                Slot::Ready(view) => return Ok(view.clone()),
                Slot::Pending(pending) => pending.clone(),
                Slot::Idle => {
                    self.invocations.set(self.invocations.get() + 1);
                    log::debug!("📦 [LOADER] Cargando vista '{}'", self.name);
                    let pending = (self.loader)().shared();
                    *slot = Slot::Pending(pending.clone());
                    pending
                }
            }
        };

        let result = pending.clone().await;

        let mut slot = self.slot.borrow_mut();
        // Solo el future que sigue en el slot puede cambiar su estado
        let current = matches!(&*slot, Slot::Pending(p) if Shared::ptr_eq(p, &pending));
        if current {
            match &result {
                Ok(view) => *slot = Slot::Ready(view.clone()),
                Err(e) => {
                    log::warn!("⚠️ [LOADER] Falló la carga de '{}': {}", self.name, e);
                    *slot = Slot::Idle;
                }
            }
        }
        result
    }
}
