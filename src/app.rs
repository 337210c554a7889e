// ============================================================================
// APP - Instancia de la aplicación
// ============================================================================
// AppBuilder: instancia en construcción, recibe los plugins.
// App: instancia montada, dueña del punto de montaje. Se clona barato
// (todo son Rc) para poder mover un handle a los listeners y futures.
// ============================================================================

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::config::AppConfig;
use crate::dom::{HostDocument, MountElement};
use crate::error::{AppError, AppResult};
use crate::plugins::{GlobalComponent, Plugin};
use crate::router::{Navigation, Router};
use crate::views::{render_shell, View};

pub const MOUNTED_ATTRIBUTE: &str = "data-app-mounted";

pub struct AppBuilder {
    config: AppConfig,
    components: BTreeMap<String, GlobalComponent>,
    router: Option<Rc<Router>>,
    plugins: Vec<&'static str>,
}

impl AppBuilder {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            components: BTreeMap::new(),
            router: None,
            plugins: Vec::new(),
        }
    }

    /// Instala un plugin. Instalar el mismo plugin dos veces es un error.
    pub fn use_plugin(&mut self, plugin: &dyn Plugin) -> AppResult<()> {
        let name = plugin.name();
        if self.plugins.contains(&name) {
            return Err(AppError::plugin(name, "already installed"));
        }
        plugin.install(self)?;
        self.plugins.push(name);
        log::debug!("🔌 [BOOT] Plugin '{}' instalado", name);
        Ok(())
    }

    pub fn register_component(&mut self, component: GlobalComponent) -> AppResult<()> {
        if self.components.contains_key(component.tag()) {
            return Err(AppError::plugin(
                component.tag(),
                format!("component <{}> already registered", component.tag()),
            ));
        }
        self.components
            .insert(component.tag().to_string(), component);
        Ok(())
    }

    pub fn provide_router(&mut self, router: Rc<Router>) -> AppResult<()> {
        if self.router.is_some() {
            return Err(AppError::plugin("router", "a router is already provided"));
        }
        self.router = Some(router);
        Ok(())
    }

    /// Localiza el punto de montaje y escribe el shell.
    /// Si el elemento no existe no se toca el documento.
    pub fn mount<D: HostDocument>(self, document: &D) -> AppResult<App> {
        let id = self.config.mount_point_id.clone();
        let root = document
            .element_by_id(&id)
            .ok_or(AppError::MountPointNotFound(id))?;

        let app = App {
            components: Rc::new(self.components),
            router: self.router,
            plugins: Rc::new(self.plugins),
            root,
        };
        app.root.set_attribute(MOUNTED_ATTRIBUTE, "true")?;
        app.render(None);
        Ok(app)
    }
}

#[derive(Clone)]
pub struct App {
    components: Rc<BTreeMap<String, GlobalComponent>>,
    router: Option<Rc<Router>>,
    plugins: Rc<Vec<&'static str>>,
    root: Rc<dyn MountElement>,
}

impl App {
    /// Plugins instalados, en orden de instalación
    pub fn plugins(&self) -> &[&'static str] {
        &self.plugins
    }

    pub fn router(&self) -> Option<&Rc<Router>> {
        self.router.as_ref()
    }

    /// Markup de una vista con los componentes globales resueltos
    pub fn resolve_components(&self, view: &View) -> String {
        self.components
            .values()
            .fold(view.render(), |html, component| component.expand(&html))
    }

    /// Renderiza shell + vista (outlet vacío si no hay vista)
    pub fn render(&self, view: Option<&View>) {
        let links = self
            .router
            .as_ref()
            .map(|r| r.links())
            .unwrap_or_default();
        let outlet = view.map(|v| self.resolve_components(v)).unwrap_or_default();
        self.root.set_inner_html(&render_shell(&links, &outlet));
    }

    /// Navega y actualiza el outlet según el resultado
    pub async fn navigate(&self, path: &str) -> AppResult<Navigation> {
        let router = match &self.router {
            Some(router) => Rc::clone(router),
            None => return Err(AppError::plugin("router", "no router installed")),
        };

        let navigation = router.navigate(path).await?;
        match &navigation {
            Navigation::Displayed { view, .. } => self.render(Some(view)),
            Navigation::NotFound(_) => self.render(None),
            Navigation::Superseded => {}
        }
        Ok(navigation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDocument;
    use crate::plugins::{RouterPlugin, SignaturePadPlugin};
    use crate::router::route_table;
    use crate::views::MemoryChunks;
    use futures::executor::block_on;

    fn chunks() -> Rc<MemoryChunks> {
        Rc::new(
            MemoryChunks::new()
                .with("contracts", "<h1>Contracts</h1><signature-pad></signature-pad>")
                .with("about", "<h1>About</h1>"),
        )
    }

    fn builder() -> AppBuilder {
        let router = Router::new(route_table(chunks()).unwrap());
        let mut builder = AppBuilder::new(AppConfig::default());
        builder.use_plugin(&RouterPlugin::new(router)).unwrap();
        builder.use_plugin(&SignaturePadPlugin::default()).unwrap();
        builder
    }

    #[test]
    fn test_mount_writes_shell() {
        let doc = MemoryDocument::with_element("app");
        let app = builder().mount(&doc).unwrap();

        let root = doc.element("app").unwrap();
        assert_eq!(root.attribute(MOUNTED_ATTRIBUTE), Some("true".to_string()));
        assert!(root.inner_html().contains(r##"<a href="#/employees">Employees</a>"##));
        assert!(root.inner_html().ends_with(r#"<main class="router-view"></main>"#));
        assert_eq!(app.plugins(), &["router", "signature-pad"]);
    }

    #[test]
    fn test_mount_without_element_leaves_document_untouched() {
        let doc = MemoryDocument::with_element("root");
        let err = builder().mount(&doc).err();

        assert_eq!(err, Some(AppError::MountPointNotFound("app".to_string())));
        let other = doc.element("root").unwrap();
        assert_eq!(other.writes(), 0);
        assert_eq!(other.attribute(MOUNTED_ATTRIBUTE), None);
    }

    #[test]
    fn test_duplicate_plugin_is_rejected() {
        let mut builder = builder();
        let err = builder.use_plugin(&SignaturePadPlugin::default()).unwrap_err();
        assert_eq!(err, AppError::plugin("signature-pad", "already installed"));
    }

    #[test]
    fn test_second_router_is_rejected() {
        let mut builder = builder();
        let router = Router::new(route_table(chunks()).unwrap());
        let err = builder.provide_router(Rc::new(router)).unwrap_err();
        assert!(matches!(err, AppError::PluginRegistration { .. }));
    }

    #[test]
    fn test_navigation_renders_signature_pad() {
        let doc = MemoryDocument::with_element("app");
        let app = builder().mount(&doc).unwrap();

        block_on(app.navigate("/contracts")).unwrap();
        let html = doc.element("app").unwrap().inner_html();
        assert!(html.contains(r#"<section class="view view-contracts"><h1>Contracts</h1>"#));
        assert!(html.contains(r#"<signature-pad data-background-color="rgba(0,0,0,0)""#));
        assert!(html.contains(r#"data-pen-color="black""#));
    }

    #[test]
    fn test_failed_navigation_keeps_previous_view() {
        let doc = MemoryDocument::with_element("app");
        let app = builder().mount(&doc).unwrap();

        block_on(app.navigate("/about")).unwrap();
        let before = doc.element("app").unwrap().inner_html();

        // templates no existe en los chunks
        assert!(block_on(app.navigate("/templates")).is_err());
        assert_eq!(doc.element("app").unwrap().inner_html(), before);
    }

    #[test]
    fn test_not_found_empties_outlet() {
        let doc = MemoryDocument::with_element("app");
        let app = builder().mount(&doc).unwrap();

        block_on(app.navigate("/")).unwrap();
        block_on(app.navigate("/nowhere")).unwrap();
        let html = doc.element("app").unwrap().inner_html();
        assert!(html.ends_with(r#"<main class="router-view"></main>"#));
    }
}
