// ============================================================================
// PLUGINS - Capacidades transversales registradas en la aplicación
// ============================================================================
// Cada plugin se instala una sola vez, en el orden fijado por bootstrap.
// ============================================================================

pub mod router;
pub mod signature_pad;

use std::collections::BTreeMap;

pub use router::RouterPlugin;
pub use signature_pad::{SignatureOptions, SignaturePadPlugin};

use crate::app::AppBuilder;
use crate::error::AppResult;

pub trait Plugin {
    fn name(&self) -> &'static str;
    fn install(&self, app: &mut AppBuilder) -> AppResult<()>;
}

/// Escapa un valor para usarlo dentro de un atributo entre comillas dobles
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Componente global: cualquier vista puede usar `<tag></tag>` y se
/// sustituye por el elemento anfitrión con sus atributos
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalComponent {
    tag: String,
    attributes: BTreeMap<String, String>,
}

impl GlobalComponent {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: &str, value: impl ToString) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn placeholder(&self) -> String {
        format!("<{0}></{0}>", self.tag)
    }

    /// Elemento anfitrión con los atributos como `data-*`
    pub fn render_host(&self) -> String {
        let attrs: String = self
            .attributes
            .iter()
            .map(|(k, v)| format!(r#" data-{}="{}""#, k, escape_attribute(v)))
            .collect();
        format!("<{0}{1}></{0}>", self.tag, attrs)
    }

    /// Sustituye los placeholders del componente en el markup
    pub fn expand(&self, markup: &str) -> String {
        markup.replace(&self.placeholder(), &self.render_host())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_placeholder() {
        let component = GlobalComponent::new("signature-pad")
            .with_attribute("pen-color", "black")
            .with_attribute("max-width", 2.5);

        let html = component.expand("<p>Sign:</p><signature-pad></signature-pad>");
        assert_eq!(
            html,
            r#"<p>Sign:</p><signature-pad data-max-width="2.5" data-pen-color="black"></signature-pad>"#
        );
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let component = GlobalComponent::new("signature-pad")
            .with_attribute("pen-color", r#"x" onload="alert(1)"#)
            .with_attribute("background-color", "<b>&</b>");

        assert_eq!(
            component.render_host(),
            r#"<signature-pad data-background-color="&lt;b&gt;&amp;&lt;/b&gt;" data-pen-color="x&quot; onload=&quot;alert(1)"></signature-pad>"#
        );
    }

    #[test]
    fn test_expand_without_placeholder_is_identity() {
        let component = GlobalComponent::new("signature-pad");
        assert_eq!(component.expand("<h1>About</h1>"), "<h1>About</h1>");
    }
}
