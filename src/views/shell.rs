// ============================================================================
// SHELL - Navegación + outlet del router
// ============================================================================

/// Etiqueta visible de una ruta a partir de su nombre
pub fn label_for(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Renderiza la barra de navegación y el outlet con la vista actual
pub fn render_shell(links: &[(String, String)], outlet: &str) -> String {
    let nav = links
        .iter()
        .map(|(label, href)| format!(r#"<a href="{}">{}</a>"#, href, label))
        .collect::<Vec<_>>()
        .join(" | ");

    format!(
        r#"<nav id="nav">{}</nav><main class="router-view">{}</main>"#,
        nav, outlet
    )
}
