//! # Listado de Directorios
//! src/handler/listing.rs
//!
//! Genera la página HTML que se sirve cuando un directorio no tiene archivo
//! índice: un título con el path pedido y una lista de anchors, uno por
//! entrada visible del directorio.
//!
//! Los nombres visibles se escapan como HTML y los hrefs se
//! percent-encodean, así un archivo llamado `<script>` se muestra como
//! texto y nunca como markup.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fs;
use std::io;
use std::path::Path;

/// Entradas que nunca aparecen en el listado.
///
/// El set esconde los metadatos del repositorio y el propio binario del
/// servidor cuando vive dentro del árbol servido.
pub const HIDDEN_ENTRIES: &[&str] = &[
    ".git",
    ".gitignore",
    "README.md",
    "game_server",
    "__pycache__",
];

/// Caracteres que se percent-encodean en un href.
///
/// Mismo conjunto "safe" del quote clásico de URLs: se preservan los
/// alfanuméricos, `-`, `_`, `.`, `~` y el separador `/`.
const HREF_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Escapa un texto para incrustarlo en HTML
///
/// Neutraliza `&`, `<` y `>`. Las comillas no se tocan: los labels van como
/// contenido de un anchor, no como atributo.
pub fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Percent-encodea el destino de un anchor
fn encode_href(link: &str) -> String {
    utf8_percent_encode(link, HREF_ENCODE_SET).to_string()
}

/// Genera el HTML del listado para un directorio
///
/// * `dir` - directorio ya resuelto en el filesystem
/// * `display_path` - path tal como vino en el request, para el título
///
/// Las entradas ocultas se filtran, el resto se ordena sin distinguir
/// mayúsculas. A los directorios se les agrega `/` (en label y link) y a
/// los symlinks `@` (solo en el label), en ese orden: un symlink a un
/// directorio se muestra como `nombre/@`.
///
/// # Errores
///
/// Si el directorio no se puede enumerar retorna el error de IO; el caller
/// lo convierte en un 404 sin filtrar el detalle al cliente.
pub fn render(dir: &Path, display_path: &str) -> io::Result<String> {
    let mut names: Vec<String> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| !HIDDEN_ENTRIES.contains(&name.as_str()))
        .collect();

    names.sort_by_key(|name| name.to_lowercase());

    let title = html_escape(display_path);

    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n");
    page.push_str("<html>\n<head>\n");
    page.push_str(&format!(
        "<meta charset='utf-8'><title>Directory listing for {}</title>\n",
        title
    ));
    page.push_str("</head>\n<body>\n");
    page.push_str(&format!("<h2>Directory listing for {}</h2>\n", title));
    page.push_str("<hr>\n<ul>\n");

    for name in names {
        let full = dir.join(&name);
        let is_dir = full.is_dir();
        let is_link = fs::symlink_metadata(&full)
            .map(|meta| meta.file_type().is_symlink())
            .unwrap_or(false);

        let mut display = name.clone();
        let mut link = name.clone();
        if is_dir {
            display.push('/');
            link.push('/');
        }
        if is_link {
            display.push('@');
        }

        page.push_str(&format!(
            "<li><a href='{}'>{}</a></li>\n",
            encode_href(&link),
            html_escape(&display)
        ));
    }

    page.push_str("</ul>\n<hr>\n</body>\n</html>\n");

    Ok(page)
}
