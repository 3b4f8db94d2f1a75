//! # Filtrado y Resolución de Paths
//! src/handler/filter.rs
//!
//! Antes de tocar el filesystem, cada path pedido se decodifica, se corta
//! en segmentos y se revisa contra la denylist. Recién después se resuelve
//! a una ruta real bajo el directorio raíz.

use percent_encoding::percent_decode_str;
use std::path::{Path, PathBuf};

/// Segmentos de path cuyo acceso está bloqueado por completo.
///
/// Si cualquier segmento del path coincide (comparación sensible a
/// mayúsculas), el request se rechaza con 403 sin tocar el filesystem.
pub const BLOCKED_SEGMENTS: &[&str] = &[".git", "__pycache__"];

/// Decodifica el percent-encoding del path y lo corta en segmentos
///
/// Se descartan los segmentos vacíos y los `.`, igual que hace el
/// navegador al normalizar una URL.
///
/// # Ejemplo
/// ```
/// use game_server::handler::filter::decode_segments;
///
/// let segs = decode_segments("/snake//./style.css");
/// assert_eq!(segs, vec!["snake", "style.css"]);
/// ```
pub fn decode_segments(path: &str) -> Vec<String> {
    let decoded = percent_decode_str(path).decode_utf8_lossy();

    decoded
        .split('/')
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .map(|seg| seg.to_string())
        .collect()
}

/// Revisa si algún segmento está en la denylist
pub fn is_blocked(segments: &[String]) -> bool {
    segments
        .iter()
        .any(|seg| BLOCKED_SEGMENTS.contains(&seg.as_str()))
}

/// Resuelve los segmentos a una ruta bajo el directorio raíz
///
/// Los `..` se colapsan con una pila que nunca sube por encima de la raíz,
/// así que el resultado siempre queda dentro del árbol servido.
///
/// # Ejemplo
/// ```
/// use game_server::handler::filter::{decode_segments, resolve_under_root};
/// use std::path::{Path, PathBuf};
///
/// let segs = decode_segments("/a/../snake/index.html");
/// let path = resolve_under_root(Path::new("/srv/games"), &segs);
/// assert_eq!(path, PathBuf::from("/srv/games/snake/index.html"));
/// ```
pub fn resolve_under_root(root: &Path, segments: &[String]) -> PathBuf {
    let mut stack: Vec<&str> = Vec::new();

    for seg in segments {
        if seg == ".." {
            stack.pop();
        } else {
            stack.push(seg);
        }
    }

    let mut path = root.to_path_buf();
    for part in stack {
        path.push(part);
    }
    path
}
