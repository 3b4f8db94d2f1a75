//! # Pipeline de Requests
//! src/handler/mod.rs
//!
//! Este módulo arma la respuesta para cada request recibido:
//!
//! ```text
//! Request → Filtro (denylist) → Resolución → Archivo | Redirect | Listado
//! ```
//!
//! El filtro corre antes que cualquier acceso al filesystem. Después, un
//! directorio pedido sin slash final se redirige con 301 (para que los
//! assets relativos del juego resuelvan bien), un directorio con índice
//! sirve su `index.html`, y un directorio sin índice genera el listado.
//!
//! Todas las respuestas, incluidos los errores, llevan
//! `Cache-Control: no-store, max-age=0`: el árbol servido se edita en
//! caliente y ningún cache intermedio debe retener assets viejos.

pub mod filter;
pub mod listing;
pub mod static_files;

use crate::http::{Method, Request, Response, StatusCode};
use crate::http::request::ParseError;
use std::path::Path;

/// Procesa un buffer crudo y produce la respuesta final
///
/// Retorna además la descripción del request para el log de accesos: la
/// request line si se pudo parsear, o el error de parsing si no.
pub fn handle(buffer: &[u8], root: &Path) -> (Response, String) {
    match Request::parse(buffer) {
        Ok(request) => {
            let mut response = respond(&request, root);

            // HEAD: mismos headers que GET, sin body
            if request.method() == Method::HEAD {
                response = response.without_body();
            }

            add_common_headers(&mut response);
            (response, request.request_line())
        }
        Err(err) => {
            let mut response = match &err {
                ParseError::UnsupportedMethod(method) => Response::error(
                    StatusCode::NotImplemented,
                    &format!("Unsupported method ('{}')", method),
                ),
                _ => Response::error(StatusCode::BadRequest, "Bad request syntax"),
            };
            add_common_headers(&mut response);
            (response, format!("<parse error: {}>", err))
        }
    }
}

/// Decide la respuesta para un request ya parseado
fn respond(request: &Request, root: &Path) -> Response {
    // 1. Filtro de denylist, antes de tocar el filesystem
    let segments = filter::decode_segments(request.path());
    if filter::is_blocked(&segments) {
        return Response::error(StatusCode::Forbidden, "Forbidden");
    }

    // 2. Resolución bajo la raíz
    let fs_path = filter::resolve_under_root(root, &segments);

    if fs_path.is_dir() {
        // 3. Directorio sin slash final: redirigir agregándolo, preservando
        //    el query string
        if !request.path().ends_with('/') {
            let location = match request.query() {
                Some(query) => format!("{}/?{}", request.path(), query),
                None => format!("{}/", request.path()),
            };
            return Response::redirect(&location);
        }

        // 4. Directorio con índice: servir el index.html del juego
        if let Some(index) = static_files::find_index(&fs_path) {
            return static_files::serve_file(&index);
        }

        // 5. Directorio sin índice: generar el listado
        return match listing::render(&fs_path, &request.target()) {
            Ok(page) => Response::html(&page),
            Err(err) => {
                // El detalle queda en el log; el cliente solo ve el 404
                eprintln!("   ❌ No se pudo listar {}: {}", fs_path.display(), err);
                Response::error(StatusCode::NotFound, "No permission to list directory")
            }
        };
    }

    // 6. Archivo común
    static_files::serve_file(&fs_path)
}

/// Agrega los headers comunes a todas las respuestas
fn add_common_headers(response: &mut Response) {
    response.add_header("Server", "game_server/0.1.0");
    response.add_header("Connection", "close");
    // Evita assets viejos durante el desarrollo
    response.add_header("Cache-Control", "no-store, max-age=0");
}
