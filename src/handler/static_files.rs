//! # Servicio de Archivos Estáticos
//! src/handler/static_files.rs
//!
//! Lee un archivo del árbol servido y arma la respuesta con su contenido
//! tal cual está en disco. El `Content-Type` se infiere de la extensión
//! con `mime_guess`; un archivo sin extensión conocida sale como
//! `application/octet-stream`.

use crate::http::{Response, StatusCode};
use mime_guess::from_path;
use std::fs;
use std::path::{Path, PathBuf};

/// Archivos índice que convierten un directorio en una página servible
const INDEX_FILES: &[&str] = &["index.html", "index.htm"];

/// Busca un archivo índice dentro del directorio
///
/// Retorna la ruta del primero que exista, en el orden de `INDEX_FILES`.
pub fn find_index(dir: &Path) -> Option<PathBuf> {
    INDEX_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Sirve el contenido de un archivo con su Content-Type inferido
///
/// Retorna 404 si el archivo no existe o no se puede leer. El error de IO
/// concreto no viaja al cliente: solo queda en el log del servidor.
pub fn serve_file(fs_path: &Path) -> Response {
    if !fs_path.is_file() {
        return Response::error(StatusCode::NotFound, "File not found");
    }

    let body = match fs::read(fs_path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("   ❌ Error leyendo {}: {}", fs_path.display(), err);
            return Response::error(StatusCode::NotFound, "File not found");
        }
    };

    let content_type = from_path(fs_path).first_or_octet_stream().to_string();

    Response::new(StatusCode::Ok)
        .with_header("Content-Type", &content_type)
        .with_body_bytes(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_serve_file_ok() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("hello.txt");
        let mut file = File::create(&file_path).unwrap();
        write!(file, "Hello, world!").unwrap();

        let response = serve_file(&file_path);

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), b"Hello, world!");
        assert_eq!(response.headers().get("Content-Type"), Some(&"text/plain".to_string()));
        assert_eq!(response.headers().get("Content-Length"), Some(&"13".to_string()));
    }

    #[test]
    fn test_serve_file_css_content_type() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("style.css");
        fs::write(&file_path, "body { margin: 0; }").unwrap();

        let response = serve_file(&file_path);

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.headers().get("Content-Type"), Some(&"text/css".to_string()));
    }

    #[test]
    fn test_serve_file_unknown_extension() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("datos.bin");
        fs::write(&file_path, [0u8, 1, 2, 3]).unwrap();

        let response = serve_file(&file_path);

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(
            response.headers().get("Content-Type"),
            Some(&"application/octet-stream".to_string())
        );
    }

    #[test]
    fn test_serve_file_missing() {
        let dir = tempdir().unwrap();
        let response = serve_file(&dir.path().join("no-existe.txt"));
        assert_eq!(response.status(), StatusCode::NotFound);
    }

    #[test]
    fn test_serve_file_on_directory_is_not_found() {
        let dir = tempdir().unwrap();
        let response = serve_file(dir.path());
        assert_eq!(response.status(), StatusCode::NotFound);
    }

    #[test]
    fn test_find_index_html() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();

        let index = find_index(dir.path());
        assert_eq!(index, Some(dir.path().join("index.html")));
    }

    #[test]
    fn test_find_index_prefers_html_over_htm() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.htm"), "htm").unwrap();
        fs::write(dir.path().join("index.html"), "html").unwrap();

        let index = find_index(dir.path());
        assert_eq!(index, Some(dir.path().join("index.html")));
    }

    #[test]
    fn test_find_index_none() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("otro.html"), "x").unwrap();
        assert_eq!(find_index(dir.path()), None);
    }
}
