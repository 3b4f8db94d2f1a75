//! # Módulo HTTP
//!
//! Este módulo implementa la parte del protocolo HTTP que necesita un file
//! server de desarrollo, sin usar librerías de alto nivel. Incluye:
//!
//! - Parsing de requests `GET` y `HEAD`
//! - Construcción de responses HTTP
//! - Manejo de status codes
//!
//! Las respuestas se emiten como `HTTP/1.0` con `Connection: close`: cada
//! conexión atiende exactamente un request.
//!
//! ### Formato de Request
//!
//! ```text
//! GET /snake/?debug=1 HTTP/1.1\r\n
//! Header-Name: Header-Value\r\n
//! Another-Header: Value\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.0 200 OK\r\n
//! Content-Type: text/html; charset=utf-8\r\n
//! Content-Length: 13\r\n
//! \r\n
//! <!DOCTYPE html>...
//! ```

pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
// Esto permite usar `http::Request` en vez de `http::request::Request`
pub use request::{Method, Request};
pub use response::Response;
pub use status::StatusCode;
