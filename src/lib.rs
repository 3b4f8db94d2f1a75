//! # Game Server
//! src/lib.rs
//!
//! Servidor HTTP de archivos estáticos pensado para desarrollo: expone el
//! árbol de juegos de navegador del workspace (snake, tetris, pong, etc.)
//! con listado de directorios y filtrado básico de paths.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing de requests y construcción de responses HTTP
//! - `server`: Lógica del servidor TCP y manejo de conexiones
//! - `handler`: Pipeline por request (filtro → resolución → respuesta)
//! - `metrics`: Contadores del servidor (requests totales, conexiones activas)
//! - `logging`: Log de accesos por request
//!
//! ## Ejemplo de uso
//!
//! ```ignore
//! use game_server::server::Server;
//! use game_server::config::Config;
//!
//! let config = Config::default();
//! let server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod http;
pub mod config;
pub mod server;
pub mod handler;
pub mod metrics;
pub mod logging;
