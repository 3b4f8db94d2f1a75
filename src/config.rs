//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor de juegos con soporte
//! para argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./game_server --port 8000
//! ./game_server --host 0.0.0.0 --port 8080   # servir en la LAN
//! ./game_server --root ../juegos
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! GAME_PORT=8080 GAME_HOST=0.0.0.0 ./game_server
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Juegos que esperamos encontrar bajo el directorio raíz.
///
/// La lista es informativa: al arrancar se imprime un hint por cada
/// subdirectorio presente, y la ausencia de cualquiera no es un error.
pub const KNOWN_GAMES: &[&str] = &[
    "breakout",
    "dino",
    "maze",
    "minesweeper",
    "pong",
    "snake",
    "tetris",
    "threejs-littlest-tokyo",
    "tictactoe",
];

/// Configuración del servidor de archivos estáticos
#[derive(Debug, Clone, Parser)]
#[command(name = "game_server")]
#[command(about = "Servidor HTTP de archivos estáticos para los juegos del workspace")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Host/IP en el que escucha
    #[arg(long, default_value = "127.0.0.1", env = "GAME_HOST")]
    pub host: String,

    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "8000", env = "GAME_PORT")]
    pub port: u16,

    /// Directorio raíz a servir
    #[arg(long, visible_alias = "dir", default_value = ".", env = "GAME_ROOT")]
    pub root: PathBuf,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    ///
    /// # Ejemplo
    /// ```ignore
    /// use game_server::config::Config;
    ///
    /// let config = Config::new();
    /// println!("Server listening on {}", config.address());
    /// ```
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```
    /// use game_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:8000");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }

        // El directorio raíz tiene que existir y ser un directorio
        if !self.root.exists() {
            return Err(format!("Root directory does not exist: {}", self.root.display()));
        }
        if !self.root.is_dir() {
            return Err(format!("Root path is not a directory: {}", self.root.display()));
        }

        Ok(())
    }

    /// Busca bajo la raíz los juegos conocidos que realmente existen
    ///
    /// Retorna los nombres en el mismo orden de `KNOWN_GAMES`.
    pub fn discover_games(&self) -> Vec<&'static str> {
        KNOWN_GAMES
            .iter()
            .copied()
            .filter(|name| self.root.join(name).is_dir())
            .collect()
    }

    /// Imprime un resumen de la configuración y los juegos encontrados
    pub fn print_summary(&self) {
        println!("╔══════════════════════════════════════════════════════════════╗");
        println!("║               Game Server - Static Files                    ║");
        println!("╚══════════════════════════════════════════════════════════════╝");
        println!();
        println!("🌐 Network:");
        println!("   Address:      http://{}", self.address());
        println!("   Root dir:     {}", self.root.display());
        println!();

        let games = self.discover_games();
        if games.is_empty() {
            println!("🎮 Games: none found under the root directory");
        } else {
            println!("🎮 Games:");
            for game in games {
                println!("   {} available at http://{}/{}/", game, self.address(), game);
            }
        }

        println!();
        println!("Press Ctrl+C to stop.");
        println!("═══════════════════════════════════════════════════════════════");
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            root: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.root, PathBuf::from("."));
    }

    #[test]
    fn test_address() {
        let config = Config::default();
        assert_eq!(config.address(), "127.0.0.1:8000");
    }

    #[test]
    fn test_address_custom() {
        let mut config = Config::default();
        config.host = "0.0.0.0".to_string();
        config.port = 3000;
        assert_eq!(config.address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_validate_success() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.root = dir.path().to_path_buf();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_root() {
        let mut config = Config::default();
        config.root = PathBuf::from("/definitely/not/a/real/path");
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("does not exist"));
    }

    #[test]
    fn test_validate_root_is_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("archivo.txt");
        fs::write(&file_path, "hola").unwrap();

        let mut config = Config::default();
        config.root = file_path;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not a directory"));
    }

    #[test]
    fn test_validate_empty_host() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.host = "  ".to_string();
        config.root = dir.path().to_path_buf();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Host"));
    }

    #[test]
    fn test_discover_games_empty() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.root = dir.path().to_path_buf();
        assert!(config.discover_games().is_empty());
    }

    #[test]
    fn test_discover_games_some() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("snake")).unwrap();
        fs::create_dir(dir.path().join("tetris")).unwrap();
        // Un archivo con nombre de juego no cuenta como juego
        fs::write(dir.path().join("pong"), "no soy un directorio").unwrap();

        let mut config = Config::default();
        config.root = dir.path().to_path_buf();

        let games = config.discover_games();
        assert_eq!(games, vec!["snake", "tetris"]);
    }

    #[test]
    fn test_config_print_summary() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.root = dir.path().to_path_buf();
        // Should not panic
        config.print_summary();
    }
}
