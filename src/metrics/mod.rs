//! # Contadores del Servidor
//! src/metrics/mod.rs
//!
//! Contadores atómicos compartidos entre los threads de conexión. El loop
//! de accept los usa para drenar las conexiones en vuelo durante el
//! shutdown, y el proceso imprime el total servido al salir.

use std::sync::atomic::{AtomicU64, Ordering};

/// Estadísticas del servidor, seguras entre threads
///
/// Todo es `AtomicU64`: no hace falta ningún lock para lo que este
/// servidor necesita contar.
#[derive(Debug, Default)]
pub struct ServerStats {
    /// Requests atendidos (cualquier status)
    total_requests: AtomicU64,

    /// Respuestas con status de error (4xx/5xx)
    error_responses: AtomicU64,

    /// Conexiones siendo atendidas en este momento
    active_connections: AtomicU64,
}

impl ServerStats {
    /// Crea estadísticas en cero
    pub fn new() -> Self {
        Self::default()
    }

    /// Marca una conexión aceptada
    pub fn connection_opened(&self) {
        self.active_connections.fetch_add(1, Ordering::Relaxed);
    }

    /// Marca una conexión terminada
    pub fn connection_closed(&self) {
        // fetch_sub con saturación manual: nunca por debajo de cero
        let _ = self
            .active_connections
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1));
    }

    /// Registra un request atendido con su status final
    pub fn record_request(&self, status_code: u16) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        if status_code >= 400 {
            self.error_responses.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Requests totales atendidos
    pub fn total_requests(&self) -> u64 {
        self.total_requests.load(Ordering::Relaxed)
    }

    /// Respuestas de error emitidas
    pub fn error_responses(&self) -> u64 {
        self.error_responses.load(Ordering::Relaxed)
    }

    /// Conexiones activas en este momento
    pub fn active_connections(&self) -> u64 {
        self.active_connections.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_start_at_zero() {
        let stats = ServerStats::new();
        assert_eq!(stats.total_requests(), 0);
        assert_eq!(stats.error_responses(), 0);
        assert_eq!(stats.active_connections(), 0);
    }

    #[test]
    fn test_record_request() {
        let stats = ServerStats::new();
        stats.record_request(200);
        stats.record_request(301);
        stats.record_request(404);
        stats.record_request(403);

        assert_eq!(stats.total_requests(), 4);
        assert_eq!(stats.error_responses(), 2);
    }

    #[test]
    fn test_connection_counting() {
        let stats = ServerStats::new();
        stats.connection_opened();
        stats.connection_opened();
        assert_eq!(stats.active_connections(), 2);

        stats.connection_closed();
        assert_eq!(stats.active_connections(), 1);

        stats.connection_closed();
        stats.connection_closed(); // de más: no baja de cero
        assert_eq!(stats.active_connections(), 0);
    }

    #[test]
    fn test_stats_shared_between_threads() {
        use std::sync::Arc;
        use std::thread;

        let stats = Arc::new(ServerStats::new());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let stats = Arc::clone(&stats);
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    stats.record_request(200);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(stats.total_requests(), 800);
    }
}
