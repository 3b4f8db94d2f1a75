//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que maneja múltiples conexiones
//! simultáneas usando threads. Cada conexión se procesa en su propio
//! thread y atiende exactamente un request.
//!
//! El loop de accept es no-bloqueante y está gobernado por un flag
//! atómico: cuando llega la señal de interrupción el flag se apaga, no se
//! aceptan conexiones nuevas y las que están en vuelo terminan solas antes
//! de soltar el socket.

use crate::config::Config;
use crate::handler;
use crate::logging;
use crate::metrics::ServerStats;
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Servidor de archivos estáticos concurrente
pub struct Server {
    config: Config,
    stats: Arc<ServerStats>,
    running: Arc<AtomicBool>,
    bound_addr: Arc<Mutex<Option<SocketAddr>>>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            stats: Arc::new(ServerStats::new()),
            running: Arc::new(AtomicBool::new(false)),
            bound_addr: Arc::new(Mutex::new(None)),
        }
    }

    /// Revisa si el servidor sigue aceptando conexiones
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Pide el apagado: el loop de accept termina en su próxima vuelta
    pub fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
    }

    /// Dirección real en la que quedó escuchando (útil con puerto 0)
    pub fn local_addr(&self) -> Option<SocketAddr> {
        *self.bound_addr.lock().unwrap()
    }

    /// Estadísticas compartidas del servidor
    pub fn stats(&self) -> Arc<ServerStats> {
        Arc::clone(&self.stats)
    }

    /// Corre el servidor hasta que `stop()` apague el flag
    ///
    /// Bloquea el thread actual. El único error fatal es no poder hacer
    /// bind del socket; los errores por conexión solo se loggean.
    pub fn run(&self) -> io::Result<()> {
        let address = self.config.address();
        let listener = TcpListener::bind(&address)?;
        listener.set_nonblocking(true)?;

        // Guardar la dirección real (importa cuando el puerto pedido es 0)
        let bound = listener.local_addr().ok();
        *self.bound_addr.lock().unwrap() = bound;

        self.running.store(true, Ordering::Relaxed);
        match bound {
            Some(addr) => println!("[+] Servidor escuchando en {}", addr),
            None => println!("[+] Servidor escuchando en {}", address),
        }
        println!("[*] Modo concurrente: un thread por conexión\n");

        let root = Arc::new(self.config.root.clone());

        while self.running.load(Ordering::Relaxed) {
            match listener.accept() {
                Ok((stream, addr)) => {
                    let root = Arc::clone(&root);
                    let stats = Arc::clone(&self.stats);

                    stats.connection_opened();

                    thread::spawn(move || {
                        if let Err(e) = Self::handle_connection(stream, addr, &root, &stats) {
                            eprintln!("   ❌ Error en conexión {}: {}", addr, e);
                        }
                        stats.connection_closed();
                    });
                }
                Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => {
                    // Nada que aceptar todavía
                    thread::sleep(Duration::from_millis(10));
                }
                Err(e) => {
                    eprintln!("   ❌ Error al aceptar conexión: {}", e);
                }
            }
        }

        // Drenar: esperar a que las conexiones en vuelo terminen solas
        while self.stats.active_connections() > 0 {
            thread::sleep(Duration::from_millis(10));
        }

        // El listener se libera al salir del scope
        Ok(())
    }

    /// Atiende una conexión: lee un request, escribe una response
    fn handle_connection(
        mut stream: TcpStream,
        addr: SocketAddr,
        root: &Path,
        stats: &ServerStats,
    ) -> io::Result<()> {
        let mut buffer = [0u8; 8192];
        let bytes_read = stream.read(&mut buffer)?;

        if bytes_read == 0 {
            // El peer cerró sin mandar nada
            return Ok(());
        }

        let (response, description) = handler::handle(&buffer[..bytes_read], root);

        let response_bytes = response.to_bytes();
        stream.write_all(&response_bytes)?;
        stream.flush()?;

        let status_code = response.status().as_u16();
        stats.record_request(status_code);
        logging::access_log(&addr.to_string(), &description, status_code);

        Ok(())
    }
}
