//! # Game Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor de archivos estáticos: parsea la
//! configuración, imprime el resumen con los juegos encontrados, instala
//! el manejador de Ctrl+C y corre el servidor hasta la interrupción.

use game_server::config::Config;
use game_server::server::Server;
use std::sync::Arc;

fn main() {
    // Crear configuración desde CLI / variables de entorno
    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }

    config.print_summary();

    let server = Arc::new(Server::new(config));

    // Ctrl+C apaga el flag; el loop de accept termina y drena solo
    let server_for_signal = Arc::clone(&server);
    ctrlc_handler(move || {
        println!("\n🛑 Shutting down...");
        server_for_signal.stop();
    });

    if let Err(e) = server.run() {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }

    let stats = server.stats();
    println!(
        "[+] Servidor detenido ({} requests atendidos, {} con error)",
        stats.total_requests(),
        stats.error_responses()
    );
}

/// Manejador simple de Ctrl+C sin dependencias pesadas
///
/// Un thread dedicado espera SIGINT/SIGTERM con `sigwait` y ejecuta el
/// callback una sola vez.
fn ctrlc_handler<F>(handler: F)
where
    F: Fn() + Send + 'static,
{
    use std::thread;

    // Construye la máscara con SIGINT y SIGTERM
    unsafe fn interrupt_mask() -> libc::sigset_t {
        let mut mask: libc::sigset_t = std::mem::zeroed();
        libc::sigemptyset(&mut mask);
        libc::sigaddset(&mut mask, libc::SIGINT);
        libc::sigaddset(&mut mask, libc::SIGTERM);
        mask
    }

    // Bloquear las señales acá, en el thread principal: todos los threads
    // creados después heredan la máscara y sigwait es el único punto de
    // entrega
    unsafe {
        let mask = interrupt_mask();
        libc::pthread_sigmask(libc::SIG_BLOCK, &mask, std::ptr::null_mut());
    }

    thread::spawn(move || unsafe {
        let mask = interrupt_mask();
        let mut sig: libc::c_int = 0;
        loop {
            if libc::sigwait(&mask, &mut sig) == 0 {
                handler();
                break;
            }
        }
    });
}
