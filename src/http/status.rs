//! # Códigos de Estado HTTP
//!
//! Este módulo define los códigos de estado HTTP que usa el servidor de
//! archivos estáticos:
//!
//! - **2xx**: Éxito (200 OK)
//! - **3xx**: Redirección (301 para directorios sin slash final)
//! - **4xx**: Error del cliente (400, 403, 404)
//! - **5xx**: Error del servidor (501 para métodos no soportados)

/// Representa los códigos de estado HTTP que soporta nuestro servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - La petición fue exitosa
    Ok = 200,

    /// 301 Moved Permanently - Directorio pedido sin slash final
    MovedPermanently = 301,

    /// 400 Bad Request - Request malformado
    BadRequest = 400,

    /// 403 Forbidden - Path con un segmento denylisteado (.git, __pycache__)
    Forbidden = 403,

    /// 404 Not Found - Recurso inexistente o directorio no listable
    NotFound = 404,

    /// 501 Not Implemented - Método HTTP no soportado
    NotImplemented = 501,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use game_server::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    ///
    /// Estos textos están definidos en los RFC de HTTP y son estándares.
    ///
    /// # Ejemplo
    /// ```
    /// use game_server::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::MovedPermanently => "Moved Permanently",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }

    /// Verifica si el código indica éxito (2xx)
    pub fn is_success(&self) -> bool {
        matches!(self, StatusCode::Ok)
    }

    /// Verifica si el código indica redirección (3xx)
    pub fn is_redirect(&self) -> bool {
        matches!(self, StatusCode::MovedPermanently)
    }

    /// Verifica si el código indica error del cliente (4xx)
    pub fn is_client_error(&self) -> bool {
        let code = self.as_u16();
        (400..500).contains(&code)
    }

    /// Verifica si el código indica error del servidor (5xx)
    pub fn is_server_error(&self) -> bool {
        let code = self.as_u16();
        (500..600).contains(&code)
    }
}

impl std::fmt::Display for StatusCode {
    /// Formatea el código de estado para mostrarlo
    ///
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}
