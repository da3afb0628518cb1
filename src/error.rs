//! Tipos de erro para o crate webflow

use thiserror::Error;

/// Erros do cliente Webflow
#[derive(Debug, Error)]
pub enum WebflowError {
    /// Falha de transporte (DNS, conexão recusada, timeout, leitura do body)
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Erro da API do Webflow (status code não-2xx)
    #[error("Webflow API error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        /// Body bruto da resposta, sem alterações
        body: String,
    },

    /// Body de sucesso não é JSON válido (ou não casa com o tipo esperado)
    #[error("JSON decoding failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// Requisição inválida antes de chegar na rede
    #[error("Validation error: {0}")]
    Validation(String),

    /// Rota não registrada na tabela
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// Placeholder do template sem valor
    #[error("Missing path parameter: {0}")]
    MissingPathParam(String),

    /// Erro de configuração
    #[error("Configuration error: {0}")]
    Config(String),
}

impl WebflowError {
    /// Status HTTP, quando o erro veio da API
    pub fn status(&self) -> Option<u16> {
        match self {
            WebflowError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, WebflowError::Transport(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, WebflowError::Transport(e) if e.is_timeout())
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<config::ConfigError> for WebflowError {
    fn from(err: config::ConfigError) -> Self {
        WebflowError::Config(err.to_string())
    }
}

impl From<url::ParseError> for WebflowError {
    fn from(err: url::ParseError) -> Self {
        WebflowError::Validation(format!("invalid URL: {}", err))
    }
}

/// Tipo Result padrão para o crate
pub type Result<T> = std::result::Result<T, WebflowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_helpers() {
        let err = WebflowError::Api {
            status: 404,
            message: "not found".to_string(),
            body: r#"{"msg":"not found"}"#.to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
        assert!(!err.is_transport());
        assert_eq!(err.to_string(), "Webflow API error (status 404): not found");
    }

    #[test]
    fn test_non_api_error_has_no_status() {
        let err = WebflowError::UnknownRoute("nope".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_timeout());
    }
}
