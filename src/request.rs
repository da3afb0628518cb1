//! Métodos HTTP suportados e a descrição de uma requisição
//!
//! Uma [`Request`] é montada a cada chamada e descartada em seguida;
//! o cliente não guarda nada entre requisições.

use crate::error::{Result, WebflowError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Verbos aceitos pela API do Webflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Apenas POST, PUT e PATCH carregam body JSON
    pub fn allows_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = WebflowError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            other => Err(WebflowError::Validation(format!(
                "unsupported HTTP method: {}",
                other
            ))),
        }
    }
}

/// Requisição para um recurso da API
///
/// # Exemplo
///
/// ```rust
/// use webflow::{HttpMethod, Request};
/// use serde_json::json;
///
/// let request = Request::new(HttpMethod::Post, "collections/123/items")
///     .query("live", "true")
///     .json(json!({ "fields": { "name": "Post" } }));
///
/// assert_eq!(request.params(), &[("live".to_string(), "true".to_string())]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    method: HttpMethod,
    path: String,
    params: Vec<(String, String)>,
    body: Option<Value>,
}

impl Request {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: Vec::new(),
            body: None,
        }
    }

    /// Adiciona um parâmetro de query; a ordem de inserção é preservada
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn queries<K, V, I>(mut self, params: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Rejeita body em GET/DELETE antes de qualquer I/O
    pub(crate) fn validate(&self) -> Result<()> {
        if self.body.is_some() && !self.method.allows_body() {
            return Err(WebflowError::Validation(format!(
                "{} requests cannot carry a body",
                self.method
            )));
        }
        Ok(())
    }
}
