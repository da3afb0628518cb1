//! Cliente HTTP para a API do Webflow
//!
//! Todo acesso à API passa por [`WebflowClient::send`]: monta a URL, anexa os
//! headers de autenticação e versão, faz uma única tentativa e normaliza a
//! resposta em JSON ou [`WebflowError`].

use crate::error::{Result, WebflowError};
use crate::request::{HttpMethod, Request};
use crate::routes::RouteTable;
use crate::settings::{
    Settings, DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS,
    DEFAULT_TIMEOUT_SECS,
};
use reqwest::{header, Client as HttpClient, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Cliente para a API CMS do Webflow
///
/// Guarda apenas token, URL base, versão da API e a tabela de rotas, todos
/// imutáveis. Clones compartilham o pool de conexões do `reqwest`.
#[derive(Clone)]
pub struct WebflowClient {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
    api_version: String,
    routes: Arc<RouteTable>,
}

impl WebflowClient {
    /// Cria um novo cliente Webflow
    ///
    /// # Timeouts
    ///
    /// - Total: 10s
    /// - Connect: 5s
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    /// Cria um novo cliente com timeouts customizados
    pub fn with_timeouts(
        api_key: impl Into<String>,
        total_timeout_secs: u64,
        connect_timeout_secs: u64,
    ) -> Result<Self> {
        Self::builder(api_key)
            .timeout(Duration::from_secs(total_timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .build()
    }

    /// Cria um cliente a partir de [`Settings`]
    ///
    /// Rotas declaradas na configuração sobrescrevem as padrão.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut routes = RouteTable::default();
        routes.extend(settings.routes.clone());

        Self::builder(settings.api_key.clone())
            .base_url(settings.base_url.clone())
            .api_version(settings.api_version.clone())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .routes(routes)
            .build()
    }

    pub fn builder(api_key: impl Into<String>) -> WebflowClientBuilder {
        WebflowClientBuilder::new(api_key)
    }

    /// Monta a URL final: `base_url` + `path` + query string na ordem dada
    ///
    /// ```rust
    /// use webflow::WebflowClient;
    ///
    /// let client = WebflowClient::new("token").unwrap();
    /// let url = client
    ///     .build_url("/collections/123/items", &[("limit", "10"), ("offset", "0")])
    ///     .unwrap();
    /// assert_eq!(
    ///     url.as_str(),
    ///     "https://api.webflow.com/collections/123/items?limit=10&offset=0"
    /// );
    /// ```
    pub fn build_url<K, V>(&self, path: &str, params: &[(K, V)]) -> Result<Url>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        check_path(path)?;

        let joined = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let mut url = Url::parse(&joined)?;

        // query_pairs_mut deixaria um "?" solto mesmo sem parâmetros
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key.as_ref(), value.as_ref());
            }
        }

        Ok(url)
    }

    /// Executa uma requisição e retorna o JSON da resposta sem alterações
    ///
    /// Exatamente uma tentativa: sem retry e sem backoff.
    pub async fn send(&self, request: Request) -> Result<Value> {
        request.validate()?;

        let url = self.build_url(request.path(), request.params())?;
        let method = request.method();

        tracing::debug!("{} {}", method, url);

        let mut builder = self
            .http_client
            .request(method.to_reqwest(), url.clone())
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header("Accept-Version", &self.api_version)
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!("Webflow transport error on {} {}: {}", method, url, e);
            WebflowError::Transport(e)
        })?;

        self.handle_response(response).await
    }

    /// Atalho para [`send`](Self::send) com argumentos soltos
    pub async fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        params: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<Value> {
        let mut request = Request::new(method, path).queries(params.iter().copied());
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send(request).await
    }

    /// Igual a [`dispatch`](Self::dispatch), parseando o JSON em `T`
    pub async fn dispatch_json<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        params: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<T> {
        let value = self.dispatch(method, path, params, body).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Executa uma rota nomeada da tabela
    ///
    /// ```rust,no_run
    /// # async fn example() -> webflow::Result<()> {
    /// use webflow::{routes, WebflowClient};
    ///
    /// let client = WebflowClient::new("token")?;
    /// let items = client
    ///     .call(routes::LIST_ITEMS, &[("collection_id", "123")], &[("limit", "10")], None)
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn call(
        &self,
        route: &str,
        path_params: &[(&str, &str)],
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<Value> {
        let route = self.routes.resolve(route)?;
        let path = route.render(path_params)?;
        self.dispatch(route.method, &path, query, body).await
    }

    /// Processa a resposta HTTP e trata erros
    async fn handle_response(&self, response: Response) -> Result<Value> {
        let status = response.status();
        let url = response.url().clone();
        let body = response.text().await?;

        if status.is_success() {
            if body.trim().is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_str(&body)?);
        }

        let status_code = status.as_u16();
        tracing::error!("Webflow API error ({}) on {}", status_code, url);
        tracing::debug!("Webflow API error body: {}", body);

        Err(WebflowError::Api {
            status: status_code,
            message: extract_message(&body),
            body,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }
}

impl fmt::Debug for WebflowClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebflowClient")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("routes", &self.routes.len())
            .finish_non_exhaustive()
    }
}

/// `Url::parse` transformaria `#` em fragmento e colapsaria `.`/`..`,
/// mudando o recurso chamado
fn check_path(path: &str) -> Result<()> {
    if path.contains('#') {
        return Err(WebflowError::Validation(format!(
            "path must not contain '#': {}",
            path
        )));
    }

    let resource = path.split('?').next().unwrap_or_default();
    // %2e também conta como ponto para o parser de URL
    let is_dot_segment = |segment: &str| {
        let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
        decoded == "." || decoded == ".."
    };
    if resource.split('/').any(is_dot_segment) {
        return Err(WebflowError::Validation(format!(
            "path must not contain dot segments: {}",
            path
        )));
    }

    Ok(())
}

/// Tenta extrair a mensagem de erro do JSON; senão devolve o body bruto
fn extract_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        let message = ["msg", "message", "err", "error"]
            .iter()
            .find_map(|key| json.get(*key).and_then(Value::as_str));
        if let Some(message) = message {
            return message.to_string();
        }
    }
    body.to_string()
}

/// Builder para [`WebflowClient`]
pub struct WebflowClientBuilder {
    api_key: String,
    base_url: String,
    api_version: String,
    timeout: Duration,
    connect_timeout: Duration,
    routes: RouteTable,
}

impl WebflowClientBuilder {
    fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            routes: RouteTable::default(),
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// Substitui a tabela de rotas inteira
    pub fn routes(mut self, routes: RouteTable) -> Self {
        self.routes = routes;
        self
    }

    pub fn build(self) -> Result<WebflowClient> {
        if self.api_key.trim().is_empty() {
            return Err(WebflowError::Config("Webflow API key is empty".to_string()));
        }

        // Valida a URL base cedo em vez de falhar na primeira chamada
        Url::parse(&self.base_url).map_err(|e| {
            WebflowError::Config(format!("invalid base URL '{}': {}", self.base_url, e))
        })?;

        let http_client = HttpClient::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .build()
            .map_err(|e| WebflowError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(WebflowClient {
            http_client,
            api_key: self.api_key,
            base_url: self.base_url,
            api_version: self.api_version,
            routes: Arc::new(self.routes),
        })
    }
}
