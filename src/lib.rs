//! Cliente da API CMS do Webflow
//!
//! Este crate expõe um dispatcher genérico ([`WebflowClient::dispatch`]) e uma
//! tabela de rotas configurável ([`RouteTable`]). Os métodos de conveniência
//! (sites, collections, items, webhooks) são apenas chamadas parametrizadas
//! desse dispatcher.
//!
//! # Recursos (API v1)
//!
//! - **Sites**: `/sites`, `/sites/{site_id}`, `/sites/{site_id}/publish`, `/sites/{site_id}/domains`
//! - **Collections**: `/sites/{site_id}/collections`, `/collections/{collection_id}`
//! - **Items**: `/collections/{collection_id}/items[/{item_id}]`
//! - **Webhooks**: `/sites/{site_id}/webhooks[/{webhook_id}]`
//!
//! Cada chamada é uma única tentativa: sem retry, sem cache, sem paginação automática.
//!
//! # Exemplo Básico
//!
//! ```rust,no_run
//! use webflow::{collections::ListItemsParams, Settings, WebflowClient};
//!
//! #[tokio::main]
//! async fn main() -> webflow::Result<()> {
//!     // WEBFLOW_API_KEY vem do ambiente ou do .env
//!     let settings = Settings::new()?;
//!     let client = WebflowClient::from_settings(&settings)?;
//!
//!     let sites = client.list_sites().await?;
//!     let items = client.list_items("collection_id", ListItemsParams::default()).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod collections;
pub mod error;
pub mod request;
pub mod routes;
pub mod settings;
pub mod sites;
pub mod webhooks;

// Re-exports principais
pub use client::{WebflowClient, WebflowClientBuilder};
pub use error::{Result, WebflowError};
pub use request::{HttpMethod, Request};
pub use routes::{Route, RouteTable};
pub use settings::Settings;
pub use webhooks::{TriggerType, WebhookConfig, WebhookManager};
