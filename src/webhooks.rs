//! Webflow Webhooks API
//!
//! Gerenciamento dos webhooks de um site: listar, buscar, criar e remover.
//! A verificação de entregas recebidas fica fora deste crate.
//!
//! ## Exemplo de Uso
//!
//! ```rust,no_run
//! use webflow::webhooks::{TriggerType, WebhookConfig, WebhookManager};
//!
//! # async fn example() -> webflow::Result<()> {
//! let manager = WebhookManager::from_token("token".to_string(), "site_id".to_string())?;
//!
//! let config = WebhookConfig {
//!     trigger_type: TriggerType::FormSubmission,
//!     url: "https://myapp.com/webhooks/webflow".to_string(),
//!     filter: None,
//! };
//!
//! let webhook = manager.create_webhook(&config).await?;
//! println!("Webhook criado: {}", webhook["_id"]);
//!
//! let webhooks = manager.list_webhooks().await?;
//! # Ok(())
//! # }
//! ```

use crate::{routes, Result, WebflowClient};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Gerenciador de webhooks de um site
pub struct WebhookManager {
    client: WebflowClient,
    site_id: String,
}

impl WebhookManager {
    /// Cria um novo WebhookManager com um cliente existente
    pub fn new(client: WebflowClient, site_id: String) -> Self {
        Self { client, site_id }
    }

    /// Cria um WebhookManager a partir de um token
    pub fn from_token(api_key: String, site_id: String) -> Result<Self> {
        let client = WebflowClient::new(api_key)?;
        Ok(Self::new(client, site_id))
    }

    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    pub async fn list_webhooks(&self) -> Result<Value> {
        self.client
            .call(routes::LIST_WEBHOOKS, &[("site_id", self.site_id.as_str())], &[], None)
            .await
    }

    pub async fn get_webhook(&self, webhook_id: &str) -> Result<Value> {
        self.client
            .call(
                routes::GET_WEBHOOK,
                &[("site_id", self.site_id.as_str()), ("webhook_id", webhook_id)],
                &[],
                None,
            )
            .await
    }

    /// Registra um webhook para o trigger informado
    pub async fn create_webhook(&self, config: &WebhookConfig) -> Result<Value> {
        let body = serde_json::to_value(config)?;

        tracing::info!(
            "Criando webhook {} -> {} no site {}",
            config.trigger_type.as_str(),
            config.url,
            self.site_id
        );

        self.client
            .call(
                routes::CREATE_WEBHOOK,
                &[("site_id", self.site_id.as_str())],
                &[],
                Some(body),
            )
            .await
    }

    pub async fn remove_webhook(&self, webhook_id: &str) -> Result<Value> {
        self.client
            .call(
                routes::REMOVE_WEBHOOK,
                &[("site_id", self.site_id.as_str()), ("webhook_id", webhook_id)],
                &[],
                None,
            )
            .await
    }
}

/// Configuração de webhook para criação
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookConfig {
    #[serde(rename = "triggerType")]
    pub trigger_type: TriggerType,

    /// URL que receberá os eventos
    pub url: String,

    /// Filtro opcional (ex: `{"name": "Contact Form"}` para form_submission)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
}

/// Triggers de webhook disponíveis no Webflow
///
/// Triggers novos ou não mapeados caem em [`TriggerType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerType {
    FormSubmission,
    SitePublish,
    EcommNewOrder,
    EcommOrderChanged,
    EcommInventoryChanged,
    MembershipsUserAccountAdded,
    MembershipsUserAccountUpdated,
    CollectionItemCreated,
    CollectionItemChanged,
    CollectionItemDeleted,
    CollectionItemUnpublished,
    #[serde(untagged)]
    Other(String),
}

impl TriggerType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::FormSubmission => "form_submission",
            Self::SitePublish => "site_publish",
            Self::EcommNewOrder => "ecomm_new_order",
            Self::EcommOrderChanged => "ecomm_order_changed",
            Self::EcommInventoryChanged => "ecomm_inventory_changed",
            Self::MembershipsUserAccountAdded => "memberships_user_account_added",
            Self::MembershipsUserAccountUpdated => "memberships_user_account_updated",
            Self::CollectionItemCreated => "collection_item_created",
            Self::CollectionItemChanged => "collection_item_changed",
            Self::CollectionItemDeleted => "collection_item_deleted",
            Self::CollectionItemUnpublished => "collection_item_unpublished",
            Self::Other(name) => name,
        }
    }

    /// Triggers de items do CMS
    pub fn all_collection_item_events() -> Vec<Self> {
        vec![
            Self::CollectionItemCreated,
            Self::CollectionItemChanged,
            Self::CollectionItemDeleted,
            Self::CollectionItemUnpublished,
        ]
    }

    /// Triggers de e-commerce
    pub fn all_ecomm_events() -> Vec<Self> {
        vec![
            Self::EcommNewOrder,
            Self::EcommOrderChanged,
            Self::EcommInventoryChanged,
        ]
    }
}
