//! Collections e items do CMS
//!
//! Os campos de um item seguem o schema da collection no Webflow e são
//! repassados como JSON livre, sem validação local.

use crate::client::WebflowClient;
use crate::error::Result;
use crate::routes;
use serde_json::{json, Value};

/// Paginação de uma única página de items
///
/// O Webflow limita `limit` a 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItemsParams {
    pub limit: u32,
    pub offset: u32,
}

impl Default for ListItemsParams {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
        }
    }
}

impl WebflowClient {
    pub async fn list_collections(&self, site_id: &str) -> Result<Value> {
        self.call(routes::LIST_COLLECTIONS, &[("site_id", site_id)], &[], None)
            .await
    }

    pub async fn get_collection(&self, collection_id: &str) -> Result<Value> {
        self.call(
            routes::GET_COLLECTION,
            &[("collection_id", collection_id)],
            &[],
            None,
        )
        .await
    }

    /// Lista uma página de items (`limit`/`offset`)
    pub async fn list_items(&self, collection_id: &str, page: ListItemsParams) -> Result<Value> {
        let limit = page.limit.to_string();
        let offset = page.offset.to_string();

        self.call(
            routes::LIST_ITEMS,
            &[("collection_id", collection_id)],
            &[("limit", limit.as_str()), ("offset", offset.as_str())],
            None,
        )
        .await
    }

    pub async fn get_item(&self, collection_id: &str, item_id: &str) -> Result<Value> {
        self.call(
            routes::GET_ITEM,
            &[("collection_id", collection_id), ("item_id", item_id)],
            &[],
            None,
        )
        .await
    }

    /// Cria um item; com `live = true` o item já sai publicado
    pub async fn create_item(&self, collection_id: &str, fields: Value, live: bool) -> Result<Value> {
        self.write_item(routes::CREATE_ITEM, collection_id, None, fields, live)
            .await
    }

    /// Substitui todos os campos do item (PUT)
    pub async fn update_item(
        &self,
        collection_id: &str,
        item_id: &str,
        fields: Value,
        live: bool,
    ) -> Result<Value> {
        self.write_item(routes::UPDATE_ITEM, collection_id, Some(item_id), fields, live)
            .await
    }

    /// Atualiza apenas os campos informados (PATCH)
    pub async fn patch_item(
        &self,
        collection_id: &str,
        item_id: &str,
        fields: Value,
        live: bool,
    ) -> Result<Value> {
        self.write_item(routes::PATCH_ITEM, collection_id, Some(item_id), fields, live)
            .await
    }

    pub async fn remove_item(&self, collection_id: &str, item_id: &str) -> Result<Value> {
        self.call(
            routes::REMOVE_ITEM,
            &[("collection_id", collection_id), ("item_id", item_id)],
            &[],
            None,
        )
        .await
    }

    // create/update/patch: body {"fields": ...} e ?live=true opcional
    async fn write_item(
        &self,
        route: &str,
        collection_id: &str,
        item_id: Option<&str>,
        fields: Value,
        live: bool,
    ) -> Result<Value> {
        let mut path_params = vec![("collection_id", collection_id)];
        if let Some(item_id) = item_id {
            path_params.push(("item_id", item_id));
        }

        let query: &[(&str, &str)] = if live { &[("live", "true")] } else { &[] };
        let body = json!({ "fields": fields });

        tracing::debug!(
            "{} {} item in collection {}",
            route,
            if live { "live" } else { "draft" },
            collection_id
        );

        self.call(route, &path_params, query, Some(body)).await
    }
}
