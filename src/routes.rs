//! Tabela de rotas da API do Webflow
//!
//! Cada rota associa um nome a um verbo HTTP e a um template de path com
//! placeholders `{nome}`. A tabela é dado de configuração: o chamador pode
//! partir de [`RouteTable::default`] (API v1) e sobrescrever ou acrescentar
//! entradas, inclusive a partir do arquivo de settings.

use crate::error::{Result, WebflowError};
use crate::request::HttpMethod;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const INFO: &str = "info";
pub const LIST_SITES: &str = "list_sites";
pub const GET_SITE: &str = "get_site";
pub const PUBLISH_SITE: &str = "publish_site";
pub const LIST_DOMAINS: &str = "list_domains";
pub const LIST_COLLECTIONS: &str = "list_collections";
pub const GET_COLLECTION: &str = "get_collection";
pub const LIST_ITEMS: &str = "list_items";
pub const GET_ITEM: &str = "get_item";
pub const CREATE_ITEM: &str = "create_item";
pub const UPDATE_ITEM: &str = "update_item";
pub const PATCH_ITEM: &str = "patch_item";
pub const REMOVE_ITEM: &str = "remove_item";
pub const LIST_WEBHOOKS: &str = "list_webhooks";
pub const GET_WEBHOOK: &str = "get_webhook";
pub const CREATE_WEBHOOK: &str = "create_webhook";
pub const REMOVE_WEBHOOK: &str = "remove_webhook";

/// Verbo + template de path de um recurso
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub method: HttpMethod,
    pub path: String,
}

impl Route {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    /// Substitui os placeholders `{nome}` pelos valores informados
    ///
    /// Os valores são percent-encoded, então um ID com `/` não escapa do segmento.
    ///
    /// ```rust
    /// use webflow::{HttpMethod, Route};
    ///
    /// let route = Route::new(HttpMethod::Get, "collections/{collection_id}/items/{item_id}");
    /// let path = route.render(&[("collection_id", "abc"), ("item_id", "42")]).unwrap();
    /// assert_eq!(path, "collections/abc/items/42");
    /// ```
    pub fn render(&self, params: &[(&str, &str)]) -> Result<String> {
        let mut rendered = String::with_capacity(self.path.len());
        let mut rest = self.path.as_str();

        while let Some(start) = rest.find('{') {
            rendered.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = after.find('}').ok_or_else(|| {
                WebflowError::Validation(format!("unterminated placeholder in '{}'", self.path))
            })?;
            let name = &after[..end];

            let value = params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value)
                .ok_or_else(|| WebflowError::MissingPathParam(name.to_string()))?;

            rendered.push_str(&urlencoding::encode(value));
            rest = &after[end + 1..];
        }

        rendered.push_str(rest);
        Ok(rendered)
    }
}

/// Mapeamento nome → [`Route`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
    routes: BTreeMap<String, Route>,
}

impl RouteTable {
    /// Tabela vazia, para quem quer declarar tudo na configuração
    pub fn empty() -> Self {
        Self {
            routes: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, route: Route) -> Option<Route> {
        self.routes.insert(name.into(), route)
    }

    pub fn get(&self, name: &str) -> Option<&Route> {
        self.routes.get(name)
    }

    /// Busca a rota ou retorna [`WebflowError::UnknownRoute`]
    pub fn resolve(&self, name: &str) -> Result<&Route> {
        self.get(name)
            .ok_or_else(|| WebflowError::UnknownRoute(name.to_string()))
    }

    /// Acrescenta rotas; entradas com o mesmo nome são sobrescritas
    pub fn extend<I>(&mut self, routes: I)
    where
        I: IntoIterator<Item = (String, Route)>,
    {
        self.routes.extend(routes);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    /// Rotas da API v1 do Webflow
    fn default() -> Self {
        use HttpMethod::*;

        let defaults = [
            (INFO, Get, "info"),
            (LIST_SITES, Get, "sites"),
            (GET_SITE, Get, "sites/{site_id}"),
            (PUBLISH_SITE, Post, "sites/{site_id}/publish"),
            (LIST_DOMAINS, Get, "sites/{site_id}/domains"),
            (LIST_COLLECTIONS, Get, "sites/{site_id}/collections"),
            (GET_COLLECTION, Get, "collections/{collection_id}"),
            (LIST_ITEMS, Get, "collections/{collection_id}/items"),
            (GET_ITEM, Get, "collections/{collection_id}/items/{item_id}"),
            (CREATE_ITEM, Post, "collections/{collection_id}/items"),
            (UPDATE_ITEM, Put, "collections/{collection_id}/items/{item_id}"),
            (PATCH_ITEM, Patch, "collections/{collection_id}/items/{item_id}"),
            (REMOVE_ITEM, Delete, "collections/{collection_id}/items/{item_id}"),
            (LIST_WEBHOOKS, Get, "sites/{site_id}/webhooks"),
            (GET_WEBHOOK, Get, "sites/{site_id}/webhooks/{webhook_id}"),
            (CREATE_WEBHOOK, Post, "sites/{site_id}/webhooks"),
            (REMOVE_WEBHOOK, Delete, "sites/{site_id}/webhooks/{webhook_id}"),
        ];

        let mut table = Self::empty();
        for (name, method, path) in defaults {
            table.insert(name, Route::new(method, path));
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_covers_v1_resources() {
        let table = RouteTable::default();
        assert_eq!(table.len(), 17);

        let route = table.resolve(PATCH_ITEM).unwrap();
        assert_eq!(route.method, HttpMethod::Patch);
        assert_eq!(route.path, "collections/{collection_id}/items/{item_id}");
    }

    #[test]
    fn test_render_encodes_values() {
        let route = Route::new(HttpMethod::Get, "sites/{site_id}/webhooks/{webhook_id}");
        let path = route
            .render(&[("webhook_id", "a b/c"), ("site_id", "s1")])
            .unwrap();
        assert_eq!(path, "sites/s1/webhooks/a%20b%2Fc");
    }

    #[test]
    fn test_render_without_placeholders() {
        let route = Route::new(HttpMethod::Get, "info");
        assert_eq!(route.render(&[]).unwrap(), "info");
    }

    #[test]
    fn test_render_missing_param() {
        let route = Route::new(HttpMethod::Get, "sites/{site_id}");
        match route.render(&[("other", "x")]) {
            Err(WebflowError::MissingPathParam(name)) => assert_eq!(name, "site_id"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_render_unterminated_placeholder() {
        let route = Route::new(HttpMethod::Get, "sites/{site_id");
        assert!(matches!(
            route.render(&[("site_id", "x")]),
            Err(WebflowError::Validation(_))
        ));
    }

    #[test]
    fn test_unknown_route() {
        let table = RouteTable::empty();
        assert!(table.is_empty());
        assert!(matches!(
            table.resolve("list_sites"),
            Err(WebflowError::UnknownRoute(_))
        ));
    }

    #[test]
    fn test_extend_overrides_defaults() {
        let mut table = RouteTable::default();
        table.extend([
            (
                LIST_SITES.to_string(),
                Route::new(HttpMethod::Get, "v2/sites"),
            ),
            (
                "list_users".to_string(),
                Route::new(HttpMethod::Get, "sites/{site_id}/users"),
            ),
        ]);

        assert_eq!(table.len(), 18);
        assert_eq!(table.resolve(LIST_SITES).unwrap().path, "v2/sites");
        assert!(table.names().any(|name| name == "list_users"));
    }

    #[test]
    fn test_table_deserializes_from_json() {
        let table: RouteTable = serde_json::from_str(
            r#"{ "list_sites": { "method": "GET", "path": "sites" } }"#,
        )
        .unwrap();
        assert_eq!(
            table.get(LIST_SITES),
            Some(&Route::new(HttpMethod::Get, "sites"))
        );
    }
}
