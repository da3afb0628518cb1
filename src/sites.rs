//! Sites, domínios e publicação

use crate::client::WebflowClient;
use crate::error::Result;
use crate::routes;
use serde_json::{json, Value};

impl WebflowClient {
    /// Informações do token autorizado
    pub async fn info(&self) -> Result<Value> {
        self.call(routes::INFO, &[], &[], None).await
    }

    pub async fn list_sites(&self) -> Result<Value> {
        self.call(routes::LIST_SITES, &[], &[], None).await
    }

    pub async fn get_site(&self, site_id: &str) -> Result<Value> {
        self.call(routes::GET_SITE, &[("site_id", site_id)], &[], None)
            .await
    }

    /// Publica o site nos domínios informados
    ///
    /// Body enviado: `{"domains": [...]}`
    pub async fn publish_site<S: AsRef<str>>(&self, site_id: &str, domains: &[S]) -> Result<Value> {
        let domains: Vec<&str> = domains.iter().map(AsRef::as_ref).collect();
        let body = json!({ "domains": domains });

        self.call(routes::PUBLISH_SITE, &[("site_id", site_id)], &[], Some(body))
            .await
    }

    pub async fn list_domains(&self, site_id: &str) -> Result<Value> {
        self.call(routes::LIST_DOMAINS, &[("site_id", site_id)], &[], None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::WebflowClient;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_sites_and_info() {
        let server = MockServer::start_async().await;
        let sites = server
            .mock_async(|when, then| {
                when.method(GET).path("/sites");
                then.status(200).json_body(json!([{ "_id": "s1" }]));
            })
            .await;
        let info = server
            .mock_async(|when, then| {
                when.method(GET).path("/info");
                then.status(200).json_body(json!({ "sites": ["s1"] }));
            })
            .await;

        let client = WebflowClient::builder("tok")
            .base_url(server.base_url())
            .build()
            .unwrap();

        assert_eq!(client.list_sites().await.unwrap()[0]["_id"], "s1");
        assert_eq!(client.info().await.unwrap()["sites"][0], "s1");
        sites.assert_async().await;
        info.assert_async().await;
    }

    #[tokio::test]
    async fn test_publish_site_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/sites/s1/publish")
                    .json_body(json!({ "domains": ["a.com", "b.webflow.io"] }));
                then.status(200).json_body(json!({ "queued": true }));
            })
            .await;

        let client = WebflowClient::builder("tok")
            .base_url(server.base_url())
            .build()
            .unwrap();

        let value = client
            .publish_site("s1", &["a.com", "b.webflow.io"])
            .await
            .unwrap();
        assert_eq!(value["queued"], true);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_site_and_domains() {
        let server = MockServer::start_async().await;
        let site = server
            .mock_async(|when, then| {
                when.method(GET).path("/sites/s1");
                then.status(200).json_body(json!({ "_id": "s1" }));
            })
            .await;
        let domains = server
            .mock_async(|when, then| {
                when.method(GET).path("/sites/s1/domains");
                then.status(200).json_body(json!([{ "name": "a.com" }]));
            })
            .await;

        let client = WebflowClient::builder("tok")
            .base_url(server.base_url())
            .build()
            .unwrap();

        client.get_site("s1").await.unwrap();
        let value = client.list_domains("s1").await.unwrap();
        assert_eq!(value[0]["name"], "a.com");
        site.assert_async().await;
        domains.assert_async().await;
    }
}
