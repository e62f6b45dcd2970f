//! Doctor, pharmacy and lab search plus the health article feed.
//!
//! Searches are public and never end the session. The article feed goes
//! through the authenticated transport.

use crate::error::ClientError;
use crate::models::{Article, Doctor, Lab, Pharmacy};
use crate::transport::{ApiClient, HttpBackend, RequestOptions};

fn search_path(route: &str, query: &str) -> String {
    format!("{}?q={}", route, urlencoding::encode(query))
}

impl<B: HttpBackend> ApiClient<B> {
    pub async fn search_doctors(&self, query: &str) -> Result<Vec<Doctor>, ClientError> {
        self.public_get(&search_path("/doctors/search", query), "Failed to fetch doctors")
            .await
    }

    pub async fn search_pharmacies(&self, query: &str) -> Result<Vec<Pharmacy>, ClientError> {
        self.public_get(
            &search_path("/pharmacies/search", query),
            "Failed to fetch pharmacies",
        )
        .await
    }

    pub async fn search_labs(&self, query: &str) -> Result<Vec<Lab>, ClientError> {
        self.public_get(&search_path("/labs/search", query), "Failed to fetch labs")
            .await
    }

    pub async fn articles(&self) -> Result<Vec<Article>, ClientError> {
        Ok(self
            .call_as("/articles", RequestOptions::get())
            .await?
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use store::MemoryStore;

    use super::*;
    use crate::auth::SessionStore;
    use crate::transport::mock::MockBackend;

    fn client(backend: MockBackend) -> ApiClient<MockBackend> {
        let session = SessionStore::new(Arc::new(MemoryStore::new()));
        session.initialize();
        ApiClient::with_backend("http://api.test", session, backend)
    }

    #[test]
    fn test_query_is_percent_encoded() {
        assert_eq!(search_path("/labs/search", "x-ray & ct"), "/labs/search?q=x-ray%20%26%20ct");
        assert_eq!(search_path("/doctors/search", ""), "/doctors/search?q=");
    }

    #[tokio::test]
    async fn test_search_doctors() {
        let body = r#"[{"id":"d1","name":"Dr. Rao","specialty":"Cardiology","experience":12,"available_slots":null,"average_rating":4.6,"review_count":8}]"#;
        let api = client(MockBackend::new().respond(200, body));

        let doctors = api.search_doctors("car").await.unwrap();
        assert_eq!(doctors.len(), 1);
        assert_eq!(doctors[0].filled_stars(), 5);
        assert!(doctors[0].available_slots.is_empty());

        let sent = api.backend().last_request().unwrap();
        assert_eq!(sent.url, "http://api.test/doctors/search?q=car");
        assert!(sent.header("Authorization").is_none());
    }

    #[tokio::test]
    async fn test_search_failure_fallback() {
        let api = client(MockBackend::new().respond(502, "bad gateway"));
        let err = api.search_doctors("car").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch doctors");
    }

    #[tokio::test]
    async fn test_search_pharmacies_and_labs() {
        let api = client(
            MockBackend::new()
                .respond(200, r#"[{"id":"p1","name":"City Pharmacy","address":"1 Main St"}]"#)
                .respond(200, r#"[]"#),
        );

        let pharmacies = api.search_pharmacies("city").await.unwrap();
        assert_eq!(pharmacies[0].name, "City Pharmacy");
        let labs = api.search_labs("blood").await.unwrap();
        assert!(labs.is_empty());

        let urls: Vec<String> = api.backend().requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                "http://api.test/pharmacies/search?q=city".to_string(),
                "http://api.test/labs/search?q=blood".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_articles_author_fallback() {
        let body = r#"[
            {"id":"1","title":"Sleep well","content":"...","author":"Dr. Mehta"},
            {"id":"2","title":"Hydrate","content":"...","author":null}
        ]"#;
        let api = client(MockBackend::new().respond(200, body));

        let articles = api.articles().await.unwrap();
        assert_eq!(articles[0].byline(), "Dr. Mehta");
        assert_eq!(articles[1].byline(), "OPD Nexus Team");
    }
}
