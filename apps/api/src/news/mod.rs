//! Tech news feed — top headlines shown next to the analysis.
//!
//! Peripheral data source: the analysis core never calls it. Upstream failures
//! degrade to an empty list rather than failing the request.
//!
//! `AppState` holds an `Arc<dyn NewsFeed>` so tests and alternative sources
//! can be swapped in.

pub mod handlers;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

#[derive(Debug, Error)]
pub enum NewsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(u16),
}

/// A single headline, as served to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: u64,
    pub title: String,
    pub url: Option<String>,
    pub score: u32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub time: DateTime<Utc>,
    #[serde(rename = "type")]
    pub story_type: String,
    pub by: String,
}

#[async_trait]
pub trait NewsFeed: Send + Sync {
    /// Up to `limit` top stories; empty when the source is unavailable.
    async fn top_stories(&self, limit: usize) -> Vec<Story>;
}

// ────────────────────────────────────────────────────────────────────────────
// Hacker News client
// ────────────────────────────────────────────────────────────────────────────

// Raw item shape. Deleted or dead items omit most fields.
#[derive(Debug, Deserialize)]
struct HnItem {
    id: u64,
    title: Option<String>,
    url: Option<String>,
    score: Option<u32>,
    time: Option<i64>,
    #[serde(rename = "type")]
    item_type: Option<String>,
    by: Option<String>,
    #[serde(default)]
    deleted: bool,
    #[serde(default)]
    dead: bool,
}

impl HnItem {
    fn into_story(self) -> Option<Story> {
        if self.deleted || self.dead {
            return None;
        }
        Some(Story {
            id: self.id,
            title: self.title?,
            url: self.url,
            score: self.score.unwrap_or(0),
            time: DateTime::from_timestamp(self.time?, 0)?,
            story_type: self.item_type.unwrap_or_else(|| "story".to_string()),
            by: self.by.unwrap_or_default(),
        })
    }
}

#[derive(Clone)]
pub struct HackerNewsClient {
    client: Client,
    base_url: String,
}

impl HackerNewsClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetches the top story ids, then the first `limit` items concurrently.
    /// Items that fail individually are skipped.
    pub async fn fetch_top_stories(&self, limit: usize) -> Result<Vec<Story>, NewsError> {
        let ids: Vec<u64> = self
            .get_json(&format!("{}/topstories.json", self.base_url))
            .await?;

        let items = join_all(ids.into_iter().take(limit).map(|id| self.fetch_item(id))).await;

        let stories: Vec<Story> = items
            .into_iter()
            .filter_map(|item| match item {
                Ok(item) => item.and_then(HnItem::into_story),
                Err(e) => {
                    debug!("Skipping news item: {e}");
                    None
                }
            })
            .collect();

        Ok(stories)
    }

    async fn fetch_item(&self, id: u64) -> Result<Option<HnItem>, NewsError> {
        self.get_json(&format!("{}/item/{id}.json", self.base_url))
            .await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, NewsError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::Status(status.as_u16()));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl NewsFeed for HackerNewsClient {
    async fn top_stories(&self, limit: usize) -> Vec<Story> {
        match self.fetch_top_stories(limit).await {
            Ok(stories) => stories,
            Err(e) => {
                warn!("News feed unavailable: {e}");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::{
        extract::Path, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
    };
    use serde_json::json;

    fn parse(json: &str) -> Option<Story> {
        serde_json::from_str::<HnItem>(json).unwrap().into_story()
    }

    #[test]
    fn test_item_maps_to_story() {
        let story = parse(
            r#"{"by":"dhouston","descendants":71,"id":8863,"score":111,
                "time":1175714200,"title":"My YC app: Dropbox","type":"story",
                "url":"http://www.getdropbox.com/u/2/screencast.html"}"#,
        )
        .unwrap();
        assert_eq!(story.id, 8863);
        assert_eq!(story.title, "My YC app: Dropbox");
        assert_eq!(story.by, "dhouston");
        assert_eq!(story.score, 111);
        assert_eq!(story.time.timestamp(), 1175714200);
        assert_eq!(story.story_type, "story");
    }

    #[test]
    fn test_ask_item_without_url() {
        let story =
            parse(r#"{"id":1,"title":"Ask HN: x","time":1,"type":"story","by":"a"}"#).unwrap();
        assert!(story.url.is_none());
        assert_eq!(story.score, 0);
    }

    #[test]
    fn test_deleted_item_is_skipped() {
        assert!(parse(r#"{"id":2,"deleted":true,"time":1}"#).is_none());
        assert!(parse(r#"{"id":3,"dead":true,"title":"t","time":1}"#).is_none());
    }

    #[test]
    fn test_item_without_title_is_skipped() {
        assert!(parse(r#"{"id":4,"time":1,"type":"comment","by":"a"}"#).is_none());
    }

    #[test]
    fn test_job_item_is_kept_with_its_type() {
        let story =
            parse(r#"{"id":5,"title":"t","time":1700000000,"type":"job","by":"b"}"#).unwrap();
        let json = serde_json::to_value(&story).unwrap();
        assert_eq!(json["time"], 1700000000);
        assert_eq!(json["type"], "job");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = HackerNewsClient::new("http://localhost:9/v0/", Duration::from_secs(1));
        assert_eq!(client.base_url, "http://localhost:9/v0");
    }

    // ── Local upstream ──────────────────────────────────────────────────────

    /// Serves `ids` as top stories; item 2 always fails with 500.
    /// Returns the base URL and a counter of item requests.
    async fn spawn_upstream(ids: Vec<u64>) -> (String, Arc<AtomicUsize>) {
        let item_hits = Arc::new(AtomicUsize::new(0));
        let hits = item_hits.clone();

        let app = Router::new()
            .route("/topstories.json", get(move || async move { Json(ids) }))
            .route(
                "/item/:file",
                get(move |Path(file): Path<String>| {
                    let hits = hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        let id: u64 = file.trim_end_matches(".json").parse().unwrap();
                        if id == 2 {
                            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
                        }
                        Json(json!({
                            "id": id,
                            "title": format!("Item {id}"),
                            "time": 1_700_000_000,
                            "type": "story",
                            "by": "pg",
                            "score": 10
                        }))
                        .into_response()
                    }
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}"), item_hits)
    }

    #[tokio::test]
    async fn test_top_stories_honours_limit_and_skips_failed_items() {
        let (base_url, item_hits) = spawn_upstream(vec![1, 2, 3, 4]).await;
        let client = HackerNewsClient::new(base_url, Duration::from_secs(5));

        let stories = client.top_stories(3).await;

        let ids: Vec<u64> = stories.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(stories[1].title, "Item 3");
        // item 4 lies beyond the limit and is never requested
        assert_eq!(item_hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_limit_larger_than_id_list() {
        let (base_url, _) = spawn_upstream(vec![3]).await;
        let client = HackerNewsClient::new(base_url, Duration::from_secs(5));

        let stories = client.fetch_top_stories(5).await.unwrap();
        assert_eq!(stories.len(), 1);
        assert_eq!(stories[0].id, 3);
    }

    #[tokio::test]
    async fn test_upstream_status_error_yields_empty_feed() {
        let (base_url, _) = spawn_upstream(vec![]).await;
        let client = HackerNewsClient::new(format!("{base_url}/missing"), Duration::from_secs(5));

        let err = client.fetch_top_stories(5).await.unwrap_err();
        assert!(matches!(err, NewsError::Status(404)));
        assert!(client.top_stories(5).await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_source_yields_empty_feed() {
        // port 9 (discard) is not listening in test environments
        let client = HackerNewsClient::new("http://127.0.0.1:9/v0", Duration::from_millis(500));
        assert!(client.top_stories(5).await.is_empty());
    }
}
