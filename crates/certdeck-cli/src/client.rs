//! Async HTTP client wrapping the certdeck JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use certdeck_core::{
  platform::Platform,
  query::{SortKey, StatusFilter},
  record::{CertificationRecord, NewRecord, RecordPatch},
};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::json;

/// Connection settings for the certdeck API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// One row of `GET /api/platforms`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformSummary {
  pub platform: Platform,
  pub name:     String,
  pub color:    String,
  pub icon:     String,
  pub count:    usize,
}

/// Body of `GET /api/platforms/{p}/generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedCode {
  pub html: String,
  pub css:  String,
}

#[derive(Deserialize)]
struct ErrorBody {
  error: String,
}

/// Async HTTP client for the certdeck JSON REST API.
///
/// Cheap to clone: the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/api{}", self.config.base_url.trim_end_matches('/'), path)
  }

  /// Turn a non-2xx response into an error carrying the server's message.
  async fn check(resp: Response, what: &str) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
      return Ok(resp);
    }
    let text = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
      .map(|b| b.error)
      .unwrap_or(text);
    Err(anyhow!("{what} → {status}: {message}"))
  }

  // ── Platforms ─────────────────────────────────────────────────────────────

  /// `GET /api/platforms`
  pub async fn platforms(&self) -> Result<Vec<PlatformSummary>> {
    let resp = self
      .client
      .get(self.url("/platforms"))
      .send()
      .await
      .context("GET /platforms failed")?;
    let resp = Self::check(resp, "GET /platforms").await?;
    resp.json().await.context("deserialising platforms")
  }

  // ── Records ───────────────────────────────────────────────────────────────

  /// `GET /api/platforms/<p>/records?q=&status=&sort=`
  pub async fn list(
    &self,
    platform: Platform,
    search: Option<&str>,
    status: StatusFilter,
    sort: SortKey,
  ) -> Result<Vec<CertificationRecord>> {
    let mut params = vec![("status", status.to_string()), ("sort", sort.to_string())];
    if let Some(q) = search {
      params.push(("q", q.to_string()));
    }
    let resp = self
      .client
      .get(self.url(&format!("/platforms/{platform}/records")))
      .query(&params)
      .send()
      .await
      .context("GET /records failed")?;
    let resp = Self::check(resp, "GET /records").await?;
    resp.json().await.context("deserialising records")
  }

  /// `GET /api/platforms/<p>/records/<id>`
  pub async fn get(&self, platform: Platform, id: &str) -> Result<CertificationRecord> {
    let resp = self
      .client
      .get(self.url(&format!("/platforms/{platform}/records/{id}")))
      .send()
      .await
      .context("GET /records/{id} failed")?;
    let resp = Self::check(resp, "GET /records/{id}").await?;
    resp.json().await.context("deserialising record")
  }

  /// `POST /api/platforms/<p>/records`
  pub async fn add(&self, platform: Platform, record: &NewRecord) -> Result<CertificationRecord> {
    let resp = self
      .client
      .post(self.url(&format!("/platforms/{platform}/records")))
      .json(record)
      .send()
      .await
      .context("POST /records failed")?;
    let resp = Self::check(resp, "POST /records").await?;
    resp.json().await.context("deserialising created record")
  }

  /// `PATCH /api/platforms/<p>/records/<id>`
  pub async fn update(
    &self,
    platform: Platform,
    id: &str,
    patch: &RecordPatch,
  ) -> Result<CertificationRecord> {
    let resp = self
      .client
      .patch(self.url(&format!("/platforms/{platform}/records/{id}")))
      .json(patch)
      .send()
      .await
      .context("PATCH /records/{id} failed")?;
    let resp = Self::check(resp, "PATCH /records/{id}").await?;
    resp.json().await.context("deserialising updated record")
  }

  /// `DELETE /api/platforms/<p>/records/<id>`
  pub async fn remove(&self, platform: Platform, id: &str) -> Result<()> {
    let resp = self
      .client
      .delete(self.url(&format!("/platforms/{platform}/records/{id}")))
      .send()
      .await
      .context("DELETE /records/{id} failed")?;
    Self::check(resp, "DELETE /records/{id}").await?;
    Ok(())
  }

  /// `POST /api/platforms/<p>/records/<id>/move`
  pub async fn reorder(&self, platform: Platform, id: &str, before_id: &str) -> Result<()> {
    let resp = self
      .client
      .post(self.url(&format!("/platforms/{platform}/records/{id}/move")))
      .json(&json!({ "before_id": before_id }))
      .send()
      .await
      .context("POST /move failed")?;
    Self::check(resp, "POST /move").await?;
    Ok(())
  }

  // ── Generate ──────────────────────────────────────────────────────────────

  /// `GET /api/platforms/<p>/generate`
  pub async fn generate(&self, platform: Platform) -> Result<GeneratedCode> {
    let resp = self
      .client
      .get(self.url(&format!("/platforms/{platform}/generate")))
      .send()
      .await
      .context("GET /generate failed")?;
    let resp = Self::check(resp, "GET /generate").await?;
    resp.json().await.context("deserialising generated code")
  }

  // ── Transfer ──────────────────────────────────────────────────────────────

  /// `GET /api/export`: the raw JSON document.
  pub async fn export(&self) -> Result<String> {
    let resp = self
      .client
      .get(self.url("/export"))
      .send()
      .await
      .context("GET /export failed")?;
    let resp = Self::check(resp, "GET /export").await?;
    resp.text().await.context("reading export body")
  }

  /// `POST /api/import`
  pub async fn import(&self, document: String) -> Result<()> {
    let resp = self
      .client
      .post(self.url("/import"))
      .header(reqwest::header::CONTENT_TYPE, "application/json")
      .body(document)
      .send()
      .await
      .context("POST /import failed")?;
    Self::check(resp, "POST /import").await?;
    Ok(())
  }
}
