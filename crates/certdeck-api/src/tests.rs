//! Router tests against an in-memory store.

use std::sync::Arc;

use axum::{
  body::Body,
  http::{Request, StatusCode, header},
  response::Response,
};
use certdeck_core::catalog::Catalog;
use certdeck_store_memory::MemoryStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::api_router;

fn sample_store() -> Arc<MemoryStore> { Arc::new(MemoryStore::with_catalog(Catalog::sample())) }

async fn send(
  store: &Arc<MemoryStore>,
  method: &str,
  uri: &str,
  body: Option<&str>,
) -> Response {
  let mut builder = Request::builder().method(method).uri(uri);
  if body.is_some() {
    builder = builder.header(header::CONTENT_TYPE, "application/json");
  }
  let req = builder
    .body(Body::from(body.unwrap_or_default().to_string()))
    .unwrap();
  api_router(store.clone()).oneshot(req).await.unwrap()
}

async fn body_text(resp: Response) -> String {
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(resp: Response) -> Value { serde_json::from_str(&body_text(resp).await).unwrap() }

fn ids(value: &Value) -> Vec<&str> {
  value
    .as_array()
    .unwrap()
    .iter()
    .map(|r| r["id"].as_str().unwrap())
    .collect()
}

fn azure_body(title: &str) -> String {
  json!({
    "title": title,
    "description": "Cloud concepts, services and solutions",
    "url": "https://learn.microsoft.com/certifications/azure-fundamentals",
    "date": "2024-01-15",
    "status": "Active",
  })
  .to_string()
}

// ── Platforms ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn platforms_lists_metadata_and_counts() {
  let store = sample_store();
  let resp = send(&store, "GET", "/platforms", None).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let body = body_json(resp).await;
  let entries = body.as_array().unwrap();
  assert_eq!(entries.len(), 5);
  assert_eq!(entries[0]["platform"], "microsoft_learn");
  assert_eq!(entries[0]["name"], "Microsoft Learn");
  assert_eq!(entries[0]["count"], 2);
  assert_eq!(entries[4]["platform"], "custom");
  assert_eq!(entries[4]["count"], 0);
}

// ── Query ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_applies_search_status_and_sort() {
  let store = sample_store();

  let resp = send(&store, "GET", "/platforms/microsoft_learn/records", None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(ids(&body_json(resp).await), ["ms-1", "ms-2"]);

  let resp = send(&store, "GET", "/platforms/microsoft_learn/records?sort=date-desc", None).await;
  assert_eq!(ids(&body_json(resp).await), ["ms-2", "ms-1"]);

  let resp = send(&store, "GET", "/platforms/microsoft_learn/records?q=DEVOPS", None).await;
  assert_eq!(ids(&body_json(resp).await), ["ms-2"]);

  let resp = send(&store, "GET", "/platforms/microsoft_learn/records?status=In%20Progress", None).await;
  assert_eq!(ids(&body_json(resp).await), ["ms-2"]);

  let resp = send(&store, "GET", "/platforms/microsoft_learn/records?status=all&q=gcp", None).await;
  assert!(ids(&body_json(resp).await).is_empty());
}

#[tokio::test]
async fn list_rejects_unknown_parameters() {
  let store = sample_store();
  for uri in [
    "/platforms/linkedin/records",
    "/platforms/custom/records?sort=newest",
    "/platforms/custom/records?status=Pending",
  ] {
    let resp = send(&store, "GET", uri, None).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    assert!(body_json(resp).await["error"].is_string());
  }
}

// ── CRUD ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_then_fetch() {
  let store = Arc::new(MemoryStore::new());
  let resp = send(&store, "POST", "/platforms/microsoft_learn/records", Some(&azure_body("Azure Fundamentals"))).await;
  assert_eq!(resp.status(), StatusCode::CREATED);

  let created = body_json(resp).await;
  let id = created["id"].as_str().unwrap().to_string();
  assert!(id.starts_with("microsoft_learn-"), "{id}");
  assert_eq!(created["status"], "Active");

  let resp = send(&store, "GET", &format!("/platforms/microsoft_learn/records/{id}"), None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(body_json(resp).await, created);

  let resp = send(&store, "GET", "/platforms/microsoft_learn/records?q=azure&sort=title-asc", None).await;
  assert_eq!(ids(&body_json(resp).await), [id.as_str()]);
}

#[tokio::test]
async fn create_with_blank_title_is_unprocessable() {
  let store = Arc::new(MemoryStore::new());
  let resp = send(&store, "POST", "/platforms/custom/records", Some(&azure_body("  "))).await;
  assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
  assert_eq!(body_json(resp).await["error"], "title is required");

  let resp = send(&store, "GET", "/platforms/custom/records", None).await;
  assert!(ids(&body_json(resp).await).is_empty());
}

#[tokio::test]
async fn malformed_bodies_use_json_errors() {
  let store = sample_store();

  let resp = send(&store, "POST", "/platforms/custom/records", Some("{not json")).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert!(body_json(resp).await["error"].is_string());

  let resp = send(&store, "POST", "/platforms/custom/records", Some(r#"{"title":"Only a title"}"#)).await;
  assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
  assert!(body_json(resp).await["error"].as_str().unwrap().contains("description"));

  let resp = send(&store, "POST", "/platforms/microsoft_learn/records/ms-2/move", Some("[]")).await;
  assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
  assert!(body_json(resp).await["error"].is_string());

  let req = Request::builder()
    .method("PATCH")
    .uri("/platforms/microsoft_learn/records/ms-1")
    .body(Body::from(r#"{"status":"Expired"}"#))
    .unwrap();
  let resp = api_router(store.clone()).oneshot(req).await.unwrap();
  assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
  assert!(body_json(resp).await["error"].is_string());

  let resp = send(&store, "GET", "/platforms/custom/records", None).await;
  assert!(ids(&body_json(resp).await).is_empty());
}

#[tokio::test]
async fn patch_merges_and_validates() {
  let store = sample_store();

  let resp = send(&store, "PATCH", "/platforms/microsoft_learn/records/ms-2", Some(r#"{"status":"Active"}"#)).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let updated = body_json(resp).await;
  assert_eq!(updated["status"], "Active");
  assert_eq!(updated["title"], "DevOps Engineer Expert");

  let resp = send(&store, "PATCH", "/platforms/microsoft_learn/records/ms-2", Some(r#"{"url":""}"#)).await;
  assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

  let resp = send(&store, "PATCH", "/platforms/microsoft_learn/records/nope", Some("{}")).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_missing() {
  let store = sample_store();

  let resp = send(&store, "DELETE", "/platforms/microsoft_learn/records/ms-1", None).await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);

  let resp = send(&store, "DELETE", "/platforms/microsoft_learn/records/ms-1", None).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);

  let resp = send(&store, "GET", "/platforms/microsoft_learn/records/ms-1", None).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);

  let resp = send(&store, "GET", "/platforms/microsoft_learn/records", None).await;
  assert_eq!(ids(&body_json(resp).await), ["ms-2"]);
}

#[tokio::test]
async fn move_reorders_sequence() {
  let store = sample_store();

  let resp = send(&store, "POST", "/platforms/microsoft_learn/records/ms-2/move", Some(r#"{"before_id":"ms-1"}"#)).await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);

  let resp = send(&store, "GET", "/platforms/microsoft_learn/records", None).await;
  assert_eq!(ids(&body_json(resp).await), ["ms-2", "ms-1"]);

  let resp = send(&store, "POST", "/platforms/microsoft_learn/records/ms-2/move", Some(r#"{"before_id":"gs-1"}"#)).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ── Generate ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn generate_returns_html_and_css() {
  let store = sample_store();
  let resp = send(&store, "GET", "/platforms/google_skills/generate", None).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let body = body_json(resp).await;
  let html = body["html"].as_str().unwrap();
  assert!(html.contains("<h3>Google Cloud Associate</h3>"));
  assert!(body["css"].as_str().unwrap().contains("#4285F4"));
}

#[tokio::test]
async fn generate_for_empty_platform_is_unprocessable() {
  let store = sample_store();
  let resp = send(&store, "GET", "/platforms/custom/generate", None).await;
  assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ── Export / import ─────────────────────────────────────────────────────────

#[tokio::test]
async fn export_is_a_named_attachment_with_etag() {
  let store = sample_store();
  let resp = send(&store, "GET", "/export", None).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let disposition = resp.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_string();
  assert!(disposition.starts_with("attachment; filename=\"certifications-"), "{disposition}");
  assert!(disposition.ends_with(".json\""));
  let etag = resp.headers()[header::ETAG].to_str().unwrap().to_string();

  let body = body_text(resp).await;
  assert_eq!(Catalog::from_json(&body).unwrap(), Catalog::sample());

  let req = Request::builder()
    .uri("/export")
    .header(header::IF_NONE_MATCH, etag.as_str())
    .body(Body::empty())
    .unwrap();
  let resp = api_router(store.clone()).oneshot(req).await.unwrap();
  assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
}

#[tokio::test]
async fn export_import_round_trip_through_http() {
  let source = sample_store();
  let exported = body_text(send(&source, "GET", "/export", None).await).await;

  let target = Arc::new(MemoryStore::new());
  let resp = send(&target, "POST", "/import", Some(&exported)).await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);

  let reexported = body_text(send(&target, "GET", "/export", None).await).await;
  assert_eq!(reexported, exported);
}

#[tokio::test]
async fn malformed_import_is_rejected_without_change() {
  let store = sample_store();
  let before = body_text(send(&store, "GET", "/export", None).await).await;

  for bad in ["{not json", r#"{"linkedin":[]}"#, r#"{"custom":[{"id":"x"}]}"#] {
    let resp = send(&store, "POST", "/import", Some(bad)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{bad}");
  }

  let after = body_text(send(&store, "GET", "/export", None).await).await;
  assert_eq!(after, before);
}
