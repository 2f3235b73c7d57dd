//! Request handlers for the three pipeline endpoints.
//!
//! Each endpoint is stateless: the browser client keeps the article and its
//! translation between calls, so every request carries the full text it
//! operates on. Field validation always runs before any outbound call.

use axum::Json;
use referent_core::{Action, FetchConfig, Generator, ParsedArticle, PromptBuilder, extract, fetch_url};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::ApiError;

#[derive(Deserialize)]
pub struct ParseRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Serialize)]
pub struct TranslateResponse {
    pub translation: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub result: String,
}

fn required(field: Option<String>, message: &str) -> Result<String, ApiError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::bad_request(message)),
    }
}

/// `POST /api/parse`: fetch a URL and extract `{title, date, content}`.
pub async fn parse_article(Json(req): Json<ParseRequest>) -> Result<Json<ParsedArticle>, ApiError> {
    let url = required(req.url, "URL не предоставлен")?;
    tracing::info!(%url, "parsing article");

    let html = fetch_url(&url, &FetchConfig::default()).await?;
    Ok(Json(extract(&html)))
}

/// `POST /api/translate`: translate English text to Russian.
pub async fn translate(Json(req): Json<TranslateRequest>) -> Result<Json<TranslateResponse>, ApiError> {
    let text = required(req.text, "Текст для перевода не предоставлен")?;

    let generator = Generator::new(config::generate_config())?;
    let prompt = PromptBuilder::new().translation(&text);
    let translation = generator.complete(&prompt).await?;
    Ok(Json(TranslateResponse { translation }))
}

/// `POST /api/analyze`: derive a summary, thesis list, or telegram post
/// from already-translated text.
pub async fn analyze(Json(req): Json<AnalyzeRequest>) -> Result<Json<AnalyzeResponse>, ApiError> {
    let text = required(req.text, "Текст для анализа не предоставлен")?;
    let action: Action = required(req.action, "Действие не указано")?.parse()?;
    tracing::info!(%action, "analyzing text");

    let generator = Generator::new(config::generate_config())?;
    let prompt = PromptBuilder::new().artifact(action, &text, req.source_url.as_deref());
    let result = generator.complete(&prompt).await?;
    Ok(Json(AnalyzeResponse { result }))
}
