//! Pipeline orchestration.
//!
//! [`Session`] owns all per-user pipeline state (the extracted article, the
//! cached translation, the last artifact, the current phase, and the last
//! error) and drives the strictly sequential flow fetch → extract →
//! translate → (artifact). A single in-flight flag guards the fetch+translate
//! leg: a second trigger while one is outstanding is silently dropped, not
//! queued. Artifact requests carry no such guard by design; each renders
//! independently into the same display slot, so the last response wins.

use crate::extract::{ParsedArticle, extract};
use crate::fetch::{FetchConfig, fetch_url};
use crate::generate::Generator;
use crate::prompt::{Action, PromptBuilder};
use crate::{ReferentError, Result};

/// Where the pipeline currently is. `error` is tracked separately so the
/// session always lands back in `Idle`, ready for a manual re-trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Fetching,
    Translating,
    Analyzing,
}

/// Session-scoped pipeline state and sequencing.
///
/// One instance per user session. All mutation goes through the methods
/// below; there is no hidden shared state.
pub struct Session {
    article: Option<ParsedArticle>,
    translated: Option<String>,
    last_artifact: Option<String>,
    phase: Phase,
    error: Option<String>,
    in_flight: bool,
    fetch_config: FetchConfig,
    prompts: PromptBuilder,
    generator: Generator,
}

impl Session {
    pub fn new(generator: Generator) -> Self {
        Self::with_configs(generator, FetchConfig::default(), PromptBuilder::default())
    }

    pub fn with_configs(generator: Generator, fetch_config: FetchConfig, prompts: PromptBuilder) -> Self {
        Self {
            article: None,
            translated: None,
            last_artifact: None,
            phase: Phase::Idle,
            error: None,
            in_flight: false,
            fetch_config,
            prompts,
            generator,
        }
    }

    /// The most recent extraction, if a leg has completed.
    pub fn article(&self) -> Option<&ParsedArticle> {
        self.article.as_ref()
    }

    /// The cached translation artifact requests operate on.
    pub fn translated(&self) -> Option<&str> {
        self.translated.as_deref()
    }

    /// The most recently generated artifact.
    pub fn last_artifact(&self) -> Option<&str> {
        self.last_artifact.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Message of the last failed action, cleared when a new one starts.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Runs the fetch → extract → translate leg for a URL.
    ///
    /// Returns `Ok(None)` without doing anything when a leg is already in
    /// flight. On failure no partial translation is kept: artifact requests
    /// stay blocked until a leg succeeds.
    pub async fn fetch_and_translate(&mut self, url: &str) -> Result<Option<String>> {
        if !self.try_begin() {
            tracing::debug!(url, "fetch already in flight, dropping trigger");
            return Ok(None);
        }

        let result = self.run_leg(url).await;
        self.finish();

        match result {
            Ok(translated) => Ok(Some(translated)),
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    async fn run_leg(&mut self, url: &str) -> Result<String> {
        self.error = None;
        self.phase = Phase::Fetching;
        tracing::info!(url, "fetching article");
        let html = fetch_url(url, &self.fetch_config).await?;

        let article = extract(&html);

        self.phase = Phase::Translating;
        tracing::info!("translating extracted article");
        let prompt = self.prompts.translation(&label_for_translation(&article));
        let translated = self.generator.complete(&prompt).await?;

        self.article = Some(article);
        self.translated = Some(translated.clone());
        Ok(translated)
    }

    /// Generates one derived artifact from the cached translation.
    ///
    /// Requires a completed fetch+translate leg; this is a precondition, not
    /// something to retry around. The cached translation is never mutated;
    /// repeated artifact requests all read the same text.
    pub async fn artifact(&mut self, action: Action, source_url: Option<&str>) -> Result<String> {
        let Some(text) = self.translated.clone() else {
            return Err(ReferentError::ArticleNotLoaded);
        };

        self.error = None;
        self.phase = Phase::Analyzing;
        tracing::info!(action = %action, "generating artifact");
        let prompt = self.prompts.artifact(action, &text, source_url);
        let result = self.generator.complete(&prompt).await;
        self.phase = Phase::Idle;

        match result {
            Ok(artifact) => {
                self.last_artifact = Some(artifact.clone());
                Ok(artifact)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Clears all pipeline state back to idle. Configuration survives.
    pub fn reset(&mut self) {
        self.article = None;
        self.translated = None;
        self.last_artifact = None;
        self.phase = Phase::Idle;
        self.error = None;
        self.in_flight = false;
    }

    fn try_begin(&mut self) -> bool {
        if self.in_flight {
            false
        } else {
            self.in_flight = true;
            true
        }
    }

    fn finish(&mut self) {
        self.in_flight = false;
        self.phase = Phase::Idle;
    }
}

/// Joins the extracted fields with Russian labels for the translation call.
pub fn label_for_translation(article: &ParsedArticle) -> String {
    format!(
        "Заголовок: {}\nДата: {}\n\nТекст: {}",
        article.title, article.date, article.content
    )
}
