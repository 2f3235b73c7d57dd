//! Prompt construction for the generation service.
//!
//! Maps each artifact kind to a fixed system/user prompt pair and sampling
//! temperature. The telegram prompt assumes it receives text that is already
//! in Russian and never asks the model to translate. Appending the source
//! link is a prompt-level instruction only: the model may or may not comply,
//! and nothing downstream verifies it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ReferentError;

/// The closed set of derived artifacts.
///
/// Wire names are the lowercase variant names; human-facing labels live in
/// [`Action::label`] and are applied only at the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// A short description of what the article is about.
    Summary,
    /// A numbered list of the article's key points.
    Theses,
    /// A compact social-media post based on the translated text.
    Telegram,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Summary, Action::Theses, Action::Telegram];

    /// Sampling temperature for this artifact kind. Fixed, not configurable.
    pub fn temperature(self) -> f32 {
        match self {
            Action::Summary => 0.3,
            Action::Theses => 0.4,
            Action::Telegram => 0.7,
        }
    }

    /// Russian button label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Action::Summary => "О чем статья?",
            Action::Theses => "Тезисы",
            Action::Telegram => "Пост для Telegram",
        }
    }
}

impl FromStr for Action {
    type Err = ReferentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" => Ok(Action::Summary),
            "theses" => Ok(Action::Theses),
            "telegram" => Ok(Action::Telegram),
            other => Err(ReferentError::InvalidAction(other.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Summary => "summary",
            Action::Theses => "theses",
            Action::Telegram => "telegram",
        };
        f.write_str(name)
    }
}

/// A complete request to the generation service.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub system: String,
    pub user: String,
    pub temperature: f32,
}

/// Builds prompts for translation and artifact generation.
///
/// The source-link trailer is a template with a `{url}` placeholder rather
/// than a hard-coded string; its exact shape has shifted between plain-text
/// and styled forms over the product's history.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    /// Trailer line the telegram prompt asks the model to append after all
    /// other content, `{url}` replaced by the article's source URL.
    pub source_trailer: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self { source_trailer: "📎 Источник: {url}".to_string() }
    }
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the source-link trailer template.
    pub fn with_trailer(template: impl Into<String>) -> Self {
        Self { source_trailer: template.into() }
    }

    /// English-to-Russian translation prompt. Structure-preserving, low
    /// temperature.
    pub fn translation(&self, text: &str) -> Prompt {
        Prompt {
            system: "You are a professional translator. Translate the following text from English \
                     to Russian, preserving structure and formatting."
                .to_string(),
            user: format!("Translate to Russian:\n\n{}", text),
            temperature: 0.3,
        }
    }

    /// Prompt for one of the three derived artifacts.
    ///
    /// `source_url` only affects [`Action::Telegram`]; when present the user
    /// prompt instructs the model to append the trailer after the hashtags.
    pub fn artifact(&self, action: Action, text: &str, source_url: Option<&str>) -> Prompt {
        let (system, user) = match action {
            Action::Summary => (
                "Ты опытный аналитик и рецензент научных статей. Твоя задача - кратко и точно \
                 описать содержание статьи."
                    .to_string(),
                format!(
                    "Прочитай следующую статью и напиши краткое описание на русском языке \
                     (2-3 предложения). О чем эта статья? Что в ней рассматривается?\n\n{}",
                    text
                ),
            ),
            Action::Theses => (
                "Ты эксперт по анализу научных текстов. Твоя задача - извлечь основные тезисы и \
                 ключевые моменты из статьи."
                    .to_string(),
                format!(
                    "Прочитай следующую статью и извлеки основные тезисы. Представь их в виде \
                     нумерованного списка на русском языке. Каждый тезис должен быть кратким и \
                     информативным.\n\n{}",
                    text
                ),
            ),
            Action::Telegram => (
                "Ты профессиональный копирайтер для Telegram. Твоя задача - создавать КОРОТКИЕ, \
                 интересные посты для социальной сети на русском языке. ВАЖНО: Ты получаешь УЖЕ \
                 ПЕРЕВЕДЕННЫЙ на русский язык текст статьи. Создай на его основе НОВЫЙ пост, \
                 который кратко передает суть. Пост должен быть компактным (не более 300-400 \
                 слов), с эмодзи, хештегами и ссылкой на источник."
                    .to_string(),
                self.telegram_user_prompt(text, source_url),
            ),
        };

        Prompt { system, user, temperature: action.temperature() }
    }

    fn telegram_user_prompt(&self, text: &str, source_url: Option<&str>) -> String {
        let source_link = match source_url {
            Some(url) => format!(
                "\n\nОБЯЗАТЕЛЬНО: В самом конце поста, после всех хештегов, добавь ссылку на \
                 источник в формате:\n\n{}",
                self.source_trailer.replace("{url}", url)
            ),
            None => String::new(),
        };

        format!(
            "Создай КОРОТКИЙ пост для Telegram на русском языке на основе следующего \
             переведенного текста статьи.\n\n\
             ВАЖНО:\n\
             - Ты получаешь УЖЕ ПЕРЕВЕДЕННЫЙ на русский язык текст\n\
             - НЕ копируй текст дословно\n\
             - Создай НОВЫЙ оригинальный пост, который кратко передает суть и основные идеи\n\
             - Пост должен быть интересным и привлекающим внимание\n\
             - Используй эмодзи для визуального оформления (🔷, 📌, ✅, ⚠️, 🚀 и т.д.)\n\
             - Добавь релевантные хештеги в конце (3-5 хештегов)\n\
             - Пост должен быть компактным (не более 300-400 слов)\n\
             - Пиши на русском языке, создавай новый текст на основе переведенного{}\n\n\
             Переведенный текст статьи для анализа:\n{}",
            source_link, text
        )
    }
}
