//! Error types for the article pipeline.
//!
//! This module defines [`ReferentError`], the single error type shared by the
//! fetch, extraction, generation, and orchestration layers. User-facing
//! variants carry finished Russian messages: callers surface `to_string()`
//! directly and never a raw transport error.

use thiserror::Error;

/// Classification of a non-2xx reply from the generation service.
///
/// The upstream status code is folded into one of a few human-meaningful
/// categories so the user sees "invalid key" or "quota exceeded" rather than
/// a bare status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamKind {
    /// 401: the API key is missing, revoked, or otherwise rejected.
    Auth,
    /// 402/403: account balance or usage limits exhausted.
    Quota,
    /// 429: too many requests.
    RateLimited,
    /// 5xx: the generation service itself failed.
    Server,
    /// Anything else.
    Other,
}

impl UpstreamKind {
    /// Buckets an HTTP status code into a category.
    pub fn classify(status: u16) -> Self {
        match status {
            401 => Self::Auth,
            402 | 403 => Self::Quota,
            429 => Self::RateLimited,
            500..=599 => Self::Server,
            _ => Self::Other,
        }
    }

    fn message(self, status: u16) -> String {
        match self {
            Self::Auth => "Неверный или недействительный API ключ. Проверьте ключ на \
                           https://openrouter.ai/settings/keys и убедитесь, что он активен."
                .to_string(),
            Self::Quota => "Превышен лимит использования API ключа. Проверьте баланс и лимиты на \
                            https://openrouter.ai/settings/keys"
                .to_string(),
            Self::RateLimited => "Превышена частота запросов к API. Повторите попытку позже.".to_string(),
            Self::Server => "Сбой на стороне сервиса генерации. Повторите попытку позже.".to_string(),
            Self::Other => format!("Ошибка API OpenRouter: {}", status),
        }
    }
}

/// Main error type for pipeline operations.
///
/// Every variant is terminal for the action that produced it: there is no
/// automatic retry anywhere, the user re-triggers manually.
#[derive(Error, Debug)]
pub enum ReferentError {
    /// The supplied URL could not be parsed or lacks an http(s) scheme.
    #[error("Некорректный URL: {0}")]
    InvalidUrl(String),

    /// The article page could not be loaded.
    ///
    /// Deliberately uniform: network-level detail stays out of the message.
    /// Carries the HTTP status when the server answered with one.
    #[error("Ошибка при загрузке страницы{}", match status { Some(s) => format!(": {}", s), None => String::new() })]
    FetchFailed { status: Option<u16> },

    /// An outbound call exceeded its deadline. Distinct from transport
    /// failure; no retry is attempted.
    #[error("Превышено время ожидания ответа ({timeout} с)")]
    Timeout { timeout: u64 },

    /// `OPENROUTER_API_KEY` is absent or blank.
    #[error("API ключ OpenRouter не настроен. Добавьте OPENROUTER_API_KEY в окружение")]
    MissingCredential,

    /// The requested action is outside the closed set.
    #[error("Неверный тип действия: {0}. Допустимые значения: summary, theses, telegram")]
    InvalidAction(String),

    /// Non-2xx reply from the generation service, already classified.
    #[error("{}", kind.message(*status))]
    Upstream { status: u16, kind: UpstreamKind },

    /// The generation service could not be reached at all.
    #[error("Ошибка при обращении к сервису генерации")]
    GenerationFailed,

    /// A 2xx reply that lacks the expected result field.
    #[error("Неожиданный формат ответа от API")]
    MalformedResponse,

    /// An artifact was requested before a successful fetch+translate leg.
    #[error("Статья еще не загружена и не переведена")]
    ArticleNotLoaded,
}

/// Result type alias for [`ReferentError`].
pub type Result<T> = std::result::Result<T, ReferentError>;
