use crate::domain::article::{Article, ArticleId};
use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, SecondsFormat, Utc};

/// Position after the last article of a listing page, ordered by
/// `(created_at, id)` ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleListCursor {
    pub created_at: DateTime<Utc>,
    pub article_id: ArticleId,
}

impl ArticleListCursor {
    pub fn from_parts(created_at: DateTime<Utc>, article_id: ArticleId) -> Self {
        Self {
            created_at,
            article_id,
        }
    }

    pub fn after(article: &Article) -> Self {
        Self::from_parts(article.created_at, article.id.clone())
    }

    /// Whether `article` sorts strictly after this position.
    pub fn precedes(&self, article: &Article) -> bool {
        (article.created_at, &article.id) > (self.created_at, &self.article_id)
    }

    pub fn encode(&self) -> String {
        let raw = format!(
            "{}|{}",
            self.created_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            self.article_id
        );
        URL_SAFE_NO_PAD.encode(raw.as_bytes())
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        let invalid = || DomainError::Validation("invalid cursor token".into());

        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| invalid())?;
        let raw = String::from_utf8(bytes).map_err(|_| invalid())?;
        let (created_at, id) = raw.split_once('|').ok_or_else(invalid)?;
        let created_at = DateTime::parse_from_rfc3339(created_at)
            .map_err(|_| invalid())?
            .with_timezone(&Utc);
        let article_id = ArticleId::new(id).map_err(|_| invalid())?;
        Ok(Self::from_parts(created_at, article_id))
    }
}
