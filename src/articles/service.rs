// ArticleService — create / update / delete / cover-upload orchestration.
//
// The banned list and keyword limit are plain values handed in at
// construction; the service holds no other state beyond its collaborators.
// Content is always gated before keywords are derived from it.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use tracing::{debug, info, warn};

use super::cover::{extension_for, random_file_name};
use super::slug::slugify;
use super::validate::{parse_publication_date, validate_fields};
use super::{ArticleError, CreateArticle, UpdateArticle};
use crate::config::Config;
use crate::db::models::{ArticleStatus, BlogArticle, NewArticle};
use crate::db::queries::SlugConflict;
use crate::db::Database;
use crate::keywords::banned::{check_content, BannedWords};
use crate::keywords::frequency::FrequencyExtractor;
use crate::keywords::traits::KeywordExtractor;

#[derive(Clone)]
pub struct ArticleService {
    db: Arc<dyn Database>,
    extractor: Arc<dyn KeywordExtractor>,
    banned: Arc<BannedWords>,
    keyword_limit: usize,
    uploads_dir: PathBuf,
}

impl ArticleService {
    pub fn new(
        db: Arc<dyn Database>,
        extractor: Arc<dyn KeywordExtractor>,
        banned: BannedWords,
        keyword_limit: usize,
        uploads_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            db,
            extractor,
            banned: Arc::new(banned),
            keyword_limit,
            uploads_dir: uploads_dir.into(),
        }
    }

    /// Build the service from configuration with the word-frequency extractor.
    pub fn from_config(config: &Config, db: Arc<dyn Database>) -> Self {
        Self::new(
            db,
            Arc::new(FrequencyExtractor),
            config.banned_words.clone(),
            config.keyword_limit,
            config.uploads_dir.clone(),
        )
    }

    pub fn banned_words(&self) -> &BannedWords {
        &self.banned
    }

    /// Keywords for arbitrary text, using the configured limit unless overridden.
    pub fn keywords_for(&self, text: &str, limit: Option<usize>) -> Vec<String> {
        self.extractor
            .extract(text, &self.banned, limit.unwrap_or(self.keyword_limit))
    }

    pub async fn list(&self, status: Option<ArticleStatus>) -> Result<Vec<BlogArticle>, ArticleError> {
        Ok(self.db.list_articles(status).await?)
    }

    pub async fn get(&self, id: i64) -> Result<BlogArticle, ArticleError> {
        self.db.get_article(id).await?.ok_or(ArticleError::NotFound)
    }

    pub async fn create(&self, request: CreateArticle) -> Result<BlogArticle, ArticleError> {
        self.gate(&request.content)?;

        let mut violations = Vec::new();

        let status = request
            .status
            .parse::<ArticleStatus>()
            .map_err(|e| violations.push(e))
            .ok();

        let publication_date = match request.publication_date.as_deref() {
            Some(raw) => parse_publication_date(raw).map_err(|e| violations.push(e)).ok(),
            None => Some(Utc::now()),
        };

        let slug = slugify(&request.title);
        violations.extend(validate_fields(
            request.author_id,
            &request.title,
            &slug,
            &request.content,
        ));

        let (true, Some(status), Some(publication_date)) =
            (violations.is_empty(), status, publication_date)
        else {
            return Err(ArticleError::Invalid(violations));
        };

        if self.db.slug_taken(&slug, None).await? {
            return Err(ArticleError::SlugTaken(slug));
        }

        let keywords = self.keywords_for(&request.content, None);

        let new_article = NewArticle {
            author_id: request.author_id,
            title: request.title,
            slug,
            content: request.content,
            keywords,
            status,
            publication_date,
        };

        let id = self
            .db
            .insert_article(&new_article)
            .await
            .map_err(storage_error)?;
        info!(
            id,
            slug = %new_article.slug,
            keywords = ?new_article.keywords,
            "Created blog article"
        );

        self.get(id).await
    }

    pub async fn update(&self, id: i64, patch: UpdateArticle) -> Result<BlogArticle, ArticleError> {
        let mut article = self.get(id).await?;

        if let Some(content) = patch.content.as_deref() {
            self.gate(content)?;
        }

        let mut violations = Vec::new();

        if let Some(title) = patch.title {
            article.slug = slugify(&title);
            article.title = title;
        }

        if let Some(content) = patch.content {
            article.keywords = self.keywords_for(&content, None);
            article.content = content;
        }

        if let Some(raw) = patch.status.as_deref() {
            match raw.parse::<ArticleStatus>() {
                Ok(status) => article.status = status,
                Err(e) => violations.push(e),
            }
        }

        if let Some(raw) = patch.publication_date.as_deref() {
            match parse_publication_date(raw) {
                Ok(date) => article.publication_date = date,
                Err(e) => violations.push(e),
            }
        }

        violations.extend(validate_fields(
            article.author_id,
            &article.title,
            &article.slug,
            &article.content,
        ));
        if !violations.is_empty() {
            return Err(ArticleError::Invalid(violations));
        }

        if self.db.slug_taken(&article.slug, Some(id)).await? {
            return Err(ArticleError::SlugTaken(article.slug));
        }

        if !self
            .db
            .update_article(&article)
            .await
            .map_err(storage_error)?
        {
            return Err(ArticleError::NotFound);
        }
        info!(id, slug = %article.slug, "Updated blog article");

        Ok(article)
    }

    /// Soft delete: the row stays, its status becomes `deleted`.
    pub async fn delete(&self, id: i64) -> Result<(), ArticleError> {
        if !self.db.set_status(id, ArticleStatus::Deleted).await? {
            return Err(ArticleError::NotFound);
        }
        info!(id, "Soft-deleted blog article");
        Ok(())
    }

    /// Store an uploaded cover picture and point the article at it.
    pub async fn attach_cover(
        &self,
        id: i64,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<BlogArticle, ArticleError> {
        // 404 before touching the filesystem
        self.get(id).await?;

        let extension = extension_for(content_type)
            .ok_or_else(|| ArticleError::UnsupportedMedia(content_type.to_string()))?;
        if bytes.is_empty() {
            return Err(ArticleError::Invalid(vec![
                "cover picture must not be empty".to_string(),
            ]));
        }

        let file_name = random_file_name(extension);
        tokio::fs::create_dir_all(&self.uploads_dir)
            .await
            .with_context(|| {
                format!(
                    "Failed to create uploads directory {}",
                    self.uploads_dir.display()
                )
            })?;
        let path = self.uploads_dir.join(&file_name);
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("Failed to write cover picture {}", path.display()))?;
        debug!(path = %path.display(), size = bytes.len(), "Wrote cover picture");

        // The article can vanish between the lookup and this write
        let recorded = match self.db.set_cover_picture(id, &file_name).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(ArticleError::NotFound),
            Err(e) => Err(ArticleError::Storage(e)),
        };
        if let Err(err) = recorded {
            if let Err(e) = tokio::fs::remove_file(&path).await {
                warn!(path = %path.display(), error = %e, "Failed to remove orphaned cover picture");
            }
            return Err(err);
        }
        info!(id, cover = %file_name, "Attached cover picture");

        self.get(id).await
    }

    fn gate(&self, content: &str) -> Result<(), ArticleError> {
        check_content(content, &self.banned).map_err(|rejected| {
            warn!(word = %rejected.word, "Rejected article content containing a banned word");
            ArticleError::from(rejected)
        })
    }
}

/// A write that lost a slug race surfaces as `SlugTaken`, not a storage failure.
fn storage_error(err: anyhow::Error) -> ArticleError {
    match err.downcast::<SlugConflict>() {
        Ok(SlugConflict(slug)) => ArticleError::SlugTaken(slug),
        Err(err) => ArticleError::Storage(err),
    }
}
