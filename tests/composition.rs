// Composition tests — the article workflow wired to an in-memory database.
//
// A recording extractor stands in for word frequency where the test cares
// about *what the workflow asked for* rather than what came back.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use inkpress::articles::{ArticleError, ArticleService, CreateArticle, UpdateArticle};
use inkpress::db::models::{ArticleStatus, BlogArticle, NewArticle};
use inkpress::db::Database;
use inkpress::keywords::banned::BannedWords;
use inkpress::keywords::frequency::FrequencyExtractor;
use inkpress::keywords::traits::KeywordExtractor;

/// Records every call and returns a fixed keyword list.
#[derive(Default)]
struct RecordingExtractor {
    calls: Mutex<Vec<(String, Vec<String>, usize)>>,
    reply: Vec<String>,
}

impl KeywordExtractor for RecordingExtractor {
    fn extract(&self, text: &str, banned: &BannedWords, limit: usize) -> Vec<String> {
        self.calls.lock().unwrap().push((
            text.to_string(),
            banned.iter().map(str::to_string).collect(),
            limit,
        ));
        self.reply.clone()
    }
}

/// Delegates to a real database but replays what a concurrent writer can do
/// between the service's read and its write.
struct InterleavedDatabase {
    inner: Arc<dyn Database>,
    /// Slug pre-checks always pass, as if the rival insert had not landed yet.
    stale_slug_check: bool,
    /// The article disappears right before its cover is recorded.
    lose_cover_target: bool,
}

#[async_trait]
impl Database for InterleavedDatabase {
    async fn table_count(&self) -> anyhow::Result<i64> {
        self.inner.table_count().await
    }
    async fn insert_article(&self, article: &NewArticle) -> anyhow::Result<i64> {
        self.inner.insert_article(article).await
    }
    async fn get_article(&self, id: i64) -> anyhow::Result<Option<BlogArticle>> {
        self.inner.get_article(id).await
    }
    async fn list_articles(&self, status: Option<ArticleStatus>) -> anyhow::Result<Vec<BlogArticle>> {
        self.inner.list_articles(status).await
    }
    async fn update_article(&self, article: &BlogArticle) -> anyhow::Result<bool> {
        self.inner.update_article(article).await
    }
    async fn set_status(&self, id: i64, status: ArticleStatus) -> anyhow::Result<bool> {
        self.inner.set_status(id, status).await
    }
    async fn set_cover_picture(&self, id: i64, file_name: &str) -> anyhow::Result<bool> {
        if self.lose_cover_target {
            return Ok(false);
        }
        self.inner.set_cover_picture(id, file_name).await
    }
    async fn slug_taken(&self, slug: &str, exclude_id: Option<i64>) -> anyhow::Result<bool> {
        if self.stale_slug_check {
            return Ok(false);
        }
        self.inner.slug_taken(slug, exclude_id).await
    }
    async fn status_counts(&self) -> anyhow::Result<Vec<(String, i64)>> {
        self.inner.status_counts().await
    }
}

fn interleaved_service(
    stale_slug_check: bool,
    lose_cover_target: bool,
    uploads: &std::path::Path,
) -> ArticleService {
    let db = InterleavedDatabase {
        inner: inkpress::db::open_in_memory().unwrap(),
        stale_slug_check,
        lose_cover_target,
    };
    ArticleService::new(
        Arc::new(db),
        Arc::new(FrequencyExtractor),
        BannedWords::new(["thor"]),
        3,
        uploads,
    )
}

fn service_with(extractor: Arc<dyn KeywordExtractor>) -> ArticleService {
    let db = inkpress::db::open_in_memory().unwrap();
    ArticleService::new(
        db,
        extractor,
        BannedWords::new(["thor"]),
        3,
        std::env::temp_dir().join("inkpress-composition-unused"),
    )
}

fn service() -> ArticleService {
    service_with(Arc::new(FrequencyExtractor))
}

fn create_request(title: &str, content: &str) -> CreateArticle {
    CreateArticle {
        author_id: 1,
        title: title.to_string(),
        content: content.to_string(),
        status: "draft".to_string(),
        publication_date: None,
    }
}

#[tokio::test]
async fn create_passes_content_and_banned_list_to_extractor() {
    let extractor = Arc::new(RecordingExtractor {
        reply: vec!["test".to_string(), "content".to_string()],
        ..Default::default()
    });
    let articles = service_with(extractor.clone());

    let article = articles
        .create(create_request("Test Title", "Test Content"))
        .await
        .unwrap();

    assert_eq!(article.keywords, vec!["test", "content"]);
    let calls = extractor.calls.lock().unwrap();
    assert_eq!(
        *calls,
        vec![("Test Content".to_string(), vec!["thor".to_string()], 3)]
    );
}

#[tokio::test]
async fn banned_content_never_reaches_extractor_or_storage() {
    let extractor = Arc::new(RecordingExtractor::default());
    let articles = service_with(extractor.clone());

    let err = articles
        .create(create_request("Test Title", "Test Content with thor"))
        .await
        .unwrap_err();

    match err {
        ArticleError::BannedWord(rejected) => assert_eq!(rejected.word, "thor"),
        other => panic!("expected banned word rejection, got {other:?}"),
    }
    assert!(extractor.calls.lock().unwrap().is_empty());
    assert!(articles.list(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn create_derives_slug_keywords_and_defaults() {
    let articles = service();
    let article = articles
        .create(create_request(
            "Borrowing in Rust",
            "borrow the value, borrow it again, then move the value",
        ))
        .await
        .unwrap();

    assert_eq!(article.slug, "borrowing-in-rust");
    assert_eq!(article.keywords, vec!["borrow", "the", "value"]);
    assert_eq!(article.status, ArticleStatus::Draft);
    assert!(article.cover_picture_ref.is_none());
}

#[tokio::test]
async fn create_reports_every_violation() {
    let articles = service();
    let err = articles
        .create(CreateArticle {
            author_id: 0,
            title: "   ".to_string(),
            content: "fine".to_string(),
            status: "pending".to_string(),
            publication_date: Some("not a date".to_string()),
        })
        .await
        .unwrap_err();

    match err {
        ArticleError::Invalid(violations) => assert_eq!(violations.len(), 4),
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[tokio::test]
async fn duplicate_slug_is_rejected() {
    let articles = service();
    articles
        .create(create_request("Same Title", "first body"))
        .await
        .unwrap();
    let err = articles
        .create(create_request("same   title!", "second body"))
        .await
        .unwrap_err();
    assert!(matches!(err, ArticleError::SlugTaken(slug) if slug == "same-title"));
}

#[tokio::test]
async fn slug_race_on_create_is_a_conflict_not_a_storage_error() {
    let uploads = tempfile::tempdir().unwrap();
    let articles = interleaved_service(true, false, uploads.path());
    articles
        .create(create_request("Same Title", "first body"))
        .await
        .unwrap();

    let err = articles
        .create(create_request("Same Title", "second body"))
        .await
        .unwrap_err();

    assert!(matches!(&err, ArticleError::SlugTaken(slug) if slug == "same-title"));
    assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    assert_eq!(articles.list(None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn slug_race_on_update_is_a_conflict_not_a_storage_error() {
    let uploads = tempfile::tempdir().unwrap();
    let articles = interleaved_service(true, false, uploads.path());
    articles
        .create(create_request("Taken", "first body"))
        .await
        .unwrap();
    let other = articles
        .create(create_request("Other", "second body"))
        .await
        .unwrap();

    let err = articles
        .update(
            other.id,
            UpdateArticle {
                title: Some("Taken".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(&err, ArticleError::SlugTaken(slug) if slug == "taken"));
    assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    assert_eq!(articles.get(other.id).await.unwrap(), other);
}

#[tokio::test]
async fn update_regenerates_slug_and_keywords() {
    let articles = service();
    let created = articles
        .create(create_request("Test Title", "Test Content"))
        .await
        .unwrap();

    let updated = articles
        .update(
            created.id,
            UpdateArticle {
                title: Some("Updated Title".to_string()),
                content: Some("Updated Content updated".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.slug, "updated-title");
    assert_eq!(updated.keywords, vec!["updated", "content"]);
    assert_eq!(updated.creation_date, created.creation_date);
    assert_eq!(articles.get(created.id).await.unwrap(), updated);
}

#[tokio::test]
async fn update_with_banned_content_leaves_article_untouched() {
    let articles = service();
    let created = articles
        .create(create_request("Test Title", "Test Content"))
        .await
        .unwrap();

    let err = articles
        .update(
            created.id,
            UpdateArticle {
                title: Some("New Title".to_string()),
                content: Some("all hail THOR".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "The word 'thor' is not allowed in the content."
    );
    assert_eq!(articles.get(created.id).await.unwrap(), created);
}

#[tokio::test]
async fn status_only_update_keeps_keywords() {
    let extractor = Arc::new(RecordingExtractor {
        reply: vec!["kept".to_string()],
        ..Default::default()
    });
    let articles = service_with(extractor.clone());
    let created = articles
        .create(create_request("Title", "Body"))
        .await
        .unwrap();

    let updated = articles
        .update(
            created.id,
            UpdateArticle {
                status: Some("published".to_string()),
                publication_date: Some("2024-10-22".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, ArticleStatus::Published);
    assert_eq!(updated.keywords, vec!["kept"]);
    // Only the create call reached the extractor
    assert_eq!(extractor.calls.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn delete_is_soft() {
    let articles = service();
    let created = articles
        .create(create_request("Doomed", "short lived"))
        .await
        .unwrap();

    articles.delete(created.id).await.unwrap();

    assert!(articles.list(None).await.unwrap().is_empty());
    let deleted = articles.list(Some(ArticleStatus::Deleted)).await.unwrap();
    assert_eq!(deleted.len(), 1);
    assert_eq!(
        articles.get(created.id).await.unwrap().status,
        ArticleStatus::Deleted
    );
}

#[tokio::test]
async fn missing_articles_are_not_found() {
    let articles = service();
    assert!(matches!(articles.get(999).await, Err(ArticleError::NotFound)));
    assert!(matches!(articles.delete(999).await, Err(ArticleError::NotFound)));
    assert!(matches!(
        articles.update(999, UpdateArticle::default()).await,
        Err(ArticleError::NotFound)
    ));
}

#[tokio::test]
async fn attach_cover_writes_file_and_records_name() {
    let uploads = tempfile::tempdir().unwrap();
    let articles = ArticleService::new(
        inkpress::db::open_in_memory().unwrap(),
        Arc::new(FrequencyExtractor),
        BannedWords::default(),
        3,
        uploads.path(),
    );
    let created = articles
        .create(create_request("With Cover", "pictures"))
        .await
        .unwrap();

    let updated = articles
        .attach_cover(created.id, "image/png", b"\x89PNG fake")
        .await
        .unwrap();

    let file_name = updated.cover_picture_ref.unwrap();
    assert!(file_name.ends_with(".png"));
    let stored = std::fs::read(uploads.path().join(&file_name)).unwrap();
    assert_eq!(stored, b"\x89PNG fake");

    let err = articles
        .attach_cover(created.id, "text/plain", b"nope")
        .await
        .unwrap_err();
    assert!(matches!(err, ArticleError::UnsupportedMedia(_)));
}

#[tokio::test]
async fn cover_file_is_removed_when_article_vanishes() {
    let uploads = tempfile::tempdir().unwrap();
    let articles = interleaved_service(false, true, uploads.path());
    let created = articles
        .create(create_request("Short Lived", "pictures"))
        .await
        .unwrap();

    let err = articles
        .attach_cover(created.id, "image/png", b"\x89PNG fake")
        .await
        .unwrap_err();

    assert!(matches!(err, ArticleError::NotFound));
    let leftovers = std::fs::read_dir(uploads.path()).unwrap().count();
    assert_eq!(leftovers, 0);
}
