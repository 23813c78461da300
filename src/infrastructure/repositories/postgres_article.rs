// src/infrastructure/repositories/postgres_article.rs
use super::{map_sqlx, postgres_store::PostgresSession};
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleRepository, ArticleTitle, Hashtag, NewArticle,
};
use crate::domain::auditing::AuditingFields;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{ArticleSortProperty, Page, PageRequest, Sort};
use crate::domain::user::{LoginId, UserAccount, UserAccountId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Postgres, QueryBuilder};

macro_rules! article_columns {
    () => {
        "a.id, a.title, a.content, a.hashtag, \
         a.created_at, a.created_by, a.modified_at, a.modified_by, \
         u.id AS account_id, u.user_id AS account_user_id, \
         u.user_password AS account_user_password, u.email AS account_email, \
         u.nickname AS account_nickname, u.memo AS account_memo, \
         u.created_at AS account_created_at, u.created_by AS account_created_by, \
         u.modified_at AS account_modified_at, u.modified_by AS account_modified_by"
    };
}

macro_rules! join_account {
    () => {
        " JOIN user_account u ON u.id = a.user_account_id"
    };
}

const SELECT_ARTICLES: &str = concat!(
    "SELECT ",
    article_columns!(),
    " FROM article a",
    join_account!()
);
const COUNT_ARTICLES: &str = concat!("SELECT COUNT(*) FROM article a", join_account!());

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    hashtag: Option<String>,
    created_at: DateTime<Utc>,
    created_by: String,
    modified_at: DateTime<Utc>,
    modified_by: String,
    account_id: i64,
    account_user_id: String,
    account_user_password: String,
    account_email: Option<String>,
    account_nickname: Option<String>,
    account_memo: Option<String>,
    account_created_at: DateTime<Utc>,
    account_created_by: String,
    account_modified_at: DateTime<Utc>,
    account_modified_by: String,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            user_account: UserAccount {
                id: UserAccountId::new(row.account_id)?,
                user_id: LoginId::from_stored(row.account_user_id),
                user_password: row.account_user_password,
                email: row.account_email,
                nickname: row.account_nickname,
                memo: row.account_memo,
                auditing: AuditingFields {
                    created_at: row.account_created_at,
                    created_by: row.account_created_by,
                    modified_at: row.account_modified_at,
                    modified_by: row.account_modified_by,
                },
            },
            title: ArticleTitle::from_stored(row.title),
            content: ArticleContent::from_stored(row.content),
            hashtag: Hashtag::parse_optional(row.hashtag)?,
            auditing: AuditingFields {
                created_at: row.created_at,
                created_by: row.created_by,
                modified_at: row.modified_at,
                modified_by: row.modified_by,
            },
        })
    }
}

enum ArticleFilter<'q> {
    All,
    TitleContaining(&'q str),
    ContentContaining(&'q str),
    UserIdContaining(&'q str),
    NicknameContaining(&'q str),
    Hashtag(&'q str),
}

/// `LIKE` pattern matching `value` anywhere, with wildcards in `value` escaped.
fn contains_pattern(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

fn sort_column(property: ArticleSortProperty) -> &'static str {
    match property {
        ArticleSortProperty::Id => "a.id",
        ArticleSortProperty::Title => "a.title",
        ArticleSortProperty::Hashtag => "a.hashtag",
        ArticleSortProperty::UserId => "u.user_id",
        ArticleSortProperty::CreatedAt => "a.created_at",
        ArticleSortProperty::CreatedBy => "a.created_by",
        ArticleSortProperty::ModifiedAt => "a.modified_at",
    }
}

impl PostgresSession {
    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ArticleFilter<'_>) {
        let (column, pattern) = match filter {
            ArticleFilter::All => return,
            ArticleFilter::TitleContaining(value) => ("a.title", contains_pattern(value)),
            ArticleFilter::ContentContaining(value) => ("a.content", contains_pattern(value)),
            ArticleFilter::UserIdContaining(value) => ("u.user_id", contains_pattern(value)),
            ArticleFilter::NicknameContaining(value) => ("u.nickname", contains_pattern(value)),
            ArticleFilter::Hashtag(value) => {
                builder.push(" WHERE a.hashtag = ");
                builder.push_bind(value.to_string());
                return;
            }
        };

        builder.push(" WHERE ");
        builder.push(column);
        builder.push(" LIKE ");
        builder.push_bind(pattern);
        builder.push(" ESCAPE '\\'");
    }

    fn apply_ordering(builder: &mut QueryBuilder<'_, Postgres>, sort: &Sort) {
        if sort.is_unsorted() {
            builder.push(" ORDER BY a.created_at DESC, a.id DESC");
            return;
        }

        builder.push(" ORDER BY ");
        for order in sort.orders() {
            builder.push(sort_column(order.property));
            builder.push(" ");
            builder.push(order.direction.as_sql());
            builder.push(", ");
        }
        builder.push("a.id DESC");
    }

    async fn fetch_page(
        &mut self,
        filter: ArticleFilter<'_>,
        pageable: &PageRequest,
    ) -> DomainResult<Page<Article>> {
        let offset = i64::try_from(pageable.offset()).unwrap_or(i64::MAX);

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_ARTICLES);
        Self::apply_filter(&mut builder, &filter);
        Self::apply_ordering(&mut builder, pageable.sort());
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(pageable.size()));
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;

        let mut count_builder: QueryBuilder<Postgres> = QueryBuilder::new(COUNT_ARTICLES);
        Self::apply_filter(&mut count_builder, &filter);
        let total: i64 = count_builder
            .build_query_scalar::<i64>()
            .fetch_one(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(
            articles,
            pageable,
            u64::try_from(total).unwrap_or_default(),
        ))
    }
}

#[async_trait]
impl ArticleRepository for PostgresSession {
    async fn find_all(&mut self, pageable: &PageRequest) -> DomainResult<Page<Article>> {
        self.fetch_page(ArticleFilter::All, pageable).await
    }

    async fn find_by_title_containing(
        &mut self,
        title: &str,
        pageable: &PageRequest,
    ) -> DomainResult<Page<Article>> {
        self.fetch_page(ArticleFilter::TitleContaining(title), pageable)
            .await
    }

    async fn find_by_content_containing(
        &mut self,
        content: &str,
        pageable: &PageRequest,
    ) -> DomainResult<Page<Article>> {
        self.fetch_page(ArticleFilter::ContentContaining(content), pageable)
            .await
    }

    async fn find_by_user_id_containing(
        &mut self,
        user_id: &str,
        pageable: &PageRequest,
    ) -> DomainResult<Page<Article>> {
        self.fetch_page(ArticleFilter::UserIdContaining(user_id), pageable)
            .await
    }

    async fn find_by_nickname_containing(
        &mut self,
        nickname: &str,
        pageable: &PageRequest,
    ) -> DomainResult<Page<Article>> {
        self.fetch_page(ArticleFilter::NicknameContaining(nickname), pageable)
            .await
    }

    async fn find_by_hashtag(
        &mut self,
        hashtag: &str,
        pageable: &PageRequest,
    ) -> DomainResult<Page<Article>> {
        self.fetch_page(ArticleFilter::Hashtag(hashtag), pageable)
            .await
    }

    async fn find_by_id(&mut self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(concat!(
            "SELECT ",
            article_columns!(),
            " FROM article a",
            join_account!(),
            " WHERE a.id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_all_distinct_hashtags(&mut self) -> DomainResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT hashtag FROM article WHERE hashtag IS NOT NULL ORDER BY hashtag",
        )
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_sqlx)
    }

    async fn count(&mut self) -> DomainResult<u64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM article")
            .fetch_one(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn insert(&mut self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            user_account_id,
            title,
            content,
            hashtag,
        } = article;
        let (now, auditor) = self.audit_stamp();

        let row = sqlx::query_as::<_, ArticleRow>(concat!(
            "WITH a AS (
                INSERT INTO article
                    (user_account_id, title, content, hashtag, created_at, created_by, modified_at, modified_by)
                VALUES ($1, $2, $3, $4, $5, $6, $5, $6)
                RETURNING *
             ) SELECT ",
            article_columns!(),
            " FROM a",
            join_account!()
        ))
        .bind(i64::from(user_account_id))
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(hashtag.as_ref().map(Hashtag::as_str))
        .bind(now)
        .bind(auditor)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&mut self, article: &Article) -> DomainResult<Article> {
        let (now, auditor) = self.audit_stamp();
        let mut auditing = article.auditing.clone();
        auditing.touch(now, auditor);

        let row = sqlx::query_as::<_, ArticleRow>(concat!(
            "WITH a AS (
                UPDATE article
                SET title = $1, content = $2, hashtag = $3, modified_at = $4, modified_by = $5
                WHERE id = $6
                RETURNING *
             ) SELECT ",
            article_columns!(),
            " FROM a",
            join_account!()
        ))
        .bind(article.title.as_str())
        .bind(article.content.as_str())
        .bind(article.hashtag.as_ref().map(Hashtag::as_str))
        .bind(auditing.modified_at)
        .bind(auditing.modified_by.as_str())
        .bind(i64::from(article.id))
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        let row = row.ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        Article::try_from(row)
    }

    async fn delete_by_id(&mut self, id: ArticleId) -> DomainResult<()> {
        sqlx::query("DELETE FROM article WHERE id = $1")
            .bind(i64::from(id))
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}
