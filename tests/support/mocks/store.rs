// tests/support/mocks/store.rs
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use project_board::domain::article::{Article, ArticleId, ArticleRepository, NewArticle};
use project_board::domain::auditing::AuditingFields;
use project_board::domain::comment::{
    ArticleComment, ArticleCommentId, ArticleCommentRepository, NewArticleComment,
};
use project_board::domain::errors::{DomainError, DomainResult};
use project_board::domain::pagination::{Page, PageRequest};
use project_board::domain::store::{BoardSession, BoardStore, TransactionMode};
use project_board::domain::user::UserAccount;

use super::time::fixed_now;

/// 監査フィールドに書き込まれる名前
pub const TEST_AUDITOR: &str = "uno";

/// ストアに対して行われた呼び出しの記録
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Begin(TransactionMode),
    Commit,
    Rollback,
    FindAll,
    FindByTitleContaining(String),
    FindByContentContaining(String),
    FindByUserIdContaining(String),
    FindByNicknameContaining(String),
    FindByHashtag(String),
    FindById(i64),
    FindAllDistinctHashtags,
    Count,
    InsertArticle(NewArticle),
    UpdateArticle(Article),
    DeleteArticle(i64),
    FindCommentsByArticleId(i64),
    InsertComment(NewArticleComment),
    DeleteComment(i64),
}

impl StoreCall {
    pub fn is_repository_call(&self) -> bool {
        !matches!(self, Self::Begin(_) | Self::Commit | Self::Rollback)
    }
}

#[derive(Debug, Clone, Default)]
struct Tables {
    accounts: HashMap<i64, UserAccount>,
    articles: BTreeMap<i64, Article>,
    comments: BTreeMap<i64, ArticleComment>,
    last_article_id: i64,
    last_comment_id: i64,
}

#[derive(Debug, Default)]
struct Shared {
    tables: Tables,
    calls: Vec<StoreCall>,
    hashtags: Option<Vec<String>>,
    count: Option<u64>,
    failure: Option<String>,
}

/// メモリ上のストア。セッションは開始時点のテーブルのコピーで作業し、
/// `commit` で書き戻す。全ての呼び出しを記録する。
#[derive(Clone, Default)]
pub struct InMemoryBoardStore {
    shared: Arc<Mutex<Shared>>,
}

impl InMemoryBoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(self, account: UserAccount) -> Self {
        self.shared
            .lock()
            .unwrap()
            .tables
            .accounts
            .insert(account.id.into(), account);
        self
    }

    /// 記事を直接登録する（呼び出しとしては記録しない）
    pub fn seed_article(&self, article: Article) {
        let mut shared = self.shared.lock().unwrap();
        let tables = &mut shared.tables;
        let id: i64 = article.id.into();
        tables.last_article_id = tables.last_article_id.max(id);
        tables
            .accounts
            .entry(article.user_account.id.into())
            .or_insert_with(|| article.user_account.clone());
        tables.articles.insert(id, article);
    }

    pub fn seed_comment(&self, comment: ArticleComment) {
        let mut shared = self.shared.lock().unwrap();
        let tables = &mut shared.tables;
        let id: i64 = comment.id.into();
        tables.last_comment_id = tables.last_comment_id.max(id);
        tables.comments.insert(id, comment);
    }

    /// `find_all_distinct_hashtags` の戻り値を固定する
    pub fn set_hashtags(&self, hashtags: Vec<String>) {
        self.shared.lock().unwrap().hashtags = Some(hashtags);
    }

    /// `count` の戻り値を固定する
    pub fn set_count(&self, count: u64) {
        self.shared.lock().unwrap().count = Some(count);
    }

    /// 以降のリポジトリ呼び出しを全て失敗させる
    pub fn fail_repository_calls(&self, message: impl Into<String>) {
        self.shared.lock().unwrap().failure = Some(message.into());
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.shared.lock().unwrap().calls.clone()
    }

    /// トランザクション制御を除いた呼び出し
    pub fn repository_calls(&self) -> Vec<StoreCall> {
        self.calls()
            .into_iter()
            .filter(StoreCall::is_repository_call)
            .collect()
    }

    pub fn article(&self, id: i64) -> Option<Article> {
        self.shared.lock().unwrap().tables.articles.get(&id).cloned()
    }

    pub fn article_count(&self) -> usize {
        self.shared.lock().unwrap().tables.articles.len()
    }

    pub fn comments(&self) -> Vec<ArticleComment> {
        self.shared
            .lock()
            .unwrap()
            .tables
            .comments
            .values()
            .cloned()
            .collect()
    }
}

#[async_trait]
impl BoardStore for InMemoryBoardStore {
    async fn begin(&self, mode: TransactionMode) -> DomainResult<Box<dyn BoardSession>> {
        let tables = {
            let mut shared = self.shared.lock().unwrap();
            shared.calls.push(StoreCall::Begin(mode));
            shared.tables.clone()
        };
        Ok(Box::new(InMemorySession {
            shared: Arc::clone(&self.shared),
            tables,
            mode,
        }))
    }
}

struct InMemorySession {
    shared: Arc<Mutex<Shared>>,
    tables: Tables,
    mode: TransactionMode,
}

impl InMemorySession {
    fn record(&self, call: StoreCall) -> DomainResult<()> {
        let mut shared = self.shared.lock().unwrap();
        shared.calls.push(call);
        match &shared.failure {
            Some(message) => Err(DomainError::persistence(message.clone())),
            None => Ok(()),
        }
    }

    fn ensure_writable(&self) -> DomainResult<()> {
        match self.mode {
            TransactionMode::ReadWrite => Ok(()),
            TransactionMode::ReadOnly => Err(DomainError::persistence(
                "cannot execute write in a read-only transaction",
            )),
        }
    }

    fn page_of(&self, pageable: &PageRequest, filter: impl Fn(&Article) -> bool) -> Page<Article> {
        let mut matched: Vec<Article> = self
            .tables
            .articles
            .values()
            .filter(|article| filter(article))
            .cloned()
            .collect();
        matched.sort_by(|a, b| {
            b.auditing
                .created_at
                .cmp(&a.auditing.created_at)
                .then(b.id.cmp(&a.id))
        });

        let total = matched.len() as u64;
        let content = matched
            .into_iter()
            .skip(pageable.offset() as usize)
            .take(pageable.size() as usize)
            .collect();
        Page::new(content, pageable, total)
    }
}

#[async_trait]
impl ArticleRepository for InMemorySession {
    async fn find_all(&mut self, pageable: &PageRequest) -> DomainResult<Page<Article>> {
        self.record(StoreCall::FindAll)?;
        Ok(self.page_of(pageable, |_| true))
    }

    async fn find_by_title_containing(
        &mut self,
        title: &str,
        pageable: &PageRequest,
    ) -> DomainResult<Page<Article>> {
        self.record(StoreCall::FindByTitleContaining(title.to_string()))?;
        Ok(self.page_of(pageable, |a| a.title.as_str().contains(title)))
    }

    async fn find_by_content_containing(
        &mut self,
        content: &str,
        pageable: &PageRequest,
    ) -> DomainResult<Page<Article>> {
        self.record(StoreCall::FindByContentContaining(content.to_string()))?;
        Ok(self.page_of(pageable, |a| a.content.as_str().contains(content)))
    }

    async fn find_by_user_id_containing(
        &mut self,
        user_id: &str,
        pageable: &PageRequest,
    ) -> DomainResult<Page<Article>> {
        self.record(StoreCall::FindByUserIdContaining(user_id.to_string()))?;
        Ok(self.page_of(pageable, |a| {
            a.user_account.user_id.as_str().contains(user_id)
        }))
    }

    async fn find_by_nickname_containing(
        &mut self,
        nickname: &str,
        pageable: &PageRequest,
    ) -> DomainResult<Page<Article>> {
        self.record(StoreCall::FindByNicknameContaining(nickname.to_string()))?;
        Ok(self.page_of(pageable, |a| {
            a.user_account
                .nickname
                .as_deref()
                .is_some_and(|n| n.contains(nickname))
        }))
    }

    async fn find_by_hashtag(
        &mut self,
        hashtag: &str,
        pageable: &PageRequest,
    ) -> DomainResult<Page<Article>> {
        self.record(StoreCall::FindByHashtag(hashtag.to_string()))?;
        Ok(self.page_of(pageable, |a| {
            a.hashtag.as_ref().is_some_and(|h| h.as_str() == hashtag)
        }))
    }

    async fn find_by_id(&mut self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.record(StoreCall::FindById(id.into()))?;
        Ok(self.tables.articles.get(&i64::from(id)).cloned())
    }

    async fn find_all_distinct_hashtags(&mut self) -> DomainResult<Vec<String>> {
        self.record(StoreCall::FindAllDistinctHashtags)?;
        if let Some(hashtags) = self.shared.lock().unwrap().hashtags.clone() {
            return Ok(hashtags);
        }
        let mut hashtags: Vec<String> = self
            .tables
            .articles
            .values()
            .filter_map(|a| a.hashtag.as_ref().map(|h| h.as_str().to_string()))
            .collect();
        hashtags.sort();
        hashtags.dedup();
        Ok(hashtags)
    }

    async fn count(&mut self) -> DomainResult<u64> {
        self.record(StoreCall::Count)?;
        let fixed = self.shared.lock().unwrap().count;
        Ok(fixed.unwrap_or(self.tables.articles.len() as u64))
    }

    async fn insert(&mut self, article: NewArticle) -> DomainResult<Article> {
        self.record(StoreCall::InsertArticle(article.clone()))?;
        self.ensure_writable()?;

        let account = self
            .tables
            .accounts
            .get(&i64::from(article.user_account_id))
            .cloned()
            .ok_or_else(|| DomainError::NotFound("user account not found".into()))?;

        self.tables.last_article_id += 1;
        let id = self.tables.last_article_id;
        let saved = Article {
            id: ArticleId::new(id)?,
            user_account: account,
            title: article.title,
            content: article.content,
            hashtag: article.hashtag,
            auditing: AuditingFields::created(fixed_now(), TEST_AUDITOR),
        };
        self.tables.articles.insert(id, saved.clone());
        Ok(saved)
    }

    async fn update(&mut self, article: &Article) -> DomainResult<Article> {
        self.record(StoreCall::UpdateArticle(article.clone()))?;
        self.ensure_writable()?;

        let stored = self
            .tables
            .articles
            .get_mut(&i64::from(article.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        stored.title = article.title.clone();
        stored.content = article.content.clone();
        stored.hashtag = article.hashtag.clone();
        stored.auditing.touch(fixed_now(), TEST_AUDITOR);
        Ok(stored.clone())
    }

    async fn delete_by_id(&mut self, id: ArticleId) -> DomainResult<()> {
        self.record(StoreCall::DeleteArticle(id.into()))?;
        self.ensure_writable()?;

        self.tables.articles.remove(&i64::from(id));
        self.tables.comments.retain(|_, c| c.article_id != id);
        Ok(())
    }
}

#[async_trait]
impl ArticleCommentRepository for InMemorySession {
    async fn find_by_article_id(
        &mut self,
        article_id: ArticleId,
    ) -> DomainResult<Vec<ArticleComment>> {
        self.record(StoreCall::FindCommentsByArticleId(article_id.into()))?;
        let mut comments: Vec<ArticleComment> = self
            .tables
            .comments
            .values()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| {
            a.auditing
                .created_at
                .cmp(&b.auditing.created_at)
                .then(a.id.cmp(&b.id))
        });
        Ok(comments)
    }

    async fn insert(&mut self, comment: NewArticleComment) -> DomainResult<ArticleComment> {
        self.record(StoreCall::InsertComment(comment.clone()))?;
        self.ensure_writable()?;

        if !self
            .tables
            .articles
            .contains_key(&i64::from(comment.article_id))
        {
            return Err(DomainError::NotFound("article not found".into()));
        }

        self.tables.last_comment_id += 1;
        let id = self.tables.last_comment_id;
        let saved = ArticleComment {
            id: ArticleCommentId::new(id)?,
            article_id: comment.article_id,
            content: comment.content,
            auditing: AuditingFields::created(fixed_now(), TEST_AUDITOR),
        };
        self.tables.comments.insert(id, saved.clone());
        Ok(saved)
    }

    async fn delete_by_id(&mut self, id: ArticleCommentId) -> DomainResult<()> {
        self.record(StoreCall::DeleteComment(id.into()))?;
        self.ensure_writable()?;

        self.tables.comments.remove(&i64::from(id));
        Ok(())
    }
}

#[async_trait]
impl BoardSession for InMemorySession {
    fn articles(&mut self) -> &mut dyn ArticleRepository {
        self
    }

    fn comments(&mut self) -> &mut dyn ArticleCommentRepository {
        self
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        let InMemorySession { shared, tables, .. } = *self;
        let mut shared = shared.lock().unwrap();
        shared.calls.push(StoreCall::Commit);
        shared.tables = tables;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> DomainResult<()> {
        self.shared.lock().unwrap().calls.push(StoreCall::Rollback);
        Ok(())
    }
}
