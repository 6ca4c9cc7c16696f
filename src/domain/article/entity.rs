// src/domain/article/entity.rs
use crate::domain::access::{PermissionAction, PermissionSubject};
use crate::domain::account::Account;
use crate::domain::article::value_objects::{Content, Slug, Title};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::identifier::Identifier;
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ArticleRecord {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: Arc<Account>,
}

/// Content entity. The slug is always derived from the current title and the id.
#[derive(Debug, Clone)]
pub struct Article {
    id: Identifier,
    title: Title,
    content: Content,
    slug: Slug,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author: Arc<Account>,
}

impl Article {
    pub fn create(
        author: &Arc<Account>,
        title: &str,
        content: &str,
        id: Identifier,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        author.ensure_can(
            PermissionAction::Create,
            PermissionSubject::Article,
            "You are not allowed to create articles",
        )?;

        let title = Title::new(title)?;
        let content = Content::new(content)?;
        let slug = Slug::from_title(title.as_str(), &id)?;

        Ok(Self {
            id,
            title,
            content,
            slug,
            created_at: now,
            updated_at: now,
            author: Arc::clone(author),
        })
    }

    pub fn restore(record: ArticleRecord) -> DomainResult<Self> {
        if record.updated_at < record.created_at {
            return Err(DomainError::validation(
                "Article cannot be updated before it was created",
            ));
        }

        let id = Identifier::new(&record.id)?;
        let title = Title::new(record.title)?;
        let slug = Slug::from_title(title.as_str(), &id)?;

        Ok(Self {
            id,
            title,
            content: Content::new(record.content)?,
            slug,
            created_at: record.created_at,
            updated_at: record.updated_at,
            author: record.author,
        })
    }

    /// Gated on `UPDATE:ARTICLE` alone; authorship is not required.
    pub fn update(
        &mut self,
        actor: &Account,
        title: Option<&str>,
        content: Option<&str>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        actor.ensure_can(
            PermissionAction::Update,
            PermissionSubject::Article,
            "You are not allowed to update articles",
        )?;

        let title = title
            .map(Title::new)
            .transpose()?
            .filter(|title| *title != self.title);
        let slug = title
            .as_ref()
            .map(|title| Slug::from_title(title.as_str(), &self.id))
            .transpose()?;
        let content = content
            .map(Content::new)
            .transpose()?
            .filter(|content| *content != self.content);

        let mut changed = false;
        if let (Some(title), Some(slug)) = (title, slug) {
            self.title = title;
            self.slug = slug;
            changed = true;
        }
        if let Some(content) = content {
            self.content = content;
            changed = true;
        }
        if changed {
            self.updated_at = now.max(self.created_at);
        }
        Ok(())
    }

    /// Gated on `DELETE:ARTICLE` alone; authorship is not required.
    pub fn can_be_deleted_by(&self, actor: &Account) -> bool {
        actor.has_permission(PermissionAction::Delete, PermissionSubject::Article)
    }

    pub fn ensure_deletable_by(&self, actor: &Account) -> DomainResult<()> {
        if self.can_be_deleted_by(actor) {
            Ok(())
        } else {
            Err(DomainError::forbidden(
                "You are not allowed to delete this article",
            ))
        }
    }

    pub const fn id(&self) -> Identifier {
        self.id
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    pub fn slug(&self) -> &str {
        self.slug.as_str()
    }

    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn author(&self) -> &Arc<Account> {
        &self.author
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::access::{Permission, Role};
    use crate::domain::account::AccountRecord;
    use chrono::{Duration, TimeZone};

    const ARTICLE_ID: &str = "c4d5e6f7-a8b9-4c0d-9e1f-2a3b4c5d6e7f";

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn lorem() -> String {
        "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore."
            .to_owned()
    }

    fn account_with(id: &str, permissions: Vec<Permission>) -> Arc<Account> {
        let role = Role::new("d1e2f3a4-b5c6-4d7e-8f9a-0b1c2d3e4f5a", "CUSTOM", permissions).unwrap();
        Arc::new(
            Account::restore(AccountRecord {
                id: id.into(),
                name: "Someone".into(),
                email: "someone@example.com".into(),
                password_hash: "hash".into(),
                created_at: t0(),
                updated_at: t0(),
                role: Some(Arc::new(role)),
            })
            .unwrap(),
        )
    }

    fn editor() -> Arc<Account> {
        account_with(
            "a1b2c3d4-e5f6-4a7b-8c9d-0e1f2a3b4c5d",
            Role::default_permissions(Role::EDITOR),
        )
    }

    fn reader() -> Arc<Account> {
        account_with("b2c3d4e5-f6a7-4b8c-9d0e-1f2a3b4c5d6e", vec![])
    }

    fn article() -> Article {
        Article::create(
            &editor(),
            "My Article Title",
            &lorem(),
            Identifier::new(ARTICLE_ID).unwrap(),
            t0(),
        )
        .unwrap()
    }

    #[test]
    fn create_derives_slug_and_timestamps() {
        let article = article();
        assert_eq!(article.slug(), "my-article-title-4c5d6e7f");
        assert_eq!(article.created_at(), article.updated_at());
        assert_eq!(article.author().name(), "Someone");
    }

    #[test]
    fn create_requires_permission() {
        let err = Article::create(
            &reader(),
            "My Article Title",
            &lorem(),
            Identifier::new(ARTICLE_ID).unwrap(),
            t0(),
        )
        .unwrap_err();
        assert_eq!(err, DomainError::forbidden("You are not allowed to create articles"));
    }

    #[test]
    fn create_validates_title_and_content() {
        let id = Identifier::new(ARTICLE_ID).unwrap();
        assert!(matches!(
            Article::create(&editor(), "Hey", &lorem(), id, t0()),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            Article::create(&editor(), "Valid title", "too short", id, t0()),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn update_title_rederives_slug_from_same_id() {
        let mut article = article();
        let later = t0() + Duration::hours(1);
        article.update(&editor(), Some("A Brand New Title"), None, later).unwrap();
        assert_eq!(article.title(), "A Brand New Title");
        assert_eq!(article.slug(), "a-brand-new-title-4c5d6e7f");
        assert_eq!(article.updated_at(), later);
        assert_eq!(article.id().to_string(), ARTICLE_ID);
    }

    #[test]
    fn update_content_keeps_slug() {
        let mut article = article();
        let later = t0() + Duration::hours(1);
        let new_content = format!("{} More words.", lorem());
        article.update(&editor(), None, Some(&new_content), later).unwrap();
        assert_eq!(article.content(), new_content);
        assert_eq!(article.slug(), "my-article-title-4c5d6e7f");
        assert_eq!(article.updated_at(), later);
    }

    #[test]
    fn update_without_changes_keeps_timestamp() {
        let mut article = article();
        article
            .update(&editor(), Some("My Article Title"), Some(&lorem()), t0() + Duration::hours(1))
            .unwrap();
        article.update(&editor(), None, None, t0() + Duration::hours(2)).unwrap();
        assert_eq!(article.updated_at(), t0());
    }

    #[test]
    fn update_refused_leaves_article_untouched() {
        let mut article = article();
        let err = article
            .update(&reader(), Some("New Title"), None, t0() + Duration::hours(1))
            .unwrap_err();
        assert_eq!(err, DomainError::forbidden("You are not allowed to update articles"));
        assert_eq!(article.title(), "My Article Title");
        assert_eq!(article.slug(), "my-article-title-4c5d6e7f");
        assert_eq!(article.updated_at(), t0());
    }

    #[test]
    fn update_with_invalid_content_is_atomic() {
        let mut article = article();
        let err = article
            .update(&editor(), Some("Another Title"), Some("short"), t0() + Duration::hours(1))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(article.title(), "My Article Title");
        assert_eq!(article.slug(), "my-article-title-4c5d6e7f");
    }

    #[test]
    fn update_does_not_require_authorship() {
        let mut article = article();
        let other_editor = account_with(
            "e5f6a7b8-c9d0-4e1f-8a2b-3c4d5e6f7a8b",
            Role::default_permissions(Role::EDITOR),
        );
        assert!(!article.author().same_identity(&other_editor));
        article
            .update(&other_editor, Some("Edited by a colleague"), None, t0() + Duration::hours(1))
            .unwrap();
        assert!(article.author().same_identity(&editor()));
    }

    #[test]
    fn deletion_is_permission_based() {
        let article = article();
        let deleter = account_with(
            "f6a7b8c9-d0e1-4f2a-9b3c-4d5e6f7a8b9c",
            vec![Permission::create(PermissionAction::Delete, PermissionSubject::Article)],
        );
        assert!(article.can_be_deleted_by(&deleter));
        assert!(!article.can_be_deleted_by(&reader()));
        assert_eq!(
            article.ensure_deletable_by(&reader()).unwrap_err(),
            DomainError::forbidden("You are not allowed to delete this article")
        );
    }
}
