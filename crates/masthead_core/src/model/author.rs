//! Author entity.
//!
//! # Invariants
//! - `name` is non-empty and never changes after construction.
//! - Every ID in `articles` refers to an article whose author is this one.
//! - Each article ID appears at most once in `articles`.

use crate::model::ids::{ArticleId, AuthorId};
use crate::model::validation::{validate_author_name, ValidationError};
use serde::Serialize;

/// Writer record owning the ordered list of its article IDs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    id: AuthorId,
    name: String,
    articles: Vec<ArticleId>,
}

impl Author {
    pub(crate) fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_author_name(&name)?;
        Ok(Self {
            id: AuthorId::new(),
            name,
            articles: Vec::new(),
        })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Authored article IDs in insertion order.
    pub fn article_ids(&self) -> &[ArticleId] {
        &self.articles
    }

    pub(crate) fn attach_article(&mut self, article: ArticleId) {
        self.articles.push(article);
    }

    pub(crate) fn detach_article(&mut self, article: ArticleId) {
        self.articles.retain(|id| *id != article);
    }
}

#[cfg(test)]
mod tests {
    use super::Author;
    use crate::model::ids::ArticleId;
    use crate::model::validation::ValidationError;

    #[test]
    fn rejects_empty_name() {
        assert_eq!(Author::new("").unwrap_err(), ValidationError::InvalidAuthorName);
    }

    #[test]
    fn detach_removes_only_the_target_article() {
        let mut author = Author::new("Carry Bradshaw").expect("valid author");
        let first = ArticleId::new();
        let second = ArticleId::new();
        author.attach_article(first);
        author.attach_article(second);

        author.detach_article(first);
        assert_eq!(author.article_ids(), &[second]);
    }
}
