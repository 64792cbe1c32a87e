//! Magazine entity.
//!
//! # Invariants
//! - `name` length stays within `[2, 16]` for construction and rename alike.
//! - `category` is never empty.
//! - Every ID in `articles` refers to an article published in this magazine.

use crate::model::ids::{ArticleId, MagazineId};
use crate::model::validation::{validate_category, validate_magazine_name, ValidationError};
use serde::Serialize;

/// Publication record owning the ordered list of its article IDs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
    articles: Vec<ArticleId>,
}

impl Magazine {
    pub(crate) fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let category = category.into();
        validate_magazine_name(&name)?;
        validate_category(&category)?;
        Ok(Self {
            id: MagazineId::new(),
            name,
            category,
            articles: Vec::new(),
        })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Published article IDs in insertion order.
    pub fn article_ids(&self) -> &[ArticleId] {
        &self.articles
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_magazine_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub(crate) fn set_category(
        &mut self,
        category: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let category = category.into();
        validate_category(&category)?;
        self.category = category;
        Ok(())
    }

    /// Appends without checking the article's own magazine pointer; callers
    /// keep the two sides in step.
    pub(crate) fn add_article(&mut self, article: ArticleId) {
        self.articles.push(article);
    }

    pub(crate) fn remove_article(&mut self, article: ArticleId) {
        self.articles.retain(|id| *id != article);
    }
}
