//! Article join entity.
//!
//! # Invariants
//! - `title` length stays within `[5, 50]` and never changes.
//! - An article references exactly one author and exactly one magazine.
//! - Articles are only created through `Catalog`, which registers them into
//!   both owners before returning.

use crate::model::ids::{ArticleId, AuthorId, MagazineId};
use crate::model::validation::{validate_title, ValidationError};
use serde::Serialize;

/// Relationship record linking one author to one magazine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    id: ArticleId,
    title: String,
    author: AuthorId,
    magazine: MagazineId,
}

impl Article {
    pub(crate) fn new(
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            id: ArticleId::new(),
            title,
            author,
            magazine,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    pub(crate) fn set_author(&mut self, author: AuthorId) {
        self.author = author;
    }

    pub(crate) fn set_magazine(&mut self, magazine: MagazineId) {
        self.magazine = magazine;
    }
}
