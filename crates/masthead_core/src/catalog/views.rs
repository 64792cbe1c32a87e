//! Read-only query views over one author or one magazine.
//!
//! # Invariants
//! - Views borrow the catalog immutably; they never observe a partial write.
//! - Set-like queries deduplicate entities by ID and categories by value.
//! - Results come back in first-appearance order. Callers should still treat
//!   set-like results as sets.

use crate::catalog::Catalog;
use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::ids::{AuthorId, MagazineId};
use crate::model::magazine::Magazine;
use indexmap::{IndexMap, IndexSet};

/// Authors need strictly more articles than this in one magazine to count as
/// contributing authors there.
pub const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

/// Queries scoped to one author.
#[derive(Debug, Clone, Copy)]
pub struct AuthorView<'a> {
    catalog: &'a Catalog,
    author: &'a Author,
}

impl<'a> AuthorView<'a> {
    pub(crate) fn new(catalog: &'a Catalog, author: &'a Author) -> Self {
        Self { catalog, author }
    }

    pub fn id(&self) -> AuthorId {
        self.author.id()
    }

    pub fn name(&self) -> &'a str {
        self.author.name()
    }

    /// Underlying author record.
    pub fn record(&self) -> &'a Author {
        self.author
    }

    /// Authored articles in insertion order.
    pub fn articles(&self) -> Vec<&'a Article> {
        self.catalog
            .resolve_articles(self.author.article_ids())
            .collect()
    }

    /// Distinct magazines this author has written for.
    pub fn magazines(&self) -> Vec<&'a Magazine> {
        let ids: IndexSet<MagazineId> = self
            .catalog
            .resolve_articles(self.author.article_ids())
            .map(Article::magazine)
            .collect();
        ids.into_iter()
            .filter_map(|id| self.catalog.magazine_record(id))
            .collect()
    }

    /// Distinct categories of the magazines this author has written for.
    pub fn topic_areas(&self) -> Vec<&'a str> {
        let categories: IndexSet<&'a str> = self
            .magazines()
            .into_iter()
            .map(Magazine::category)
            .collect();
        categories.into_iter().collect()
    }
}

/// Queries scoped to one magazine.
#[derive(Debug, Clone, Copy)]
pub struct MagazineView<'a> {
    catalog: &'a Catalog,
    magazine: &'a Magazine,
}

impl<'a> MagazineView<'a> {
    pub(crate) fn new(catalog: &'a Catalog, magazine: &'a Magazine) -> Self {
        Self { catalog, magazine }
    }

    pub fn id(&self) -> MagazineId {
        self.magazine.id()
    }

    pub fn name(&self) -> &'a str {
        self.magazine.name()
    }

    pub fn category(&self) -> &'a str {
        self.magazine.category()
    }

    /// Underlying magazine record.
    pub fn record(&self) -> &'a Magazine {
        self.magazine
    }

    /// Published articles in insertion order.
    pub fn articles(&self) -> Vec<&'a Article> {
        self.catalog
            .resolve_articles(self.magazine.article_ids())
            .collect()
    }

    /// Titles of published articles, in article order.
    pub fn article_titles(&self) -> Vec<&'a str> {
        self.catalog
            .resolve_articles(self.magazine.article_ids())
            .map(Article::title)
            .collect()
    }

    /// Distinct authors with at least one article here.
    pub fn contributors(&self) -> Vec<&'a Author> {
        self.article_counts()
            .into_keys()
            .filter_map(|id| self.catalog.author_record(id))
            .collect()
    }

    /// Contributors with more than `CONTRIBUTING_AUTHOR_THRESHOLD` articles
    /// in this magazine.
    pub fn contributing_authors(&self) -> Vec<&'a Author> {
        self.article_counts()
            .into_iter()
            .filter(|(_, count)| *count > CONTRIBUTING_AUTHOR_THRESHOLD)
            .filter_map(|(id, _)| self.catalog.author_record(id))
            .collect()
    }

    fn article_counts(&self) -> IndexMap<AuthorId, usize> {
        let mut counts = IndexMap::new();
        for article in self.catalog.resolve_articles(self.magazine.article_ids()) {
            *counts.entry(article.author()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;

    #[test]
    fn contributing_threshold_is_strict() {
        let mut catalog = Catalog::new();
        let prolific = catalog.create_author("Prolific").unwrap();
        let casual = catalog.create_author("Casual").unwrap();
        let magazine = catalog.create_magazine("Vogue", "Fashion").unwrap();
        for title in ["First piece", "Second piece", "Third piece"] {
            catalog.create_article(prolific, magazine, title).unwrap();
        }
        for title in ["Guest column", "Guest column two"] {
            catalog.create_article(casual, magazine, title).unwrap();
        }

        let view = catalog.magazine(magazine).unwrap();
        let names: Vec<&str> = view
            .contributing_authors()
            .into_iter()
            .map(|author| author.name())
            .collect();
        assert_eq!(names, vec!["Prolific"]);
        assert_eq!(view.contributors().len(), 2);
    }

    #[test]
    fn topic_areas_deduplicate_by_value() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("Carry Bradshaw").unwrap();
        let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();
        let elle = catalog.create_magazine("Elle", "Fashion").unwrap();
        catalog.create_article(author, vogue, "Tutus in spring").unwrap();
        catalog.create_article(author, elle, "Tutus in autumn").unwrap();

        let view = catalog.author(author).unwrap();
        assert_eq!(view.magazines().len(), 2);
        assert_eq!(view.topic_areas(), vec!["Fashion"]);
    }
}
