//! In-memory catalog owning every author, magazine and article.
//!
//! # Responsibility
//! - Act as the arena for all entities, keyed by typed stable IDs.
//! - Provide the single registration path for new articles.
//! - Keep owner collections in step with article pointers on reassignment.
//!
//! # Invariants
//! - `articles` doubles as the all-articles registry: every article exactly
//!   once, in creation order.
//! - For every article `a`: `a.id` appears exactly once in the article list of
//!   `a.author` and exactly once in that of `a.magazine`, and nowhere else.
//! - A failed operation leaves the catalog unchanged.

pub mod views;

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::ids::{ArticleId, AuthorId, MagazineId};
use crate::model::magazine::Magazine;
use crate::model::validation::ValidationError;
use indexmap::IndexMap;
use log::{debug, warn};

pub use views::{AuthorView, MagazineView};

pub type CatalogResult<T> = Result<T, ValidationError>;

/// Arena of authors, magazines and articles plus the all-articles registry.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    authors: IndexMap<AuthorId, Author>,
    magazines: IndexMap<MagazineId, Magazine>,
    articles: IndexMap<ArticleId, Article>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every entity and empties the article registry.
    pub fn reset(&mut self) {
        let dropped = self.articles.len();
        self.articles.clear();
        self.authors.clear();
        self.magazines.clear();
        debug!("event=catalog_reset module=catalog status=ok dropped_articles={dropped}");
    }

    /// Creates one author.
    ///
    /// # Errors
    /// - `InvalidAuthorName` when `name` is empty.
    pub fn create_author(&mut self, name: impl Into<String>) -> CatalogResult<AuthorId> {
        let author = Author::new(name).inspect_err(log_rejection("create_author"))?;
        let id = author.id();
        self.authors.insert(id, author);
        debug!("event=author_created module=catalog status=ok author={id}");
        Ok(id)
    }

    /// Creates one magazine.
    ///
    /// # Errors
    /// - `InvalidMagazineName` when the name length is outside `[2, 16]`.
    /// - `EmptyCategory` when `category` is empty.
    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> CatalogResult<MagazineId> {
        let magazine =
            Magazine::new(name, category).inspect_err(log_rejection("create_magazine"))?;
        let id = magazine.id();
        self.magazines.insert(id, magazine);
        debug!("event=magazine_created module=catalog status=ok magazine={id}");
        Ok(id)
    }

    /// Creates one article and links it into the registry, the magazine and
    /// the author, in that order.
    ///
    /// All checks run before any write, so a rejected article is registered
    /// nowhere.
    ///
    /// # Errors
    /// - `InvalidTitle` when the title length is outside `[5, 50]`.
    /// - `UnknownAuthor` / `UnknownMagazine` when either ID is not in this
    ///   catalog.
    pub fn create_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        let article =
            Article::new(author, magazine, title).inspect_err(log_rejection("create_article"))?;
        self.ensure_author(author)
            .and_then(|()| self.ensure_magazine(magazine))
            .inspect_err(log_rejection("create_article"))?;

        let id = article.id();
        self.articles.insert(id, article);
        self.magazine_entry(magazine)?.add_article(id);
        self.author_entry(author)?.attach_article(id);
        debug!(
            "event=article_created module=catalog status=ok article={id} author={author} magazine={magazine}"
        );
        Ok(id)
    }

    /// Author-side convenience for `create_article`.
    ///
    /// Registration happens once, inside `create_article`; this method adds
    /// nothing on top.
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        self.create_article(author, magazine, title)
    }

    /// Moves an article to another author.
    ///
    /// The article leaves the old author's list and is appended to the new
    /// author's list together with the pointer change. Reassigning to the
    /// current author changes nothing.
    pub fn set_article_author(
        &mut self,
        article: ArticleId,
        new_author: AuthorId,
    ) -> CatalogResult<()> {
        self.ensure_author(new_author)
            .inspect_err(log_rejection("set_article_author"))?;
        let old_author = self.article_entry(article)?.author();
        if old_author == new_author {
            return Ok(());
        }

        self.author_entry(old_author)?.detach_article(article);
        self.author_entry(new_author)?.attach_article(article);
        self.article_entry(article)?.set_author(new_author);
        debug!(
            "event=article_author_changed module=catalog status=ok article={article} from={old_author} to={new_author}"
        );
        Ok(())
    }

    /// Moves an article to another magazine. Mirrors `set_article_author`.
    pub fn set_article_magazine(
        &mut self,
        article: ArticleId,
        new_magazine: MagazineId,
    ) -> CatalogResult<()> {
        self.ensure_magazine(new_magazine)
            .inspect_err(log_rejection("set_article_magazine"))?;
        let old_magazine = self.article_entry(article)?.magazine();
        if old_magazine == new_magazine {
            return Ok(());
        }

        self.magazine_entry(old_magazine)?.remove_article(article);
        self.magazine_entry(new_magazine)?.add_article(article);
        self.article_entry(article)?.set_magazine(new_magazine);
        debug!(
            "event=article_magazine_changed module=catalog status=ok article={article} from={old_magazine} to={new_magazine}"
        );
        Ok(())
    }

    /// Renames a magazine. Uses the same inclusive `[2, 16]` bound as
    /// construction.
    pub fn set_magazine_name(
        &mut self,
        magazine: MagazineId,
        name: impl Into<String>,
    ) -> CatalogResult<()> {
        self.magazine_entry(magazine)?
            .set_name(name)
            .inspect_err(log_rejection("set_magazine_name"))?;
        debug!("event=magazine_renamed module=catalog status=ok magazine={magazine}");
        Ok(())
    }

    pub fn set_magazine_category(
        &mut self,
        magazine: MagazineId,
        category: impl Into<String>,
    ) -> CatalogResult<()> {
        self.magazine_entry(magazine)?
            .set_category(category)
            .inspect_err(log_rejection("set_magazine_category"))?;
        debug!("event=magazine_category_changed module=catalog status=ok magazine={magazine}");
        Ok(())
    }

    /// Query view over one author.
    pub fn author(&self, id: AuthorId) -> CatalogResult<AuthorView<'_>> {
        let author = self
            .authors
            .get(&id)
            .ok_or(ValidationError::UnknownAuthor(id))?;
        Ok(AuthorView::new(self, author))
    }

    /// Query view over one magazine.
    pub fn magazine(&self, id: MagazineId) -> CatalogResult<MagazineView<'_>> {
        let magazine = self
            .magazines
            .get(&id)
            .ok_or(ValidationError::UnknownMagazine(id))?;
        Ok(MagazineView::new(self, magazine))
    }

    pub fn article(&self, id: ArticleId) -> CatalogResult<&Article> {
        self.articles
            .get(&id)
            .ok_or(ValidationError::UnknownArticle(id))
    }

    /// Every article ever created, in creation order.
    pub fn all_articles(&self) -> impl Iterator<Item = &Article> + '_ {
        self.articles.values()
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    /// Authors in creation order.
    pub fn authors(&self) -> impl Iterator<Item = &Author> + '_ {
        self.authors.values()
    }

    /// Magazines in creation order.
    pub fn magazines(&self) -> impl Iterator<Item = &Magazine> + '_ {
        self.magazines.values()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty() && self.magazines.is_empty() && self.articles.is_empty()
    }

    /// Resolves article IDs held by an owner. IDs always resolve while the
    /// catalog invariants hold.
    pub(crate) fn resolve_articles<'a>(
        &'a self,
        ids: &'a [ArticleId],
    ) -> impl Iterator<Item = &'a Article> + 'a {
        ids.iter().filter_map(|id| self.articles.get(id))
    }

    pub(crate) fn author_record(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(&id)
    }

    pub(crate) fn magazine_record(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.get(&id)
    }

    fn ensure_author(&self, id: AuthorId) -> CatalogResult<()> {
        if self.authors.contains_key(&id) {
            Ok(())
        } else {
            Err(ValidationError::UnknownAuthor(id))
        }
    }

    fn ensure_magazine(&self, id: MagazineId) -> CatalogResult<()> {
        if self.magazines.contains_key(&id) {
            Ok(())
        } else {
            Err(ValidationError::UnknownMagazine(id))
        }
    }

    fn author_entry(&mut self, id: AuthorId) -> CatalogResult<&mut Author> {
        self.authors
            .get_mut(&id)
            .ok_or(ValidationError::UnknownAuthor(id))
    }

    fn magazine_entry(&mut self, id: MagazineId) -> CatalogResult<&mut Magazine> {
        self.magazines
            .get_mut(&id)
            .ok_or(ValidationError::UnknownMagazine(id))
    }

    fn article_entry(&mut self, id: ArticleId) -> CatalogResult<&mut Article> {
        self.articles
            .get_mut(&id)
            .ok_or(ValidationError::UnknownArticle(id))
    }
}

fn log_rejection(operation: &'static str) -> impl Fn(&ValidationError) {
    move |err| {
        warn!("event=validation_rejected module=catalog status=error op={operation} reason={err}");
    }
}

#[cfg(test)]
mod tests {
    use super::Catalog;
    use crate::model::ids::{ArticleId, AuthorId};
    use crate::model::validation::ValidationError;

    #[test]
    fn new_catalog_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.article_count(), 0);
    }

    #[test]
    fn create_article_registers_in_all_three_places() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("Carry Bradshaw").unwrap();
        let magazine = catalog.create_magazine("Vogue", "Fashion").unwrap();

        let article = catalog
            .create_article(author, magazine, "Dating life in NYC")
            .unwrap();

        assert_eq!(catalog.article_count(), 1);
        assert_eq!(catalog.author_record(author).unwrap().article_ids(), &[article]);
        assert_eq!(
            catalog.magazine_record(magazine).unwrap().article_ids(),
            &[article]
        );
    }

    #[test]
    fn unknown_author_rejects_before_any_registration() {
        let mut catalog = Catalog::new();
        let magazine = catalog.create_magazine("Vogue", "Fashion").unwrap();
        let stranger = AuthorId::new();

        let err = catalog
            .create_article(stranger, magazine, "Dating life in NYC")
            .unwrap_err();

        assert_eq!(err, ValidationError::UnknownAuthor(stranger));
        assert_eq!(catalog.article_count(), 0);
        assert!(catalog
            .magazine_record(magazine)
            .unwrap()
            .article_ids()
            .is_empty());
    }

    #[test]
    fn reassigning_unknown_article_fails() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("Carry Bradshaw").unwrap();
        let missing = ArticleId::new();

        let err = catalog.set_article_author(missing, author).unwrap_err();
        assert_eq!(err, ValidationError::UnknownArticle(missing));
    }

    #[test]
    fn reset_clears_entities_and_registry() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("Carry Bradshaw").unwrap();
        let magazine = catalog.create_magazine("Vogue", "Fashion").unwrap();
        catalog
            .create_article(author, magazine, "Dating life in NYC")
            .unwrap();

        catalog.reset();

        assert!(catalog.is_empty());
        assert_eq!(catalog.all_articles().count(), 0);
        assert!(catalog.author(author).is_err());
    }
}
