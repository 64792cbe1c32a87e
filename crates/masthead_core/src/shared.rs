//! Lock-guarded catalog handle and the process-wide instance.
//!
//! # Responsibility
//! - Serialize all catalog access behind one mutex per catalog.
//! - Provide an explicitly reset process-wide catalog for hosts that need
//!   global state.
//!
//! # Invariants
//! - Every closure passed to `read`/`write` runs as one critical section, so
//!   the three-way article registration is never observed half done.
//! - The process-wide catalog starts empty and is only emptied by
//!   `reset_global_catalog`.
//! - A poisoned lock is recovered, never turned into a panic.

use crate::catalog::Catalog;
use log::{debug, warn};
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

static GLOBAL_CATALOG: Lazy<SharedCatalog> = Lazy::new(SharedCatalog::new);

/// Cloneable handle to one mutex-protected catalog.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<Mutex<Catalog>>,
}

impl SharedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing catalog.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(Mutex::new(catalog)),
        }
    }

    /// Runs a read-only closure under the catalog lock.
    pub fn read<T>(&self, f: impl FnOnce(&Catalog) -> T) -> T {
        let guard = self.lock();
        f(&guard)
    }

    /// Runs a mutating closure under the catalog lock.
    pub fn write<T>(&self, f: impl FnOnce(&mut Catalog) -> T) -> T {
        let mut guard = self.lock();
        f(&mut guard)
    }

    /// Empties the wrapped catalog.
    pub fn reset(&self) {
        self.write(Catalog::reset);
    }

    fn lock(&self) -> MutexGuard<'_, Catalog> {
        self.inner.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            // Why: catalog writes validate before mutating, so a panic inside a
            // caller closure cannot leave a half-registered article behind.
            warn!("event=catalog_lock_poisoned module=shared status=recovered");
            poisoned.into_inner()
        })
    }
}

/// Returns the process-wide catalog handle.
pub fn global_catalog() -> &'static SharedCatalog {
    &GLOBAL_CATALOG
}

/// Empties the process-wide catalog.
pub fn reset_global_catalog() {
    GLOBAL_CATALOG.reset();
    debug!("event=global_catalog_reset module=shared status=ok");
}

#[cfg(test)]
mod tests {
    use super::SharedCatalog;
    use std::thread;

    #[test]
    fn concurrent_writers_register_every_article() {
        let shared = SharedCatalog::new();
        let (author, magazine) = shared.write(|catalog| {
            let author = catalog.create_author("Carry Bradshaw").unwrap();
            let magazine = catalog.create_magazine("Vogue", "Fashion").unwrap();
            (author, magazine)
        });

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for index in 0..10 {
                        shared
                            .write(|catalog| {
                                catalog.create_article(
                                    author,
                                    magazine,
                                    format!("Column {worker}-{index}"),
                                )
                            })
                            .expect("article should be created");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("worker should not panic");
        }

        shared.read(|catalog| {
            assert_eq!(catalog.article_count(), 40);
            assert_eq!(catalog.author(author).unwrap().articles().len(), 40);
            assert_eq!(catalog.magazine(magazine).unwrap().articles().len(), 40);
        });
    }

    #[test]
    fn recovers_from_poisoned_lock() {
        let shared = SharedCatalog::new();
        let poisoner = shared.clone();
        let result = thread::spawn(move || {
            poisoner.write(|_catalog| panic!("boom"));
        })
        .join();
        assert!(result.is_err());

        let id = shared.write(|catalog| catalog.create_author("Survivor"));
        assert!(id.is_ok());
    }
}
