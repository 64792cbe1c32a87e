//! Demonstration driver for the masthead core.
//!
//! # Responsibility
//! - Build the fixed sample graph (two authors, two magazines, five articles).
//! - Print the five relationship summary lines to stdout.
//! - Optionally start file logging from `MASTHEAD_LOG_DIR` / `MASTHEAD_LOG_LEVEL`.

use masthead_core::{
    core_version, default_log_level, init_logging, AuthorId, Catalog, CatalogResult, LogConfig,
    MagazineId,
};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "MASTHEAD_LOG_DIR";
const LOG_LEVEL_ENV: &str = "MASTHEAD_LOG_LEVEL";

struct SampleGraph {
    catalog: Catalog,
    carry: AuthorId,
    vogue: MagazineId,
    ad: MagazineId,
}

fn main() -> ExitCode {
    if let Err(err) = setup_logging() {
        eprintln!("masthead: logging disabled: {err}");
    }

    println!("masthead_core version={}", core_version());
    match build_sample().and_then(|sample| render(&sample)) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("masthead: {err}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging() -> Result<(), String> {
    let Ok(log_dir) = std::env::var(LOG_DIR_ENV) else {
        return Ok(());
    };
    let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
    init_logging(&LogConfig::new(&level, &log_dir)?)
}

fn build_sample() -> CatalogResult<SampleGraph> {
    let mut catalog = Catalog::new();
    let carry = catalog.create_author("Carry Bradshaw")?;
    let nathaniel = catalog.create_author("Nathaniel Hawthorne")?;
    let vogue = catalog.create_magazine("Vogue", "Fashion")?;
    let ad = catalog.create_magazine("AD", "Architecture")?;

    catalog.create_article(carry, vogue, "How to wear a tutu with style")?;
    catalog.create_article(carry, vogue, "How to be single and happy")?;
    catalog.create_article(carry, vogue, "Dating life in NYC")?;
    catalog.create_article(carry, ad, "Carrara Marble is so 2020")?;
    catalog.create_article(nathaniel, ad, "2023 Eccentric Design Trends")?;

    Ok(SampleGraph {
        catalog,
        carry,
        vogue,
        ad,
    })
}

fn render(sample: &SampleGraph) -> CatalogResult<Vec<String>> {
    let carry = sample.catalog.author(sample.carry)?;
    let vogue = sample.catalog.magazine(sample.vogue)?;
    let ad = sample.catalog.magazine(sample.ad)?;

    Ok(vec![
        format!(
            "Author {} articles: {}",
            carry.name(),
            quoted_list(carry.articles().into_iter().map(|article| article.title()))
        ),
        format!(
            "Author {} magazines: {}",
            carry.name(),
            quoted_list(carry.magazines().into_iter().map(|magazine| magazine.name()))
        ),
        format!(
            "Magazine {} contributors: {}",
            vogue.name(),
            quoted_list(vogue.contributors().into_iter().map(|author| author.name()))
        ),
        format!(
            "Magazine {} articles: {}",
            ad.name(),
            quoted_list(ad.article_titles())
        ),
        format!(
            "Magazine {} contributing authors: {}",
            ad.name(),
            quoted_list(
                ad.contributing_authors()
                    .into_iter()
                    .map(|author| author.name())
            )
        ),
    ])
}

fn quoted_list<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let quoted: Vec<String> = items.into_iter().map(|item| format!("'{item}'")).collect();
    format!("[{}]", quoted.join(", "))
}
