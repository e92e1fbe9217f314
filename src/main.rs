//! Libris - library catalog
//!
//! Prints the stored catalog, optionally sorting it first:
//! `libris [title|author]`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use libris::{
    config::{AppConfig, LoggingConfig},
    repository::{BookStore, JsonFileStore},
    services::{CatalogService, SortCriterion},
    AppResult,
};

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("libris={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Sort the catalog; a failed save keeps the sorted order in memory and is not fatal
fn sort_catalog<S: BookStore>(
    catalog: &mut CatalogService<S>,
    criterion: SortCriterion,
) -> AppResult<()> {
    match catalog.sort(criterion) {
        Ok(_) => Ok(()),
        Err(e) if e.is_storage() => {
            tracing::warn!(%criterion, "Showing sorted catalog without saving it: {}", e);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging);

    tracing::info!("Starting Libris v{}", env!("CARGO_PKG_VERSION"));

    let criterion = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<SortCriterion>())
        .transpose()?;

    let store = JsonFileStore::new(&config.storage.path);
    let mut catalog = CatalogService::open(store);

    if let Some(criterion) = criterion {
        sort_catalog(&mut catalog, criterion)?;
    }

    if catalog.is_empty() {
        println!("Nenhum livro cadastrado.");
        return Ok(());
    }

    for book in catalog.books() {
        println!("{}\n", book.details());
    }
    println!(
        "{} livro(s), {} emprestado(s)",
        catalog.len(),
        catalog.borrowed_books().len()
    );

    Ok(())
}
