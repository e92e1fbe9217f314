//! Catalog integration tests against the JSON file store

use std::fs;

use libris::{
    models::{Author, Reader},
    repository::{BookStore, JsonFileStore},
    services::{CatalogService, SortCriterion},
    AppError,
};
use rust_decimal::Decimal;

fn open(dir: &tempfile::TempDir) -> CatalogService<JsonFileStore> {
    CatalogService::open(JsonFileStore::new(dir.path().join("biblioteca_livros.json")))
}

#[test]
fn test_catalog_survives_reload() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let amado = Author::new("Jorge Amado", "Brasileira");
    let lispector = Author::new("Clarice Lispector", "Brasileira");
    let ana = Reader::new("Ana Silva", "(11) 98765-4321", "ana@email.com");

    let (gabriela, hora) = {
        let mut catalog = open(&dir);
        let gabriela = catalog
            .add(
                "Gabriela, Cravo e Canela",
                amado.clone(),
                424,
                1958,
                Decimal::new(5990, 2),
            )
            .expect("Failed to add book");
        let hora = catalog
            .add(
                "A Hora da Estrela",
                lispector.clone(),
                88,
                1977,
                Decimal::new(2990, 2),
            )
            .expect("Failed to add book");
        catalog
            .add("Capitães da Areia", amado.clone(), 280, 1937, Decimal::new(4500, 2))
            .expect("Failed to add book");
        catalog.lend(&hora.to_string(), ana.clone()).expect("Failed to lend book");
        (gabriela.to_string(), hora.to_string())
    };

    let mut catalog = open(&dir);
    assert_eq!(catalog.len(), 3);

    let book = catalog.find_by_id(&gabriela).expect("Book missing after reload");
    assert_eq!(book.title, "Gabriela, Cravo e Canela");
    assert_eq!(book.author, amado);
    assert_eq!(book.author.to_string(), "Jorge Amado (Brasileira)");
    assert_eq!(book.pages, 424);
    assert_eq!(book.year, 1958);
    assert_eq!(book.price, Decimal::new(5990, 2));
    assert!(book.borrower.is_none());

    // Borrower and author equality survive as identifier equality
    let borrowed = catalog.books_borrowed_by(&ana);
    assert_eq!(borrowed.len(), 1);
    assert_eq!(borrowed[0].id().to_string(), hora);
    assert_eq!(catalog.books_by_author(&amado).len(), 2);

    // Duplicate detection still applies to reloaded entries
    let err = catalog
        .add("Capitães da Areia", amado, 1, 2000, Decimal::ONE)
        .expect_err("Duplicate should be rejected");
    assert!(matches!(err, AppError::Duplicate(_)));

    catalog.give_back(&hora).expect("Failed to return book");
    catalog.sort(SortCriterion::Title).expect("Failed to sort");

    let reopened = open(&dir);
    let titles: Vec<&str> = reopened.books().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["A Hora da Estrela", "Capitães da Areia", "Gabriela, Cravo e Canela"]
    );
    assert!(reopened.borrowed_books().is_empty());
}

#[test]
fn test_remove_persists() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let author = Author::new("Graciliano Ramos", "Brasileira");

    let mut catalog = open(&dir);
    let id = catalog
        .add("Vidas Secas", author.clone(), 176, 1938, Decimal::new(3990, 2))
        .expect("Failed to add book")
        .to_string();
    catalog
        .add("São Bernardo", author, 200, 1934, Decimal::new(3500, 2))
        .expect("Failed to add book");
    catalog.remove(&id).expect("Failed to remove book");

    let reopened = open(&dir);
    assert_eq!(reopened.len(), 1);
    assert!(reopened.find_by_id(&id).is_none());
    assert!(reopened.find_by_title("são bernardo").is_some());
}

#[test]
fn test_corrupt_file_opens_empty() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("biblioteca_livros.json");
    fs::write(&path, "[1, 2, 3]").expect("Failed to write file");

    let store = JsonFileStore::new(&path);
    assert!(store.try_load().is_err());

    let mut catalog = CatalogService::open(store);
    assert!(catalog.is_empty());

    // The next save replaces the unreadable contents
    catalog
        .add(
            "Iracema",
            Author::new("José de Alencar", "Brasileira"),
            120,
            1865,
            Decimal::new(1500, 2),
        )
        .expect("Failed to add book");
    assert_eq!(open(&dir).len(), 1);
}
