use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use salesgen_core::{Catalog, ProductPage};
use salesgen_generate::output::pages::emit_product_pages;
use salesgen_generate::pages::validate_pages;
use salesgen_generate::{GenerationError, bundled_pages};

#[test]
fn bundled_pages_cover_ten_catalog_products() {
    let catalog = Catalog::bundled().expect("bundled catalog");
    let pages = bundled_pages();
    assert_eq!(pages.len(), 10);
    validate_pages(&pages, &catalog).expect("pages reference catalog products");

    for page in &pages {
        let product = catalog.get(&page.product_id).expect("product");
        assert!(
            page.contents().contains(&format!("SKU: {}", product.id)),
            "page {} should mention its SKU",
            page.product_id
        );
        assert!(page.contents().starts_with("===="));
        assert!(page.contents().ends_with("----"));
    }
}

#[test]
fn emitted_files_match_trimmed_pages_exactly() {
    let dir = temp_out_dir("emit");
    let pages = bundled_pages();

    let written = emit_product_pages(&dir, &pages).expect("emit pages");
    assert_eq!(written.len(), pages.len());

    for page in &pages {
        let path = dir.join(format!("{}_product_page.txt", page.product_id));
        let contents = fs::read_to_string(&path).expect("read page");
        assert_eq!(contents, page.body.trim());
    }

    let on_disk: BTreeSet<String> = fs::read_dir(&dir)
        .expect("list dir")
        .map(|entry| entry.expect("entry").file_name().to_string_lossy().to_string())
        .collect();
    let expected: BTreeSet<String> = pages.iter().map(ProductPage::file_name).collect();
    assert_eq!(on_disk, expected);
}

#[test]
fn emitting_overwrites_previous_files() {
    let dir = temp_out_dir("overwrite");
    let page = ProductPage::new("BOOK001", "\n\nfresh body\n");
    fs::write(dir.join(page.file_name()), "old body that is longer").expect("seed file");

    emit_product_pages(&dir, std::slice::from_ref(&page)).expect("emit page");
    let contents = fs::read_to_string(dir.join(page.file_name())).expect("read page");
    assert_eq!(contents, "fresh body");
}

#[test]
fn missing_directory_fails() {
    let dir = temp_out_dir("missing").join("unstructured");
    let result = emit_product_pages(&dir, &bundled_pages());
    assert!(matches!(result, Err(GenerationError::MissingDirectory(path)) if path == dir));
}

#[test]
fn pages_for_unknown_products_are_rejected() {
    let catalog = Catalog::bundled().expect("bundled catalog");
    let pages = vec![ProductPage::new("ZZZZ001", "orphan")];
    assert!(matches!(
        validate_pages(&pages, &catalog),
        Err(GenerationError::InvalidPage(_))
    ));

    let pages = vec![
        ProductPage::new("BOOK001", "one"),
        ProductPage::new("BOOK001", "two"),
    ];
    assert!(matches!(
        validate_pages(&pages, &catalog),
        Err(GenerationError::InvalidPage(_))
    ));
}

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("salesgen_pages_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}
