// tests/catalog_query_tests.rs
// Filtering, searching and paging over the 30-phone fixture catalog

use device_catalog::fixtures::catalogs::PhoneCatalog;
use device_catalog::fixtures::TestCatalog;
use device_catalog::web_app::model::*;
use device_catalog::web_app::pricing::CountryCode;
use device_catalog::web_app::queries::*;
use device_catalog::web_app::settings::{CatalogSettings, CatalogVariant};

fn full() -> CatalogSettings {
    CatalogVariant::Full.settings()
}

fn us() -> CountryCode {
    CountryCode::default()
}

fn card_ids(page: &ListPage) -> Vec<&str> {
    page.cards.iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn test_first_page_keeps_catalog_order() {
    let catalog = PhoneCatalog::catalog();
    let page = list_page(&catalog, &CatalogQuery::default(), &full(), &us());

    assert_eq!(page.cards.len(), 12);
    assert_eq!(page.total_matches, 30);
    assert_eq!(page.total_pages, 3);
    let expected: Vec<String> = (1..=12).map(|i| format!("dev-{:02}", i)).collect();
    assert_eq!(card_ids(&page), expected);
}

#[test]
fn test_paging_through_thirty_devices() {
    let catalog = PhoneCatalog::catalog();
    let sizes: Vec<usize> = (1..=4)
        .map(|p| {
            let query = CatalogQuery::default().at_page(p);
            list_page(&catalog, &query, &full(), &us()).cards.len()
        })
        .collect();
    assert_eq!(sizes, vec![12, 12, 6, 0]);
}

#[test]
fn test_out_of_range_page_is_empty() {
    let catalog = PhoneCatalog::catalog();
    let page = list_page(&catalog, &CatalogQuery::default().at_page(9), &full(), &us());

    assert!(page.is_empty());
    assert_eq!(ListPage::EMPTY_MESSAGE, "No devices found");
    // Controls still cover the real pages, none of them active
    assert_eq!(page.controls.len(), 3);
    assert!(page.controls.iter().all(|c| !c.active));
}

#[test]
fn test_classic_variant_shows_everything_on_one_page() {
    let catalog = PhoneCatalog::catalog();
    let settings = CatalogVariant::Classic.settings();
    let page = list_page(&catalog, &CatalogQuery::default(), &settings, &us());

    assert_eq!(settings.page_size, 48);
    assert_eq!(page.cards.len(), 30);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.controls, vec![PageControl { page: 1, active: true }]);
}

#[test]
fn test_brand_vocabulary() {
    let catalog = PhoneCatalog::catalog();
    assert_eq!(
        brand_vocabulary(&catalog),
        vec!["Apple", "Google", "Huawei", "OnePlus", "Samsung", "Xiaomi"]
    );
}

#[test]
fn test_brand_filter_selects_one_brand() {
    let catalog = PhoneCatalog::catalog();
    let query = CatalogQuery::default().with_brand("Samsung");
    let page = list_page(&catalog, &query, &full(), &us());

    assert_eq!(page.total_matches, 5);
    assert_eq!(page.total_pages, 1);
    assert!(page.cards.iter().all(|c| c.brand == "Samsung"));
}

#[test]
fn test_unknown_brand_gives_one_empty_page() {
    let catalog = PhoneCatalog::catalog();
    let query = CatalogQuery::default().with_brand("Nokia");
    let page = list_page(&catalog, &query, &full(), &us());

    assert!(page.is_empty());
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.controls.len(), 1);
}

#[test]
fn test_search_matches_operating_system() {
    let catalog = PhoneCatalog::catalog();
    let query = CatalogQuery::default().with_search("os");
    let page = list_page(&catalog, &query, &full(), &us());

    // iOS and HarmonyOS
    assert_eq!(page.total_matches, 10);
    assert!(page
        .cards
        .iter()
        .all(|c| c.brand == "Apple" || c.brand == "Huawei"));
}

#[test]
fn test_search_is_case_insensitive_and_trimmed() {
    let catalog = PhoneCatalog::catalog();
    let lower = filter_devices(&catalog, "", "pixel").len();
    let mixed = filter_devices(&catalog, "", "  PiXeL  ").len();
    assert_eq!(lower, 5);
    assert_eq!(lower, mixed);
}

#[test]
fn test_search_ignored_when_disabled() {
    let catalog = PhoneCatalog::catalog();
    let query = CatalogQuery::default().with_search("pixel");
    let page = list_page(&catalog, &query, &CatalogVariant::Classic.settings(), &us());
    assert_eq!(page.total_matches, 30);
}

#[test]
fn test_brand_and_search_combine() {
    let catalog = PhoneCatalog::catalog();
    let query = CatalogQuery::default().with_brand("Apple").with_search("harmony");
    let page = list_page(&catalog, &query, &full(), &us());
    assert!(page.is_empty());

    let query = CatalogQuery::default().with_brand("Huawei").with_search("harmony");
    assert_eq!(list_page(&catalog, &query, &full(), &us()).total_matches, 5);
}

#[test]
fn test_changing_filters_returns_to_first_page() {
    let query = CatalogQuery::default().at_page(3).with_brand("Google");
    assert_eq!(query.page, 1);
    let query = query.at_page(2).with_search("pixel");
    assert_eq!(query.page, 1);
}

#[test]
fn test_summary_fields() {
    let catalog = PhoneCatalog::catalog();
    let page = list_page(&catalog, &CatalogQuery::default(), &full(), &us());
    let first = &page.cards[0];

    assert_eq!(first.brand, "Apple");
    assert_eq!(first.model, "iPhone 1");
    assert_eq!(first.display_size, "6.0\"");
    assert_eq!(first.ram, "6GB");
    assert_eq!(first.release_date, "2024-01-01");
    assert_eq!(first.price.text(), "300");
}

#[test]
fn test_detail_lookup_uses_full_catalog() {
    let catalog = PhoneCatalog::catalog();
    // dev-30 is never on the first page but can still be opened
    let detail = find_device_detail(&catalog, "dev-30", &us()).expect("dev-30 exists");
    assert_eq!(detail.title, "Huawei Mate 30");
    assert_eq!(detail.spec("OS"), Some("HarmonyOS 4"));
    assert_eq!(detail.spec("Storage"), Some("128GB"));
    assert_eq!(detail.spec("Chipset"), Some("—"));

    assert!(find_device_detail(&catalog, "dev-31", &us()).is_none());
    assert!(find_device_detail(&catalog, "DEV-01", &us()).is_none());
}

#[test]
fn test_detail_spec_rows_in_order() {
    let catalog = PhoneCatalog::catalog();
    let detail = find_device_detail(&catalog, "dev-01", &us()).unwrap();
    let labels: Vec<&str> = detail.specs.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Display",
            "OS",
            "Chipset",
            "RAM",
            "Storage",
            "Battery",
            "Camera",
            "Release date",
            "Price"
        ]
    );
}
