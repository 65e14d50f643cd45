// tests/catalog_loader_tests.rs
// Loading the catalog file from disk

use device_catalog::fixtures::catalogs::PhoneCatalog;
use device_catalog::fixtures::TestCatalog;
use device_catalog::web_app::catalog::{Catalog, CatalogError};
use std::fs;
use std::path::PathBuf;

/// A fresh path under the system temp dir, unique per test
fn temp_file(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("device_catalog_tests_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir.join(name)
}

#[test]
fn test_load_fixture_catalog_from_disk() -> anyhow::Result<()> {
    let path = temp_file("phones.json");
    fs::write(&path, PhoneCatalog::json())?;

    let catalog = Catalog::from_path(&path)?;
    assert_eq!(catalog.len(), PhoneCatalog::LEN);
    assert_eq!(catalog, PhoneCatalog::catalog());

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let path = temp_file("does-not-exist.json");
    let err = Catalog::from_path(&path).unwrap_err();

    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("does-not-exist.json"));
}

#[test]
fn test_malformed_file_is_parse_error() -> anyhow::Result<()> {
    let path = temp_file("broken.json");
    fs::write(&path, "[{\"id\": \"a\", \"brand\": ")?;

    let err = Catalog::from_path(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_wrong_top_level_shape_is_parse_error() -> anyhow::Result<()> {
    let path = temp_file("object.json");
    fs::write(&path, r#"{"devices": []}"#)?;

    let err = Catalog::from_path(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_mixed_layouts_and_loose_values_load() -> anyhow::Result<()> {
    let path = temp_file("mixed.json");
    fs::write(
        &path,
        r#"[
            {"id": 7, "brand": "Apple", "model": "iPhone 15",
             "display": {"size": "6.1\""}, "memory": {"ram": "6GB", "storage": "128GB"},
             "platform": {"os": "iOS 17"}, "price": 799, "price_region": {"FR": "€969"}},
            {"id": "fp5", "brand": "Fairphone", "model": "5", "release": "2023-08-30",
             "display": "6.46 inches", "os": "Android 13", "ram": "8GB",
             "battery": "4200 mAh", "price_region": "n/a", "affiliate_links": null}
        ]"#,
    )?;

    let catalog = Catalog::from_path(&path)?;
    assert_eq!(catalog.len(), 2);

    let iphone = catalog.find("7").expect("numeric id is matched as text");
    assert_eq!(iphone.display_size(), Some("6.1\""));
    assert_eq!(iphone.storage(), Some("128GB"));
    assert_eq!(iphone.price(), Some("799"));

    let fairphone = catalog.find("fp5").expect("fp5");
    assert_eq!(fairphone.release_date(), Some("2023-08-30"));
    assert_eq!(fairphone.display_size(), Some("6.46 inches"));
    assert_eq!(fairphone.os(), Some("Android 13"));
    assert_eq!(fairphone.battery_capacity(), Some("4200 mAh"));
    assert!(fairphone.price_region.is_empty());
    assert!(fairphone.buy_link().is_none());

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_device_with_both_release_keys_keeps_catalog_loadable() -> anyhow::Result<()> {
    let path = temp_file("both-release.json");
    fs::write(
        &path,
        r#"[
            {"id": "1", "brand": "A", "model": "M", "release_date": "2024-01-01", "release": "2023"},
            {"id": "2", "brand": "B", "model": "N", "release": "2022-06-01"}
        ]"#,
    )?;

    let catalog = Catalog::from_path(&path)?;
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.find("1").and_then(|d| d.release_date()), Some("2024-01-01"));
    assert_eq!(catalog.find("2").and_then(|d| d.release_date()), Some("2022-06-01"));

    fs::remove_file(&path)?;
    Ok(())
}
