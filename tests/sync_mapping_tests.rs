// tests/sync_mapping_tests.rs
// Mapping upstream API items into catalog devices

use device_catalog::sync::*;
use device_catalog::web_app::catalog::Catalog;
use serde_json::json;

#[test]
fn test_full_item_maps_to_nested_layout() {
    let item = json!({
        "id": 42,
        "brand": "Google",
        "model": "Pixel 8",
        "release_date": "2023-10-04",
        "display": {"size": "6.2\""},
        "os": "Android 14",
        "chipset": "Tensor G3",
        "ram": "8GB",
        "storage": "128GB",
        "battery": {"capacity": "4575 mAh"},
        "camera": {"main": "50MP"},
        "price": 699,
        "currency": "USD",
        "price_region": {"FR": "€799"},
        "affiliate_links": [{"url": "https://shop.example/pixel-8"}],
        "images": {"gallery": ["https://img.example/p8.jpg"]}
    });

    let device = map_api_item(&item).expect("item maps");
    assert_eq!(device.id.as_str(), "42");
    assert_eq!(device.title(), "Google Pixel 8");
    assert_eq!(device.display_size(), Some("6.2\""));
    assert_eq!(device.os(), Some("Android 14"));
    assert_eq!(device.chipset(), Some("Tensor G3"));
    assert_eq!(device.ram(), Some("8GB"));
    assert_eq!(device.storage(), Some("128GB"));
    assert_eq!(device.battery_capacity(), Some("4575 mAh"));
    assert_eq!(device.price(), Some("699"));
    assert_eq!(device.currency(), Some("USD"));
    assert_eq!(device.regional_price("FR"), Some("€799"));
    assert_eq!(device.buy_link(), Some("https://shop.example/pixel-8"));
    assert_eq!(device.gallery().len(), 1);
}

#[test]
fn test_alternate_keys_are_used_as_fallbacks() {
    let item = json!({
        "slug": "galaxy-a55",
        "manufacturer": "Samsung",
        "phone_name": "Galaxy A55",
        "release": "2024-03-11",
        "screen": "6.6 inches"
    });

    let device = map_api_item(&item).expect("item maps");
    assert_eq!(device.id.as_str(), "galaxy-a55");
    assert_eq!(device.brand, "Samsung");
    assert_eq!(device.model, "Galaxy A55");
    assert_eq!(device.release_date(), Some("2024-03-11"));
    assert_eq!(device.display_size(), Some("6.6 inches"));
}

#[test]
fn test_empty_primary_key_falls_through() {
    let item = json!({"id": "", "slug": "", "model": "Nord 4", "brand": "OnePlus"});
    let device = map_api_item(&item).expect("model doubles as id");
    assert_eq!(device.id.as_str(), "Nord 4");
}

#[test]
fn test_items_without_id_or_brand_are_skipped() {
    assert!(map_api_item(&json!({"brand": "Nokia"})).is_none());
    assert!(map_api_item(&json!({"id": "x1", "model": "X1"})).is_none());
    assert!(map_api_item(&json!("not an object")).is_none());
}

#[test]
fn test_response_must_be_an_array() {
    let err = map_api_response(json!({"phones": []})).unwrap_err();
    assert!(matches!(err, SyncError::UnexpectedShape(_)));
}

#[test]
fn test_response_keeps_valid_items_in_order() -> anyhow::Result<()> {
    let body = json!([
        {"id": "a", "brand": "Apple", "model": "iPhone 15"},
        {"brand": "NoId"},
        {"id": "b", "brand": "Google", "model": "Pixel 8"}
    ]);

    let devices = map_api_response(body)?;
    let ids: Vec<&str> = devices.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    Ok(())
}

#[test]
fn test_catalog_json_loads_back() -> anyhow::Result<()> {
    let devices = map_api_response(json!([
        {"id": 1, "brand": "Sony", "model": "Xperia 1 V", "ram": "12GB", "price": "1199"}
    ]))?;

    let text = catalog_json(&devices)?;
    let catalog = Catalog::from_json_str(&text)?;
    assert_eq!(catalog.len(), 1);
    let device = catalog.find("1").expect("device 1");
    assert_eq!(device.ram(), Some("12GB"));
    assert_eq!(device.price(), Some("1199"));
    Ok(())
}
