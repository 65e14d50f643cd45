// fixtures/catalogs/phones.rs
//
// What is this file?
// Two catalogs with predictable contents:
// - PhoneCatalog: 30 phones across 6 brands, for filtering and paging
// - PricingCatalog: a handful of phones covering every price fallback
//
// The philosophy:
// "Setup your test data once, use it everywhere"

use crate::fixtures::TestCatalog;
use crate::web_app::model::*;

/// (brand, model line, os)
const LINES: [(&str, &str, &str); 6] = [
    ("Apple", "iPhone", "iOS 17"),
    ("Google", "Pixel", "Android 14"),
    ("Samsung", "Galaxy", "Android 14"),
    ("Xiaomi", "Redmi", "Android 13"),
    ("OnePlus", "Nord", "Android 14"),
    ("Huawei", "Mate", "HarmonyOS 4"),
];

const RAM: [&str; 3] = ["6GB", "8GB", "12GB"];

/// 30 phones; brand cycles through `LINES`, ids are `dev-01` .. `dev-30`
pub struct PhoneCatalog;

impl PhoneCatalog {
    pub const LEN: usize = 30;
}

impl TestCatalog for PhoneCatalog {
    fn devices() -> Vec<Device> {
        (0..Self::LEN)
            .map(|i| {
                let (brand, line, os) = LINES[i % LINES.len()];
                let mut device = Device::new(
                    format!("dev-{:02}", i + 1),
                    brand,
                    format!("{} {}", line, i + 1),
                );
                device.display = Some(DisplaySpec::Detailed {
                    size: Some(format!("6.{}\"", i % 8)),
                });
                device.memory = Some(Memory {
                    ram: Some(RAM[i % RAM.len()].to_string()),
                    storage: Some("128GB".to_string()),
                });
                device.platform = Some(Platform {
                    os: Some(os.to_string()),
                    chipset: None,
                });
                device.release_date = Some(format!("2024-01-{:02}", i + 1));
                device.price = Some((300 + i * 10).to_string());
                device
            })
            .collect()
    }
}

/// One phone per price fallback tier
pub struct PricingCatalog;

impl PricingCatalog {
    /// Regional price for FR, plain price otherwise
    pub const REGIONAL: &'static str = "fr-phone";
    /// Currency and price, no regional prices
    pub const CURRENCY: &'static str = "usd-phone";
    /// No price information at all
    pub const BARE: &'static str = "bare-phone";
    /// Regional price stored under a lower-case key
    pub const LOWERCASE_REGION: &'static str = "jp-phone";
}

impl TestCatalog for PricingCatalog {
    fn devices() -> Vec<Device> {
        let mut regional = Device::new(Self::REGIONAL, "Fairphone", "5");
        regional.price = Some("499".to_string());
        regional
            .price_region
            .insert("FR".to_string(), "€500".to_string());
        regional.affiliate_links.push(AffiliateLink {
            url: "https://shop.example/fairphone-5".to_string(),
        });
        regional.images = Some(Images {
            gallery: vec![
                "https://img.example/fp5-front.jpg".to_string(),
                "https://img.example/fp5-back.jpg".to_string(),
            ],
        });
        regional.camera = Some(serde_json::json!({"main": "50MP", "selfie": "50MP"}));

        let mut currency = Device::new(Self::CURRENCY, "Motorola", "Edge 40");
        currency.currency = Some("USD".to_string());
        currency.price = Some("500".to_string());

        let bare = Device::new(Self::BARE, "Nokia", "G42");

        let mut lowercase = Device::new(Self::LOWERCASE_REGION, "Sony", "Xperia 10 V");
        lowercase.price = Some("450".to_string());
        lowercase
            .price_region
            .insert("jp".to_string(), "¥70000".to_string());

        vec![regional, currency, bare, lowercase]
    }
}
