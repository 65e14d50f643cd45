// web_app/queries.rs - Catalog queries and render models
//
// Philosophy: Pure functions that take the catalog and the view state,
// return typed render models. No side effects, no I/O, easy to test.
// Server functions call these; components only display their output.

use std::collections::BTreeSet;

use crate::web_app::catalog::Catalog;
use crate::web_app::model::*;
use crate::web_app::pricing::{resolve_price, CountryCode};
use crate::web_app::settings::CatalogSettings;

/// Distinct brands, sorted, without blanks
pub fn brand_vocabulary(catalog: &Catalog) -> Vec<String> {
    catalog
        .devices()
        .iter()
        .map(|d| d.brand.as_str())
        .filter(|b| !b.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Exact brand match; an empty selection matches everything
pub fn matches_brand(device: &Device, brand: &str) -> bool {
    brand.is_empty() || device.brand == brand
}

/// Case-insensitive substring match on "brand model os"
pub fn matches_search(device: &Device, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let haystack = format!(
        "{} {} {}",
        device.brand,
        device.model,
        device.os().unwrap_or_default()
    )
    .to_lowercase();
    haystack.contains(&needle)
}

/// Devices matching both the brand filter and the search text, in catalog order
pub fn filter_devices<'a>(catalog: &'a Catalog, brand: &str, search: &str) -> Vec<&'a Device> {
    catalog
        .devices()
        .iter()
        .filter(|d| matches_brand(d, brand) && matches_search(d, search))
        .collect()
}

/// ceil(total / page_size), never less than 1
pub fn page_count(total: usize, page_size: usize) -> u32 {
    let page_size = page_size.max(1);
    let pages = total.div_ceil(page_size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Slice of `items` shown on the 1-based `page`; empty when out of range
pub fn page_window<T>(items: &[T], page: u32, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let Some(index) = page.checked_sub(1) else {
        return &[];
    };

    let start = (index as usize).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// One control per page, the current one marked active
pub fn page_controls(current: u32, total_pages: u32) -> Vec<PageControl> {
    (1..=total_pages.max(1))
        .map(|page| PageControl {
            page,
            active: page == current,
        })
        .collect()
}

pub fn device_summary(device: &Device, country: &CountryCode) -> DeviceSummary {
    DeviceSummary {
        id: device.id.to_string(),
        brand: device.brand.clone(),
        model: device.model.clone(),
        display_size: device.display_size().unwrap_or_default().to_string(),
        ram: device.ram().unwrap_or_default().to_string(),
        release_date: device.release_date().unwrap_or_default().to_string(),
        price: resolve_price(device, country),
    }
}

/// Build the list render model for `query`
///
/// Without the search feature the search text is ignored. Prices resolve
/// against `country` as given; picking the session or default country is
/// the caller's job.
pub fn list_page(
    catalog: &Catalog,
    query: &CatalogQuery,
    settings: &CatalogSettings,
    country: &CountryCode,
) -> ListPage {
    let search = if settings.features.search {
        query.search.as_str()
    } else {
        ""
    };

    let matches = filter_devices(catalog, &query.brand, search);
    let total_pages = page_count(matches.len(), settings.page_size);

    let cards = page_window(&matches, query.page, settings.page_size)
        .iter()
        .map(|device| device_summary(device, country))
        .collect();

    ListPage {
        cards,
        page: query.page,
        total_pages,
        total_matches: matches.len(),
        page_size: settings.page_size,
        controls: page_controls(query.page, total_pages),
    }
}

fn or_dash(value: Option<&str>) -> String {
    value
        .map(str::to_string)
        .unwrap_or_else(|| crate::web_app::pricing::NO_PRICE.to_string())
}

/// Detail render model for one device
pub fn device_detail(device: &Device, country: &CountryCode) -> DeviceDetail {
    let price = resolve_price(device, country);
    let camera = device
        .camera
        .as_ref()
        .filter(|c| !c.is_null())
        .map(|c| serde_json::to_string(c).unwrap_or_default());

    let rows = [
        ("Display", device.display_size().map(str::to_string)),
        ("OS", device.os().map(str::to_string)),
        ("Chipset", device.chipset().map(str::to_string)),
        ("RAM", device.ram().map(str::to_string)),
        ("Storage", device.storage().map(str::to_string)),
        ("Battery", device.battery_capacity().map(str::to_string)),
        ("Camera", camera),
        ("Release date", device.release_date().map(str::to_string)),
        ("Price", Some(price.text().to_string())),
    ];

    DeviceDetail {
        id: device.id.to_string(),
        title: device.title(),
        gallery: device.gallery().to_vec(),
        specs: rows
            .into_iter()
            .map(|(label, value)| SpecRow {
                label: label.to_string(),
                value: or_dash(value.as_deref()),
            })
            .collect(),
        price,
        buy_link: device.buy_link().map(str::to_string),
    }
}

/// Look up `id` in the full catalog; unknown ids give `None`
pub fn find_device_detail(
    catalog: &Catalog,
    id: &str,
    country: &CountryCode,
) -> Option<DeviceDetail> {
    catalog.find(id).map(|device| device_detail(device, country))
}
