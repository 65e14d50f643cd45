// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro automatically
// generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// Server functions are bridges, not business logic: they fetch the shared
// catalog and configuration, then call the pure functions in `queries`.
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use crate::web_app::model::*;
use crate::web_app::pricing::{CountryCode, SessionLocale};
use crate::web_app::settings::CatalogSettings;

#[cfg(feature = "ssr")]
fn catalog() -> Result<std::sync::Arc<crate::web_app::catalog::Catalog>, ServerFnError> {
    use crate::web_app::api::store;

    store::get_catalog().map_err(|e| {
        let reason = store::load_failure()
            .map(str::to_string)
            .unwrap_or_else(|| e.to_string());
        tracing::error!("Catalog request failed: {}", reason);
        ServerFnError::new(format!("Catalog unavailable: {}", reason))
    })
}

/// Session country when locale pricing is on, the default country otherwise
#[cfg(feature = "ssr")]
fn pricing_country(country: Option<CountryCode>) -> CountryCode {
    let config = crate::web_app::api::store::config();
    match country {
        Some(country) if config.settings.features.locale_pricing => country,
        _ => config.default_country,
    }
}

/// Visitor IP from the current Actix request, if there is one
#[cfg(feature = "ssr")]
async fn visitor_ip() -> Option<std::net::IpAddr> {
    use actix_web::HttpRequest;
    use leptos_actix::extract;
    use crate::web_app::api::geo;

    match extract::<HttpRequest>().await {
        Ok(req) => {
            let info = req.connection_info();
            let ip = info.realip_remote_addr().and_then(geo::client_ip);
            ip
        }
        Err(e) => {
            tracing::debug!("No request context for visitor IP: {}", e);
            None
        }
    }
}

/// Page size and enabled features
#[server(GetCatalogSettings, "/api")]
pub async fn get_catalog_settings() -> Result<CatalogSettings, ServerFnError> {
    Ok(crate::web_app::api::store::config().settings)
}

/// Brand selector options
#[server(GetBrands, "/api")]
pub async fn get_brands() -> Result<Vec<String>, ServerFnError> {
    use crate::web_app::queries;

    let catalog = catalog()?;
    Ok(queries::brand_vocabulary(&catalog))
}

/// One page of the filtered list
///
/// `country` is the session country once it is known; `None` prices
/// against the configured default.
#[server(ListDevices, "/api")]
pub async fn list_devices(
    query: CatalogQuery,
    country: Option<CountryCode>,
) -> Result<ListPage, ServerFnError> {
    use crate::web_app::api::store;
    use crate::web_app::queries;

    let catalog = catalog()?;
    let settings = store::config().settings;
    let country = pricing_country(country);

    let page = queries::list_page(&catalog, &query, &settings, &country);
    tracing::info!(
        "List request: brand='{}', search='{}', page={}, country={} -> {} of {} matches",
        query.brand,
        query.search,
        query.page,
        country,
        page.cards.len(),
        page.total_matches
    );
    Ok(page)
}

/// Detail for one device; `None` for unknown ids or when the detail view is off
#[server(GetDeviceDetail, "/api")]
pub async fn get_device_detail(
    id: String,
    country: Option<CountryCode>,
) -> Result<Option<DeviceDetail>, ServerFnError> {
    use crate::web_app::api::store;
    use crate::web_app::queries;

    if !store::config().settings.features.detail_view {
        tracing::debug!("Detail view disabled, ignoring request for '{}'", id);
        return Ok(None);
    }

    let catalog = catalog()?;
    let detail = queries::find_device_detail(&catalog, &id, &pricing_country(country));
    if detail.is_none() {
        tracing::debug!("No device with id '{}'", id);
    }
    Ok(detail)
}

/// Country of the visitor, defaulted on any failure
#[server(ResolveLocale, "/api")]
pub async fn resolve_locale() -> Result<SessionLocale, ServerFnError> {
    use crate::web_app::api::{geo, store};

    let config = store::config();
    if !config.settings.features.locale_pricing {
        return Ok(SessionLocale::defaulted(
            config.default_country,
            "locale pricing disabled",
        ));
    }

    let Some(client) = geo::geo_client() else {
        return Ok(SessionLocale::defaulted(
            config.default_country,
            "geolocation disabled",
        ));
    };

    let ip = visitor_ip().await;
    Ok(client.resolve(ip, &config.default_country).await)
}
