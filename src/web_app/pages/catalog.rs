// web_app/pages/catalog.rs - Catalog page component
//
// The device list page: composes the list controls, the card grid, the
// pagination and the detail modal, and owns the view state.

use leptos::prelude::*;
use crate::web_app::model::*;
use crate::web_app::components::*;
use crate::web_app::pricing::{CountryCode, SessionLocale};
use crate::web_app::server_fns::{
    get_brands, get_catalog_settings, get_device_detail, list_devices, resolve_locale,
};

/// Header text describing which country prices are shown for
pub fn locale_label(locale: &SessionLocale) -> String {
    if locale.is_resolved() {
        format!("Prices for {}", locale.country())
    } else {
        format!("Prices for {} (default)", locale.country())
    }
}

/// Country to send with list and detail requests once the locale is known
///
/// A defaulted locale keeps `None` so the server applies its own default.
pub fn session_country(locale: &SessionLocale) -> Option<CountryCode> {
    locale.is_resolved().then(|| locale.country().clone())
}

/// Main catalog page component
///
/// Orchestrates the catalog experience with:
/// - Brand filter and search box
/// - Card grid and pagination
/// - Detail modal
/// - Session country lookup for localized prices
#[component]
pub fn CatalogPage() -> impl IntoView {
    // View state
    let query = RwSignal::new(CatalogQuery::default());
    let country = RwSignal::new(None::<CountryCode>);
    let locale = RwSignal::new(None::<SessionLocale>);
    let selected_id = RwSignal::new(None::<String>);
    let dark = RwSignal::new(false);

    let settings = Resource::new(|| (), |_| async move { get_catalog_settings().await });
    let brands = Resource::new(|| (), |_| async move { get_brands().await });

    // Re-fetches when the query or the session country changes, so cards
    // rendered before the locale arrived get their localized prices.
    let list = Resource::new(
        move || (query.get(), country.get()),
        move |(q, c)| async move { list_devices(q, c).await },
    );

    let detail = Resource::new(
        move || (selected_id.get(), country.get()),
        move |(id, c)| async move {
            match id {
                Some(id) => get_device_detail(id, c).await,
                None => Ok(None),
            }
        },
    );

    // The locale lookup runs in the browser only and never blocks the list
    let session_locale = LocalResource::new(|| async move { resolve_locale().await });
    Effect::new(move || {
        if let Some(Ok(resolved)) = session_locale.get() {
            country.set(session_country(&resolved));
            locale.set(Some(resolved));
        }
    });

    let brand_options = Signal::derive(move || {
        brands
            .get()
            .and_then(|r: Result<Vec<String>, ServerFnError>| r.ok())
            .unwrap_or_default()
    });

    let open_detail = Signal::derive(move || {
        detail
            .get()
            .and_then(|r: Result<Option<DeviceDetail>, ServerFnError>| r.ok())
            .flatten()
    });
    let modal_open = Signal::derive(move || open_detail.get().is_some());
    let modal_title = Signal::derive(move || {
        open_detail.get().map(|d| d.title).unwrap_or_default()
    });

    let on_brand = Callback::new(move |brand: String| {
        query.update(|q| *q = std::mem::take(q).with_brand(brand));
    });
    let on_search = Callback::new(move |search: String| {
        query.update(|q| *q = std::mem::take(q).with_search(search));
    });
    let on_page = Callback::new(move |page: u32| {
        query.update(|q| q.page = page);
    });
    let on_select = Callback::new(move |id: String| {
        selected_id.set(Some(id));
    });
    let on_close_modal = Callback::new(move |()| {
        selected_id.set(None);
    });

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900" class:dark=move || dark.get()>
            // Header
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                    <div class="flex items-center gap-2">
                        <span class="text-2xl">"📱"</span>
                        <h1 class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-blue-600 to-indigo-600">
                            "Device Catalog"
                        </h1>
                    </div>
                    <div class="flex items-center gap-4">
                        {move || locale.get().map(|l| view! {
                            <span class="text-sm text-gray-500">{locale_label(&l)}</span>
                        })}
                        <ThemeToggle dark=dark />
                    </div>
                </div>
            </header>

            // Main content
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <Suspense fallback=move || view! {
                    <div class="bg-white rounded-2xl p-12 shadow-sm border border-gray-100 text-center">
                        <Loading message="Loading catalog..." />
                    </div>
                }>
                    {move || match settings.get() {
                        None => view! { <Loading message="Initializing..." /> }.into_any(),
                        Some(Err(e)) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                        Some(Ok(s)) => {
                            let features = s.features;
                            let card_click = features.detail_view.then_some(on_select);
                            view! {
                                // Controls
                                <section class="bg-white rounded-2xl shadow-sm p-6 mb-8 border border-gray-100 \
                                                flex flex-col md:flex-row gap-4 md:items-center">
                                    <BrandFilter
                                        brands=brand_options
                                        selected=Signal::derive(move || query.get().brand)
                                        on_change=on_brand
                                    />
                                    <Show when=move || features.search>
                                        <SearchBox
                                            value=Signal::derive(move || query.get().search)
                                            on_input=on_search
                                        />
                                    </Show>
                                </section>

                                // Results
                                <section class="w-full min-w-0">
                                    {move || match list.get() {
                                        None => view! {
                                            <div class="bg-white rounded-2xl p-12 shadow-sm border border-gray-100">
                                                <Loading message="Loading devices..." />
                                            </div>
                                        }.into_any(),
                                        Some(Err(e)) => view! {
                                            <ErrorDisplay error=e.to_string() />
                                        }.into_any(),
                                        Some(Ok(page)) => {
                                            let controls = page.controls.clone();
                                            view! {
                                                <div class="animate-fade-in">
                                                    <DeviceGrid page=page on_select=card_click />
                                                    <PageLinks controls=controls on_select=on_page />
                                                </div>
                                            }.into_any()
                                        }
                                    }}
                                </section>
                            }.into_any()
                        }
                    }}
                </Suspense>
            </main>

            // Footer
            <footer class="bg-white border-t border-gray-200 mt-12 py-8">
                <div class="max-w-7xl mx-auto px-4 text-center text-gray-500 text-sm">
                    <p>"Device Catalog. Built with Leptos and Actix."</p>
                </div>
            </footer>

            // Device detail modal (always mounted, hidden until a detail loads)
            <ModalWrapper open=modal_open title=modal_title on_close=on_close_modal>
                {move || open_detail.get().map(|d| view! { <DeviceDetailPanel detail=d /> })}
            </ModalWrapper>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_label() {
        let fr = SessionLocale::Resolved(CountryCode::parse("fr").unwrap());
        assert_eq!(locale_label(&fr), "Prices for FR");
        assert_eq!(locale_label(&SessionLocale::default()), "Prices for US (default)");
    }

    #[test]
    fn test_session_country_only_for_resolved_locale() {
        let de = SessionLocale::Resolved(CountryCode::parse("DE").unwrap());
        assert_eq!(session_country(&de).unwrap().as_str(), "DE");

        let defaulted = SessionLocale::defaulted(CountryCode::parse("GB").unwrap(), "timeout");
        assert_eq!(session_country(&defaulted), None);
    }
}
