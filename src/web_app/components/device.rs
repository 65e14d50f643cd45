// web_app/components/device.rs - Device display components
//
// Components for displaying devices including:
// - DeviceCard: Grid card for one list entry
// - DeviceGrid: Grid layout for one page of cards
// - DeviceDetailPanel: Gallery, spec table and buy link, shown in the modal

use leptos::prelude::*;
use crate::web_app::model::{DeviceDetail, DeviceSummary, ListPage};
use crate::web_app::pricing::ResolvedPrice;
use super::common::Badge;

/// "6.1\" · 8GB" style line under the card title; blank parts are skipped
pub fn card_specs(summary: &DeviceSummary) -> String {
    [summary.display_size.as_str(), summary.ram.as_str()]
        .into_iter()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

pub fn price_class(price: &ResolvedPrice) -> &'static str {
    match price {
        ResolvedPrice::Unavailable => "text-lg font-bold text-gray-400 bg-gray-50 px-2 py-1 rounded-lg",
        _ => "text-lg font-bold text-blue-600 bg-blue-50 px-2 py-1 rounded-lg",
    }
}

/// Summary of the list results, e.g. "13 devices found"
pub fn match_count_label(total: usize) -> String {
    if total == 1 {
        "1 device found".to_string()
    } else {
        format!("{} devices found", total)
    }
}

/// Device card for the list grid
///
/// With a click handler the card opens the detail view for its id.
#[component]
pub fn DeviceCard(
    /// The device summary to display
    summary: DeviceSummary,
    /// Click handler for viewing details
    on_click: Option<Callback<String>>,
) -> impl IntoView {
    let id = summary.id.clone();
    let specs = card_specs(&summary);
    let localized = summary.price.is_localized();
    let card_class = if on_click.is_some() {
        "group bg-white rounded-xl shadow-sm hover:shadow-xl transition-all duration-300 \
         cursor-pointer border border-gray-100 flex flex-col h-full overflow-hidden \
         transform hover:-translate-y-1"
    } else {
        "bg-white rounded-xl shadow-sm border border-gray-100 flex flex-col h-full overflow-hidden"
    };

    view! {
        <div
            class=card_class
            data-id=summary.id.clone()
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(id.clone());
                }
            }
        >
            <div class="p-5 flex flex-col flex-1">
                <div class="flex justify-between items-start mb-3">
                    <Badge>{summary.brand.clone()}</Badge>
                    <span class=price_class(&summary.price)>
                        {summary.price.to_string()}
                    </span>
                </div>

                <h3 class="font-bold text-gray-900 mb-2 line-clamp-2 text-lg group-hover:text-blue-600 transition-colors">
                    {summary.model.clone()}
                </h3>

                <p class="text-gray-600 text-sm mb-4 flex-1">{specs}</p>

                <div class="flex justify-between items-center text-xs text-gray-500 pt-3 border-t border-gray-100">
                    <span>{summary.release_date.clone()}</span>
                    {localized.then(|| view! { <Badge variant="green">"Local price"</Badge> })}
                </div>
            </div>
        </div>
    }
}

/// Grid of cards for one page
///
/// An empty page renders the "No devices found" placeholder instead.
#[component]
pub fn DeviceGrid(
    /// The page to display
    page: ListPage,
    /// Click handler passed to every card
    on_select: Option<Callback<String>>,
) -> impl IntoView {
    let count_label = match_count_label(page.total_matches);

    if page.is_empty() {
        return view! {
            <div id="list" class="text-center py-16 bg-white rounded-2xl border border-dashed border-gray-300">
                <div class="text-gray-300 text-6xl mb-4">"📱"</div>
                <h3 class="text-xl font-bold text-gray-900 mb-2">{ListPage::EMPTY_MESSAGE}</h3>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="w-full">
            <div class="flex justify-between items-center mb-6">
                <span class="text-gray-500 font-medium">{count_label}</span>
                <span class="text-gray-400 text-sm">
                    {format!("Page {} of {}", page.page, page.total_pages)}
                </span>
            </div>
            <div id="list" class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                {page.cards.into_iter().map(|summary| view! {
                    <DeviceCard summary=summary on_click=on_select />
                }).collect_view()}
            </div>
        </div>
    }
    .into_any()
}

/// Device detail view
///
/// Full device information, shown in the modal.
#[component]
pub fn DeviceDetailPanel(
    /// The device to display
    detail: DeviceDetail,
) -> impl IntoView {
    let title = detail.title.clone();
    let gallery = if detail.has_images() {
        view! {
            <div class="grid grid-cols-2 md:grid-cols-3 gap-3">
                {detail.gallery.iter().enumerate().map(|(index, url)| view! {
                    <img
                        src=url.clone()
                        alt=format!("{} image {}", title, index + 1)
                        loading="lazy"
                        class="w-full aspect-square object-contain bg-gray-50 rounded-xl border border-gray-100"
                    />
                }).collect_view()}
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="w-full h-48 bg-gray-100 rounded-xl flex items-center justify-center text-gray-400 font-medium">
                {DeviceDetail::NO_IMAGE}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="space-y-8" data-id=detail.id.clone()>
            {gallery}

            <div class="bg-gray-50 rounded-xl p-6 border border-gray-100">
                <h3 class="text-lg font-bold text-gray-900 mb-4">"Specifications"</h3>
                <table class="w-full text-sm">
                    <tbody>
                        {detail.specs.into_iter().map(|row| view! {
                            <tr class="border-b border-gray-200 last:border-0">
                                <th scope="row" class="text-left font-normal text-gray-500 py-2 pr-4 align-top">
                                    {row.label}
                                </th>
                                <td class="font-medium text-gray-900 py-2 break-all">{row.value}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="flex justify-between items-center">
                <span class="text-3xl font-bold text-blue-600 bg-blue-50 px-4 py-2 rounded-xl">
                    {detail.price.to_string()}
                </span>
                {detail.buy_link.map(|url| view! {
                    <a
                        href=url
                        target="_blank"
                        rel="noopener noreferrer sponsored"
                        class="px-6 py-3 bg-blue-600 text-white rounded-xl hover:bg-blue-700 \
                               font-semibold shadow-md transition-all"
                    >
                        "Buy"
                    </a>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::pricing::CountryCode;

    fn summary(display_size: &str, ram: &str) -> DeviceSummary {
        DeviceSummary {
            id: "1".to_string(),
            brand: "Google".to_string(),
            model: "Pixel 8".to_string(),
            display_size: display_size.to_string(),
            ram: ram.to_string(),
            release_date: "2023-10-04".to_string(),
            price: ResolvedPrice::Unavailable,
        }
    }

    #[test]
    fn test_card_specs_skip_blank_parts() {
        assert_eq!(card_specs(&summary("6.2\"", "8GB")), "6.2\" · 8GB");
        assert_eq!(card_specs(&summary("", "8GB")), "8GB");
        assert_eq!(card_specs(&summary(" ", "")), "");
    }

    #[test]
    fn test_price_class_dims_missing_price() {
        assert!(price_class(&ResolvedPrice::Unavailable).contains("text-gray-400"));
        let regional = ResolvedPrice::Regional {
            country: CountryCode::default(),
            text: "$499".to_string(),
        };
        assert!(price_class(&regional).contains("text-blue-600"));
        assert!(price_class(&ResolvedPrice::Generic("499".to_string())).contains("text-blue-600"));
    }

    #[test]
    fn test_match_count_label() {
        assert_eq!(match_count_label(0), "0 devices found");
        assert_eq!(match_count_label(1), "1 device found");
        assert_eq!(match_count_label(30), "30 devices found");
    }
}
