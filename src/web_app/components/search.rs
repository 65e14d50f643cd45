// web_app/components/search.rs - List controls
//
// These components drive the list query:
// - BrandFilter: Brand selector with an "All brands" option
// - SearchBox: Free-text search over brand, model and OS
// - PageLinks: One button per page

use leptos::prelude::*;
use crate::web_app::model::PageControl;

/// Label of the brand option that clears the filter
pub const ALL_BRANDS: &str = "All brands";

/// Brand selector
///
/// The empty value stands for "all brands".
#[component]
pub fn BrandFilter(
    /// Known brands, sorted
    brands: Signal<Vec<String>>,
    /// Currently selected brand ("" for all)
    selected: Signal<String>,
    /// Called with the new selection
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 bg-white px-4 py-2 rounded-lg border border-gray-200 shadow-sm">
            <label for="brandFilter" class="text-sm font-medium text-gray-600">"Brand:"</label>
            <select
                id="brandFilter"
                class="text-sm font-semibold text-gray-800 bg-transparent border-none \
                       focus:ring-0 cursor-pointer pr-8"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || selected.get().is_empty()>
                    {ALL_BRANDS}
                </option>
                <For
                    each=move || brands.get()
                    key=|brand| brand.clone()
                    children=move |brand| {
                        let for_check = brand.clone();
                        let value = brand.clone();
                        view! {
                            <option
                                value=value
                                selected=move || selected.get() == for_check
                            >
                                {brand}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Search input
///
/// Every keystroke updates the query; matching is done server-side.
#[component]
pub fn SearchBox(
    /// Current search text
    value: Signal<String>,
    /// Called with the new text
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="relative flex-1">
            <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                <span class="text-gray-400">"🔍"</span>
            </div>
            <input
                id="search"
                type="search"
                placeholder="Search brand, model or OS..."
                aria-label="Search devices"
                class="w-full pl-10 pr-4 py-2 border-2 border-gray-200 rounded-xl \
                       focus:ring-4 focus:ring-blue-100 focus:border-blue-500 \
                       outline-none transition-all shadow-sm"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

pub fn page_button_class(active: bool) -> &'static str {
    if active {
        "min-w-[2.5rem] px-3 py-1.5 rounded-lg text-sm font-medium bg-blue-600 text-white shadow-sm transition-all"
    } else {
        "min-w-[2.5rem] px-3 py-1.5 rounded-lg text-sm font-medium bg-white border border-gray-200 \
         text-gray-700 hover:bg-gray-50 hover:border-gray-300 transition-all"
    }
}

/// Page buttons
///
/// Rendered even for a single page; the active page carries
/// `aria-current="page"`.
#[component]
pub fn PageLinks(
    /// One control per page
    controls: Vec<PageControl>,
    /// Called with the clicked page number
    on_select: Callback<u32>,
) -> impl IntoView {
    view! {
        <nav id="pagination" class="flex flex-wrap justify-center gap-2 mt-8" aria-label="Pagination">
            {controls.into_iter().map(|control| {
                let page = control.page;
                view! {
                    <button
                        type="button"
                        class=page_button_class(control.active)
                        aria-current=control.active.then_some("page")
                        on:click=move |_| on_select.run(page)
                    >
                        {page}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
