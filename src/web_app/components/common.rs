// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the application.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

/// Value of `aria-hidden` for a panel that is `open`
pub fn aria_hidden(open: bool) -> &'static str {
    if open {
        "false"
    } else {
        "true"
    }
}

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error display component
///
/// Displays error messages with appropriate styling.
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4" role="alert">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div>
                <h3 class="text-red-800 font-bold mb-1">"Error Occurred"</h3>
                <p class="text-red-600 text-sm">{error}</p>
            </div>
        </div>
    }
}

/// Modal wrapper component
///
/// Always mounted; `open` toggles visibility and keeps `aria-hidden` in
/// sync. Closes on the close button, a backdrop click, or Escape.
#[component]
pub fn ModalWrapper(
    /// Modal content
    children: Children,
    /// Whether the modal is visible
    open: Signal<bool>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal title
    #[prop(into)]
    title: Signal<String>,
) -> impl IntoView {
    // Close on escape key
    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    };

    view! {
        <div
            id="detailModal"
            class="fixed inset-0 z-50 flex items-center justify-center p-4 sm:p-6"
            class:hidden=move || !open.get()
            aria-hidden=move || aria_hidden(open.get())
            role="dialog"
            aria-modal="true"
            on:keydown=handle_keydown
        >
            // Backdrop with blur
            <div
                class="absolute inset-0 bg-gray-900/60 backdrop-blur-sm transition-opacity"
                on:click=move |_| on_close.run(())
            ></div>

            <div
                class="relative bg-white rounded-2xl shadow-2xl w-full max-w-3xl max-h-[90vh] flex flex-col overflow-hidden"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex justify-between items-center px-6 py-4 border-b border-gray-100 bg-gray-50/50">
                    <h2 class="text-xl font-bold text-gray-800">{move || title.get()}</h2>
                    <button
                        id="modalClose"
                        class="text-gray-400 hover:text-gray-600 hover:bg-gray-100 rounded-full p-2 transition-colors"
                        on:click=move |_| on_close.run(())
                        title="Close"
                        aria-label="Close"
                    >
                        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"></path>
                        </svg>
                    </button>
                </div>

                // Body (Scrollable)
                <div id="modalBody" class="p-6 overflow-y-auto custom-scrollbar">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Badge component
///
/// A small badge/tag for displaying labels.
#[component]
pub fn Badge(
    children: Children,
    /// Badge color variant
    #[prop(default = "gray")]
    variant: &'static str,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant)>
            {children()}
        </span>
    }
}

pub fn badge_class(variant: &str) -> &'static str {
    match variant {
        "green" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-green-100 text-green-800 border border-green-200",
        "blue" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-blue-100 text-blue-800 border border-blue-200",
        _ => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800 border border-gray-200",
    }
}

/// Light/dark theme toggle
#[component]
pub fn ThemeToggle(
    /// Whether the dark theme is active
    dark: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <button
            id="themeToggle"
            type="button"
            class="px-3 py-2 rounded-lg border border-gray-200 bg-white hover:bg-gray-50 \
                   text-sm font-medium text-gray-700 shadow-sm transition-colors"
            title="Toggle theme"
            aria-pressed=move || dark.get().to_string()
            on:click=move |_| dark.update(|d| *d = !*d)
        >
            {move || if dark.get() { "☀ Light" } else { "☾ Dark" }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aria_hidden_tracks_visibility() {
        assert_eq!(aria_hidden(true), "false");
        assert_eq!(aria_hidden(false), "true");
    }

    #[test]
    fn test_badge_variants() {
        assert!(badge_class("green").contains("bg-green-100"));
        assert!(badge_class("blue").contains("bg-blue-100"));
        assert!(badge_class("gray").contains("bg-gray-100"));
        assert!(badge_class("unknown").contains("bg-gray-100"));
    }
}
