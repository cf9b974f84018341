use crate::core::ProviderInfo;
use crate::ui::icon::{Icon, icons};
use crate::ui::use_site_config;
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Lock or unlock page scrolling behind an open modal
#[cfg(not(feature = "ssr"))]
fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = leptos::web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let class_list = body.class_list();
        let _ = if locked {
            class_list.add_1("overflow-hidden")
        } else {
            class_list.remove_1("overflow-hidden")
        };
    }
}

/// Overlay with a centered panel, closed by Escape or a backdrop click
#[component]
pub fn BaseModal(
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Accessible label for the dialog
    label: String,
    /// Modal content
    children: Children,
    /// Maximum width class
    #[prop(default = "max-w-md")]
    max_width: &'static str,
) -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.with_untracked(|v| *v) {
                on_close.run(());
            }
        });

        Effect::new(move |_| set_body_scroll_locked(is_open.get()));

        on_cleanup(move || {
            drop(handle_keydown);
            set_body_scroll_locked(false);
        });
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "modal-backdrop fixed inset-0 z-[100] flex items-center justify-center p-4 bg-black/60 backdrop-blur-sm transition-opacity duration-300"
                } else {
                    "modal-backdrop fixed inset-0 z-[100] flex items-center justify-center p-4 bg-black/60 opacity-0 pointer-events-none transition-opacity duration-300"
                }
            }
            role="dialog"
            aria-modal="true"
            aria-label=label
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |e| {
                #[cfg(not(feature = "ssr"))]
                {
                    if let Some(element) = e.target().and_then(|t| t.dyn_into::<leptos::web_sys::Element>().ok()) {
                        if element.class_list().contains("modal-backdrop") {
                            on_close.run(());
                        }
                    }
                }
                #[cfg(feature = "ssr")]
                {
                    let _ = e;
                }
            }
        >
            <div class=format!("relative w-full {} rounded-3xl overflow-hidden shadow-2xl", max_width)>
                <button
                    class="absolute top-4 right-4 z-20 p-2 rounded-full bg-black/20 hover:bg-black/40 text-white transition-colors"
                    on:click=move |_| on_close.run(())
                    aria-label="Close"
                >
                    <Icon name=icons::X class="w-5 h-5"/>
                </button>
                {children()}
            </div>
        </div>
    }
}

/// Call prompt shown when a provider page opens
#[component]
pub fn ProviderPopup(
    provider: ProviderInfo,
    is_open: Signal<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    let site = use_site_config();

    view! {
        <BaseModal
            is_open=is_open
            on_close=on_close
            label=format!("Connect with a {} specialist", provider.name)
        >
            <div
                class="relative px-8 py-10 text-center"
                style=format!("background-color: {}", provider.color)
            >
                <h2 class="font-display font-bold text-4xl text-white lowercase tracking-tight">
                    {provider.name}
                </h2>
            </div>

            <div class="relative bg-slate-900/95 px-8 py-10 text-center">
                <h3 class="font-display font-bold text-2xl text-white mb-3">
                    {format!("Connect with a {} Specialist", provider.name)}
                </h3>
                <p class="text-slate-400 mb-8">
                    "Call to compare options and confirm availability for your address."
                </p>

                <a
                    href=site.phone_link
                    class="inline-flex items-center justify-center gap-3 w-full py-5 rounded-2xl font-bold text-xl text-white"
                    style=format!("background-color: {}", provider.color)
                >
                    <Icon name=icons::PHONE class="w-6 h-6"/>
                    <span>{site.phone}</span>
                </a>

                <div class="mt-8 pt-6 border-t border-slate-700/50">
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4 text-sm text-slate-400">
                        <span class="flex items-center gap-2">
                            <Icon name=icons::CLOCK class="w-4 h-4"/>
                            {site.hours}
                        </span>
                        <span class="hidden sm:inline text-slate-600">"•"</span>
                        <a href=site.email_link class="flex items-center gap-2 hover:text-white transition-colors">
                            <Icon name=icons::MAIL class="w-4 h-4"/>
                            {site.email}
                        </a>
                    </div>
                </div>
            </div>
        </BaseModal>
    }
}
