use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Info button that reveals a titled explanation on hover or keyboard focus
#[component]
pub fn InfoTooltip(
    /// Bold first line of the tooltip
    title: &'static str,
    /// Tooltip body
    text: &'static str,
    /// Accessible label for the trigger button
    label: &'static str,
) -> impl IntoView {
    let (is_visible, set_is_visible) = signal(false);

    view! {
        <button
            type="button"
            class="p-2 text-slate-400 hover:text-brand-500 transition-colors"
            on:mouseenter=move |_| set_is_visible.set(true)
            on:mouseleave=move |_| set_is_visible.set(false)
            on:focus=move |_| set_is_visible.set(true)
            on:blur=move |_| set_is_visible.set(false)
            aria-label=label
        >
            <Icon name=icons::INFO class="w-5 h-5"/>
        </button>
        <Show when=move || is_visible.get()>
            <div
                class="absolute right-0 top-full mt-2 p-4 max-w-xs bg-slate-900 dark:bg-slate-700 text-white text-sm rounded-xl shadow-xl z-10"
                role="tooltip"
                aria-live="polite"
            >
                <p class="font-medium mb-1">{title}</p>
                <p class="text-slate-300">{text}</p>
            </div>
        </Show>
    }
}
