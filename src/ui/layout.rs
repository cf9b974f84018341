//! Site chrome: header, footer and the call-to-action overlays

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::Reveal;
use crate::ui::theme::use_theme_context;
use crate::ui::{use_pathname, use_site_config};

const NAV_LINK: &str = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
const NAV_LINK_ACTIVE: &str = "text-brand-600 dark:text-brand-400 bg-brand-50 dark:bg-brand-900/30";
const NAV_LINK_IDLE: &str = "text-slate-600 dark:text-slate-400 hover:text-slate-900 dark:hover:text-white hover:bg-slate-100 dark:hover:bg-slate-800";

/// Current calendar year for the copyright line
fn current_year() -> i32 {
    #[cfg(feature = "ssr")]
    {
        use chrono::Datelike;
        chrono::Utc::now().year()
    }
    #[cfg(not(feature = "ssr"))]
    {
        js_sys::Date::new_0().get_full_year() as i32
    }
}

/// "W" badge plus wordmark
#[component]
fn Logo(#[prop(default = false)] large: bool) -> impl IntoView {
    let (badge, text) = if large {
        ("w-10 h-10 text-xl", "text-2xl")
    } else {
        ("w-9 h-9 text-lg", "text-xl")
    };

    view! {
        <div class=format!("rounded-xl bg-gradient-to-br from-brand-500 to-cyan-500 flex items-center justify-center shadow-lg shadow-brand-500/30 {}", badge)>
            <span class="text-white font-bold font-display">"W"</span>
        </div>
        <span class=format!("font-display font-bold {}", text)>
            "wandb"<span class="text-brand-500">".online"</span>
        </span>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <button
            class="p-2 rounded-lg text-slate-600 dark:text-slate-300 hover:bg-slate-100 dark:hover:bg-slate-800 transition-colors"
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
        >
            {move || {
                if theme.is_dark.get() {
                    view! { <Icon name=icons::SUN class="w-5 h-5"/> }
                } else {
                    view! { <Icon name=icons::MOON class="w-5 h-5"/> }
                }
            }}
        </button>
    }
}

/// Fixed header with primary navigation and mobile menu
#[component]
pub fn Header() -> impl IntoView {
    let site = use_site_config();
    let pathname = use_pathname();
    let (menu_open, set_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(false);

    // Close the mobile menu after navigating
    Effect::new(move |_| {
        pathname.track();
        set_menu_open.set(false);
    });

    #[cfg(not(feature = "ssr"))]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = window().scroll_y().unwrap_or_default();
            set_scrolled.set(y > 20.0);
        });
        on_cleanup(move || drop(handle));
    }
    #[cfg(feature = "ssr")]
    let _ = set_scrolled;

    let nav_class = move |href: &'static str, base: &'static str| {
        move || {
            let state = if pathname.get() == href {
                NAV_LINK_ACTIVE
            } else {
                NAV_LINK_IDLE
            };
            format!("{} {}", base, state)
        }
    };

    let desktop_links = site
        .navigation
        .iter()
        .copied()
        .map(|item| {
            view! {
                <A href=item.href attr:class=nav_class(item.href, NAV_LINK)>
                    {item.name}
                </A>
            }
        })
        .collect_view();

    let mobile_links = site
        .navigation
        .iter()
        .copied()
        .map(|item| {
            view! {
                <A
                    href=item.href
                    attr:class=nav_class(item.href, "block px-4 py-3 rounded-xl text-base font-medium transition-colors")
                >
                    {item.name}
                </A>
            }
        })
        .collect_view();

    view! {
        <header
            class="fixed top-0 left-0 right-0 z-50 transition-all duration-300"
            class=("bg-white/80", move || scrolled.get())
            class=("dark:bg-slate-900/80", move || scrolled.get())
            class=("backdrop-blur-xl", move || scrolled.get())
            class=("shadow-lg", move || scrolled.get())
        >
            <nav class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16 lg:h-20">
                    <A href="/" attr:class="flex items-center gap-2 text-slate-900 dark:text-white">
                        <Logo/>
                    </A>

                    // Desktop navigation
                    <div class="hidden lg:flex items-center gap-1">{desktop_links}</div>

                    <div class="hidden lg:flex items-center gap-3">
                        <ThemeToggle/>
                        <a
                            href=site.phone_link
                            class="flex items-center gap-2 px-5 py-2.5 rounded-xl bg-gradient-to-r from-brand-600 to-brand-500 font-semibold text-white shadow-lg shadow-brand-500/25"
                        >
                            <Icon name=icons::PHONE class="w-4 h-4"/>
                            <span>{site.phone}</span>
                        </a>
                    </div>

                    // Mobile menu button
                    <div class="flex lg:hidden items-center gap-2">
                        <ThemeToggle/>
                        <button
                            class="p-2 rounded-lg text-slate-600 dark:text-slate-300 hover:bg-slate-100 dark:hover:bg-slate-800"
                            on:click=move |_| set_menu_open.update(|v| *v = !*v)
                            aria-label="Toggle menu"
                            aria-expanded=move || menu_open.get().to_string()
                        >
                            {move || {
                                if menu_open.get() {
                                    view! { <Icon name=icons::X class="w-5 h-5"/> }
                                } else {
                                    view! { <Icon name=icons::MENU class="w-5 h-5"/> }
                                }
                            }}
                        </button>
                    </div>
                </div>
            </nav>

            // Mobile menu
            <div
                class="lg:hidden overflow-hidden transition-all duration-300 bg-white dark:bg-slate-900 border-t border-slate-200 dark:border-slate-800"
                class=("max-h-0", move || !menu_open.get())
                class=("max-h-screen", move || menu_open.get())
            >
                <div class="px-4 py-4 space-y-1">
                    {mobile_links}
                    <div class="pt-4 border-t border-slate-200 dark:border-slate-700">
                        <a
                            href=site.phone_link
                            class="flex items-center justify-center gap-2 w-full px-4 py-3 rounded-xl bg-gradient-to-r from-brand-600 to-brand-500 font-semibold text-white"
                        >
                            <Icon name=icons::PHONE class="w-4 h-4"/>
                            <span>{format!("Call {}", site.phone)}</span>
                        </a>
                    </div>
                </div>
            </div>
        </header>
    }
}

/// Footer with contact details, link groups and the legal disclaimer
#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site_config();

    let groups = site
        .footer_groups
        .iter()
        .copied()
        .enumerate()
        .map(|(i, group)| {
            let links = group
                .links
                .iter()
                .map(|link| {
                    view! {
                        <li>
                            <A href=link.href attr:class="text-slate-400 hover:text-white transition-colors">
                                {link.name}
                            </A>
                        </li>
                    }
                })
                .collect_view();

            view! {
                <Reveal delay_ms=crate::ui::reveal::stagger(i)>
                    <h4 class="font-display font-semibold text-lg mb-4">{group.title}</h4>
                    <ul class="space-y-3">{links}</ul>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <footer class="bg-slate-900 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-6 gap-12">
                    <div class="lg:col-span-2">
                        <A href="/" attr:class="flex items-center gap-2 mb-6">
                            <Logo large=true/>
                        </A>
                        <p class="text-slate-400 mb-6 max-w-sm">{site.description}</p>
                        <div class="space-y-3">
                            <a href=site.phone_link class="flex items-center gap-3 text-slate-300 hover:text-white transition-colors">
                                <Icon name=icons::PHONE class="w-5 h-5"/>
                                <span class="font-semibold">{site.phone}</span>
                            </a>
                            <a href=site.email_link class="flex items-center gap-3 text-slate-300 hover:text-white transition-colors">
                                <Icon name=icons::MAIL class="w-5 h-5"/>
                                <span>{site.email}</span>
                            </a>
                            <div class="flex items-center gap-3 text-slate-400">
                                <Icon name=icons::CLOCK class="w-5 h-5"/>
                                <span>{site.hours}</span>
                            </div>
                        </div>
                    </div>
                    {groups}
                </div>
            </div>

            <div class="border-t border-slate-800">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                    <p class="text-slate-500 text-sm leading-relaxed text-center max-w-4xl mx-auto">
                        {site.disclaimers.footer}
                    </p>
                </div>
            </div>

            <div class="border-t border-slate-800">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6">
                    <p class="text-slate-600 text-sm text-center">
                        {format!("© {} {}. All rights reserved.", current_year(), site.name)}
                    </p>
                </div>
            </div>
        </footer>
    }
}

/// Desktop call bar pinned to the bottom of the viewport
#[component]
pub fn StickyCallBar() -> impl IntoView {
    let site = use_site_config();
    let pathname = use_pathname();
    let visible = {
        let site = site.clone();
        move || site.shows_call_bar(&pathname.get())
    };

    view! {
        <Show when=visible>
            <div class="fixed bottom-0 left-0 right-0 z-40 hidden lg:block bg-slate-900/95 backdrop-blur-xl border-t border-slate-700/50 shadow-2xl">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4">
                    <div class="flex items-center justify-between">
                        <div class="flex items-center gap-6">
                            <div class="flex items-center gap-2 text-slate-400">
                                <Icon name=icons::CLOCK class="w-4 h-4"/>
                                <span class="text-sm">{site.hours}</span>
                            </div>
                            <p class="text-white font-medium">
                                "Call to confirm availability at your address"
                            </p>
                        </div>
                        <a
                            href=site.phone_link
                            class="flex items-center gap-3 px-8 py-3 bg-gradient-to-r from-brand-500 to-cyan-500 rounded-xl font-semibold text-white shadow-lg shadow-brand-500/30"
                        >
                            <Icon name=icons::PHONE class="w-5 h-5"/>
                            <span class="text-lg">{site.phone}</span>
                        </a>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Round call button for small screens
#[component]
pub fn FloatingCallButton() -> impl IntoView {
    let site = use_site_config();
    let pathname = use_pathname();
    let visible = {
        let site = site.clone();
        move || site.shows_call_bar(&pathname.get())
    };

    view! {
        <Show when=visible>
            <a
                href=site.phone_link
                class="fixed bottom-6 right-6 z-40 lg:hidden w-16 h-16 rounded-full bg-gradient-to-br from-brand-500 to-cyan-500 shadow-xl shadow-brand-500/40 flex items-center justify-center"
                aria-label="Call us"
            >
                <span class="absolute inset-0 rounded-full bg-brand-500 animate-ping opacity-30"></span>
                <Icon name=icons::PHONE class="w-7 h-7 relative z-10"/>
            </a>
        </Show>
    }
}
