use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file name without `.svg`)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icon names available under `/icons`
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHECK: &str = "check";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CLOCK: &str = "clock";
    pub const HOME: &str = "home";
    pub const INFO: &str = "info";
    pub const LOADER: &str = "loader";
    pub const MAIL: &str = "mail";
    pub const MAP: &str = "map";
    pub const MAP_PIN: &str = "map-pin";
    pub const MENU: &str = "menu";
    pub const MOON: &str = "moon";
    pub const PHONE: &str = "phone";
    pub const SEARCH: &str = "search";
    pub const SPARKLES: &str = "sparkles";
    pub const SUN: &str = "sun";
    pub const TAG: &str = "tag";
    pub const WIFI: &str = "wifi";
    pub const X: &str = "x";
    pub const X_CIRCLE: &str = "x-circle";
    pub const ZAP: &str = "zap";
}

/// Icon shown on a use-case filter chip
pub fn use_case_icon(use_case: crate::core::UseCase) -> &'static str {
    use crate::core::UseCase;

    match use_case {
        UseCase::WorkFromHome => icons::HOME,
        UseCase::Gaming => "gamepad",
        UseCase::Streaming => "monitor",
        UseCase::LargeHousehold => "users",
    }
}
