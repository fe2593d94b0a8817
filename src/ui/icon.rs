use leptos::prelude::*;

/// Inline icon served from `/icons/{name}.svg`
#[component]
pub fn Icon(
    /// Icon name without the `.svg` extension
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = icon_path(name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

fn icon_path(name: &str) -> String {
    format!("/icons/{}.svg", name)
}

/// Icon names used across the site and dashboard
pub mod icons {
    pub const HOME: &str = "home";
    pub const TEMPLATE: &str = "template";
    pub const USERS: &str = "users";
    pub const CALENDAR: &str = "calendar";
    pub const CLOCK: &str = "clock";
    pub const CHART: &str = "chart";
    pub const SETTINGS: &str = "settings";
    pub const MAIL: &str = "mail";
    pub const UPLOAD: &str = "upload";
    pub const TEXT: &str = "text";
    pub const IMAGE: &str = "image";
    pub const PLUS: &str = "plus";
    pub const TRASH: &str = "trash";
    pub const EYE: &str = "eye";
    pub const EYE_CLOSED: &str = "eye-closed";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const LOGOUT: &str = "logout";
    pub const X: &str = "x";
    pub const CHECK: &str = "check";
    pub const LOADER: &str = "loader";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const SPARKLES: &str = "sparkles";
}
