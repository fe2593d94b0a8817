//! Dashboard shell
//!
//! Sidebar navigation and header around every `/dashboard/*` page. Visitors
//! without a session are sent to the login page.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::{use_location, use_navigate};

use crate::ui::auth::{AuthState, UserMenu, use_auth_context};
use crate::ui::icon::{Icon, icons};

/// Entry of the dashboard sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem { label: "Dashboard", href: "/dashboard", icon: icons::HOME },
    NavItem { label: "Templates", href: "/dashboard/templates", icon: icons::TEMPLATE },
    NavItem { label: "Contacts", href: "/dashboard/contacts", icon: icons::USERS },
    NavItem { label: "Events", href: "/dashboard/events", icon: icons::CLOCK },
    NavItem { label: "Calendar", href: "/dashboard/calendar", icon: icons::CALENDAR },
    NavItem { label: "Analytics", href: "/dashboard/analytics", icon: icons::CHART },
    NavItem { label: "Settings", href: "/dashboard/settings", icon: icons::SETTINGS },
];

/// Whether `item` should be highlighted for the current `path`
fn is_active(item: &NavItem, path: &str) -> bool {
    let path = path.trim_end_matches('/');
    if item.href == "/dashboard" {
        path == "/dashboard"
    } else {
        path == item.href || path.starts_with(&format!("{}/", item.href))
    }
}

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let auth = use_auth_context();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    // Redirect once the session lookup has settled without an identity
    Effect::new(move |_| {
        if auth.state.get() == AuthState::Unauthenticated {
            navigate("/auth/login", Default::default());
        }
    });

    view! {
        <div class="min-h-screen flex bg-gray-50">
            // Sidebar
            <aside class="hidden md:flex md:flex-col w-64 bg-white border-r border-gray-200">
                <A href="/" attr:class="flex items-center gap-2 h-16 px-6 border-b border-gray-200">
                    <Icon name=icons::SPARKLES class="w-6 h-6" />
                    <span class="text-lg font-bold text-gray-900">"Drawtab"</span>
                </A>
                <nav class="flex-1 px-3 py-4 space-y-1">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let item = *item;
                            view! {
                                <A
                                    href=item.href
                                    attr:class=move || {
                                        let base = "flex items-center gap-3 px-3 py-2 text-sm font-medium rounded-lg transition-colors";
                                        if is_active(&item, &pathname.get()) {
                                            format!("{} bg-blue-50 text-blue-700", base)
                                        } else {
                                            format!("{} text-gray-600 hover:bg-gray-100 hover:text-gray-900", base)
                                        }
                                    }
                                >
                                    <Icon name=item.icon class="w-5 h-5" />
                                    {item.label}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
            </aside>

            // Main column
            <div class="flex-1 flex flex-col min-w-0">
                <header class="h-16 flex items-center justify-end px-6 bg-white border-b border-gray-200">
                    <UserMenu />
                </header>
                <main class="flex-1 p-6">
                    {move || match auth.state.get() {
                        AuthState::Authenticated(_) => view! { <Outlet /> }.into_any(),
                        _ => view! {
                            <div class="flex items-center justify-center h-64">
                                <Icon name=icons::LOADER class="w-8 h-8 animate-spin" />
                            </div>
                        }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
