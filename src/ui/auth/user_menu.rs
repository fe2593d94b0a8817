//! User menu component
//!
//! Shows sign-in links when nobody is signed in, otherwise the account
//! avatar with a dropdown holding the sign-out action.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::context::{AuthState, Identity, logout, use_auth_context};
use crate::ui::icon::{Icon, icons};

/// User menu component for the header
#[component]
pub fn UserMenu() -> impl IntoView {
    let auth = use_auth_context();

    let menu_open = RwSignal::new(false);

    let handle_logout = move |_| {
        menu_open.set(false);
        let navigate = use_navigate();
        spawn_local(async move {
            if logout().await.is_ok() {
                navigate("/auth/login", Default::default());
            }
        });
    };

    view! {
        <div class="relative">
            {move || {
                match auth.state.get() {
                    AuthState::Loading => {
                        view! {
                            <div class="w-8 h-8 rounded-full bg-gray-200 animate-pulse"></div>
                        }.into_any()
                    }
                    AuthState::Unauthenticated => {
                        view! {
                            <div class="flex items-center gap-2">
                                <A
                                    href="/auth/login"
                                    attr:class="px-3 py-1.5 text-sm font-medium text-gray-600 hover:text-gray-900 transition-colors"
                                >
                                    "Sign In"
                                </A>
                                <A
                                    href="/auth/register"
                                    attr:class="px-3 py-1.5 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 rounded-lg transition-colors"
                                >
                                    "Get Started"
                                </A>
                            </div>
                        }.into_any()
                    }
                    AuthState::Authenticated(user) => {
                        view! {
                            <div class="relative">
                                <button
                                    class="flex items-center gap-2 p-1 rounded-lg hover:bg-gray-100 transition-colors"
                                    on:click=move |_| menu_open.update(|v| *v = !*v)
                                >
                                    <UserAvatar user=user.clone() size=32 />
                                    <span class="hidden sm:block text-sm font-medium text-gray-900 max-w-[120px] truncate">
                                        {user.name.clone()}
                                    </span>
                                    <Icon name=icons::CHEVRON_DOWN class="h-4 w-4" />
                                </button>

                                <Show when=move || menu_open.get()>
                                    <div class="absolute right-0 mt-2 w-56 bg-white rounded-lg shadow-lg border border-gray-200 py-1 z-50">
                                        <div class="px-4 py-3 border-b border-gray-200">
                                            <p class="text-sm font-medium text-gray-900 truncate">
                                                {user.name.clone()}
                                            </p>
                                            <p class="text-xs text-gray-500 truncate">
                                                {user.email.clone()}
                                            </p>
                                        </div>
                                        <div class="py-1">
                                            <button
                                                class="w-full px-4 py-2 text-sm text-left text-red-500
                                                       hover:bg-red-50 transition-colors flex items-center gap-2"
                                                on:click=handle_logout
                                            >
                                                <Icon name=icons::LOGOUT class="h-4 w-4" />
                                                "Sign Out"
                                            </button>
                                        </div>
                                    </div>
                                </Show>
                            </div>
                        }.into_any()
                    }
                }
            }}
        </div>
    }
}

/// Initial of the display name, falling back to the email
fn initials(user: &Identity) -> String {
    user.name
        .chars()
        .chain(user.email.chars())
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}

/// Background color derived from the account id, stable across sessions
fn avatar_color(user: &Identity) -> &'static str {
    const COLORS: [&str; 8] = [
        "bg-blue-500",
        "bg-green-500",
        "bg-yellow-500",
        "bg-red-500",
        "bg-purple-500",
        "bg-pink-500",
        "bg-indigo-500",
        "bg-teal-500",
    ];
    let hash = user
        .id
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_add(b as u32));
    COLORS[(hash as usize) % COLORS.len()]
}

/// User avatar component
#[component]
pub fn UserAvatar(
    /// Signed-in account
    user: Identity,
    /// Avatar size in pixels
    #[prop(default = 32)]
    size: u32,
) -> impl IntoView {
    let size_style = format!(
        "width: {}px; height: {}px; min-width: {}px; min-height: {}px;",
        size, size, size, size
    );
    let font_size = if size >= 40 { "text-lg" } else { "text-sm" };

    view! {
        <div
            class=format!(
                "{} rounded-full flex items-center justify-center text-white font-medium {}",
                avatar_color(&user),
                font_size,
            )
            style=size_style
        >
            {initials(&user)}
        </div>
    }
}
