use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Header, centered card slot and footer shared by the sign-in pages
#[component]
pub fn AuthPageShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col">
            <header class="border-b border-gray-200 bg-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center h-16">
                        <A href="/" attr:class="flex items-center gap-2 hover:opacity-80 transition-opacity">
                            <Icon name=icons::SPARKLES class="w-7 h-7" />
                            <span class="text-xl font-bold text-gray-900">"Drawtab"</span>
                        </A>
                    </div>
                </div>
            </header>

            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md">{children()}</div>
            </main>

            <footer class="py-4 border-t border-gray-200">
                <p class="text-center text-sm text-gray-500">
                    "© 2025 Drawtab. All rights reserved."
                </p>
            </footer>
        </div>
    }
}
