//! Landing page component
//!
//! Public marketing page for Drawtab:
//! - Header with sign-in and sign-up links
//! - Hero section with calls to action
//! - Three feature cards
//! - "How it works" steps
//! - Call-to-action banner and footer

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::{AuthState, use_auth_context};
use crate::ui::icon::{Icon, icons};

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: icons::IMAGE,
        title: "Upload Templates + Define Hotspots",
        body: "Upload your PNG flyer templates and mark dynamic areas for photos, names, and custom text. Create beautiful designs once, use them forever.",
    },
    Feature {
        icon: icons::CALENDAR,
        title: "Schedule Events",
        body: "Add birthdays, anniversaries, and special events to your calendar. Set them once and let Drawtab remember and celebrate every year.",
    },
    Feature {
        icon: icons::MAIL,
        title: "Auto Email Delivery",
        body: "On the special day, personalized flyers are automatically generated and emailed to the celebrant. No manual work required.",
    },
];

const STEPS: [(&str, &str); 3] = [
    (
        "Upload & Setup",
        "Upload your PNG templates and mark hotspots for dynamic content. Add your contacts and their special dates.",
    ),
    (
        "Schedule Events",
        "Create birthday and anniversary events. Set recurring dates and choose which template to use for each celebration.",
    ),
    (
        "Automatic Delivery",
        "On the special day, personalized flyers are generated and automatically emailed. Sit back and let Drawtab celebrate for you.",
    ),
];

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = use_auth_context();
    let navigate = use_navigate();

    // Signed-in visitors go straight to their dashboard
    let on_get_started = move |_| {
        if matches!(auth.state.get(), AuthState::Authenticated(_)) {
            navigate("/dashboard", Default::default());
        } else {
            navigate("/auth/register", Default::default());
        }
    };

    view! {
        <Title text="Drawtab - Automated Flyer Campaigns" />
        <Meta
            name="description"
            content="Upload flyer templates, schedule events, and let Drawtab generate and email personalized flyers for birthdays, anniversaries, and special occasions."
        />

        <div class="min-h-screen bg-white">
            // Header
            <header class="max-w-7xl mx-auto flex items-center justify-between px-6 py-6 lg:px-8">
                <A href="/" attr:class="flex items-center gap-2">
                    <Icon name=icons::SPARKLES class="w-7 h-7" />
                    <span class="text-xl font-bold text-gray-900">"Drawtab"</span>
                </A>
                <div class="flex items-center gap-4">
                    <A href="/auth/login" attr:class="text-sm font-semibold text-gray-900">
                        "Sign in"
                    </A>
                    <A
                        href="/auth/register"
                        attr:class="rounded-md bg-blue-600 px-3.5 py-2 text-sm font-semibold text-white hover:bg-blue-500"
                    >
                        "Get Started"
                    </A>
                </div>
            </header>

            <main>
                // Hero Section
                <section class="max-w-4xl mx-auto px-6 py-24 text-center">
                    <h1 class="text-4xl sm:text-6xl font-bold tracking-tight text-gray-900">
                        "Create and schedule event flyers that "
                        <span class="text-blue-600">"deliver themselves"</span>
                    </h1>
                    <p class="mt-6 text-lg leading-8 text-gray-600">
                        "Upload your PNG templates, schedule events, and let Drawtab automatically generate and email personalized flyers for birthdays, anniversaries, and special occasions."
                    </p>
                    <div class="mt-10 flex items-center justify-center gap-x-6">
                        <button
                            class="rounded-md bg-blue-600 px-5 py-3 text-sm font-semibold text-white shadow-sm hover:bg-blue-500"
                            on:click=on_get_started
                        >
                            "Get Started"
                        </button>
                        <a href="#how-it-works" class="text-sm font-semibold text-gray-900">
                            "Learn more " <span aria-hidden="true">"→"</span>
                        </a>
                    </div>
                </section>

                // Features Section
                <section class="bg-gray-50 py-24">
                    <div class="max-w-7xl mx-auto px-6 lg:px-8">
                        <div class="text-center">
                            <h2 class="text-base font-semibold text-blue-600">"Automate Everything"</h2>
                            <p class="mt-2 text-3xl font-bold tracking-tight text-gray-900 sm:text-4xl">
                                "Three simple steps to automated celebrations"
                            </p>
                        </div>
                        <dl class="mt-16 grid grid-cols-1 gap-8 lg:grid-cols-3">
                            {FEATURES
                                .iter()
                                .map(|feature| view! {
                                    <div class="bg-white rounded-2xl p-8 shadow-sm border border-gray-100">
                                        <dt class="flex items-center gap-3 text-base font-semibold text-gray-900">
                                            <Icon name=feature.icon class="w-6 h-6" />
                                            {feature.title}
                                        </dt>
                                        <dd class="mt-4 text-base leading-7 text-gray-600">{feature.body}</dd>
                                    </div>
                                })
                                .collect_view()}
                        </dl>
                    </div>
                </section>

                // How It Works
                <section id="how-it-works" class="py-24">
                    <div class="max-w-7xl mx-auto px-6 lg:px-8">
                        <div class="text-center">
                            <h2 class="text-3xl font-bold tracking-tight text-gray-900">"How Drawtab Works"</h2>
                            <p class="mt-4 text-lg text-gray-600">
                                "From template upload to automated delivery - see how simple celebration automation can be."
                            </p>
                        </div>
                        <ol class="mt-16 grid grid-cols-1 gap-8 md:grid-cols-3">
                            {STEPS
                                .iter()
                                .enumerate()
                                .map(|(i, (title, body))| view! {
                                    <li class="text-center">
                                        <div class="mx-auto w-12 h-12 rounded-full bg-blue-600 text-white flex items-center justify-center text-lg font-bold">
                                            {i + 1}
                                        </div>
                                        <h3 class="mt-6 text-lg font-semibold text-gray-900">{*title}</h3>
                                        <p class="mt-2 text-gray-600">{*body}</p>
                                    </li>
                                })
                                .collect_view()}
                        </ol>
                    </div>
                </section>

                // CTA Banner
                <section class="bg-blue-600 py-16">
                    <div class="max-w-4xl mx-auto px-6 text-center">
                        <h2 class="text-3xl font-bold tracking-tight text-white">
                            "Start automating your celebrations today"
                        </h2>
                        <p class="mt-4 text-lg text-blue-100">
                            "Join hundreds of users who never miss a birthday or anniversary again. Create your first automated flyer in minutes."
                        </p>
                        <A
                            href="/auth/register"
                            attr:class="mt-8 inline-block rounded-md bg-white px-5 py-3 text-sm font-semibold text-blue-600 hover:bg-blue-50"
                        >
                            "Get Started Free"
                        </A>
                    </div>
                </section>
            </main>

            // Footer
            <footer class="border-t border-gray-200 py-10">
                <p class="text-center text-sm text-gray-500">
                    "© 2025 Drawtab. All rights reserved."
                </p>
            </footer>
        </div>
    }
}
