//! Template library page
//!
//! Grid of uploaded templates with category tabs. The list is sample data
//! until templates are read from the platform database.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

const ALL_CATEGORIES: &str = "All";

/// Filter tabs shown above the grid
pub const CATEGORY_TABS: [&str; 5] = [ALL_CATEGORIES, "Birthday", "Anniversary", "Promotion", "Holiday"];

/// Summary of a template as shown on its card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateCard {
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,
    pub hotspots: u32,
    pub usage_count: u32,
    pub created_at: &'static str,
}

const SAMPLE_TEMPLATES: [TemplateCard; 4] = [
    TemplateCard {
        id: 1,
        name: "Birthday Celebration",
        category: "Birthday",
        hotspots: 3,
        usage_count: 12,
        created_at: "2025-01-15",
    },
    TemplateCard {
        id: 2,
        name: "Work Anniversary",
        category: "Anniversary",
        hotspots: 4,
        usage_count: 8,
        created_at: "2025-01-10",
    },
    TemplateCard {
        id: 3,
        name: "Elegant Birthday",
        category: "Birthday",
        hotspots: 2,
        usage_count: 15,
        created_at: "2025-01-05",
    },
    TemplateCard {
        id: 4,
        name: "Wedding Anniversary",
        category: "Anniversary",
        hotspots: 5,
        usage_count: 6,
        created_at: "2024-12-20",
    },
];

/// Cards belonging to `category`; "All" keeps every card
fn filter_by_category(templates: &[TemplateCard], category: &str) -> Vec<TemplateCard> {
    templates
        .iter()
        .filter(|t| category == ALL_CATEGORIES || t.category == category)
        .copied()
        .collect()
}

#[component]
pub fn TemplatesPage() -> impl IntoView {
    let selected = RwSignal::new(ALL_CATEGORIES);
    let visible = move || filter_by_category(&SAMPLE_TEMPLATES, selected.get());

    view! {
        <Title text="Templates - Drawtab" />

        <div class="space-y-6">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">"Templates"</h1>
                    <p class="mt-1 text-sm text-gray-500">
                        "Manage your flyer templates and create new ones"
                    </p>
                </div>
                <A
                    href="/dashboard/templates/new"
                    attr:class="inline-flex items-center gap-2 px-4 py-2 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 rounded-lg"
                >
                    <Icon name=icons::PLUS class="w-4 h-4" />
                    "New Template"
                </A>
            </div>

            // Filters
            <nav class="flex gap-6 border-b border-gray-200">
                {CATEGORY_TABS
                    .iter()
                    .map(|category| {
                        let category = *category;
                        view! {
                            <button
                                type="button"
                                class="whitespace-nowrap py-2 px-1 border-b-2 font-medium text-sm transition-colors"
                                class:border-blue-500=move || selected.get() == category
                                class:text-blue-600=move || selected.get() == category
                                class:border-transparent=move || selected.get() != category
                                class:text-gray-500=move || selected.get() != category
                                on:click=move |_| selected.set(category)
                            >
                                {category}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            // Templates Grid
            <Show
                when=move || !visible().is_empty()
                fallback=|| view! {
                    <div class="text-center py-16">
                        <Icon name=icons::IMAGE class="mx-auto w-12 h-12" />
                        <h3 class="mt-2 text-sm font-semibold text-gray-900">"No templates"</h3>
                        <p class="mt-1 text-sm text-gray-500">
                            "Get started by creating your first flyer template."
                        </p>
                        <A
                            href="/dashboard/templates/new"
                            attr:class="mt-6 inline-flex items-center gap-2 px-4 py-2 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 rounded-lg"
                        >
                            <Icon name=icons::PLUS class="w-4 h-4" />
                            "New Template"
                        </A>
                    </div>
                }
            >
                <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3">
                    <For each=visible key=|template| template.id let:template>
                        <div class="group bg-white rounded-lg border border-gray-200 overflow-hidden shadow-sm">
                            <div class="aspect-[4/3] bg-gray-100 flex items-center justify-center">
                                <Icon name=icons::IMAGE class="w-10 h-10" />
                            </div>
                            <div class="p-4">
                                <h3 class="text-sm font-semibold text-gray-900">{template.name}</h3>
                                <div class="mt-2 flex items-center justify-between text-xs text-gray-500">
                                    <span>{format!("{} hotspots", template.hotspots)}</span>
                                    <span>{format!("Used {} times", template.usage_count)}</span>
                                </div>
                                <div class="mt-3 flex items-center justify-between">
                                    <span class="px-2 py-0.5 text-xs font-medium rounded-full bg-blue-100 text-blue-700">
                                        {template.category}
                                    </span>
                                    <span class="text-xs text-gray-400">{template.created_at}</span>
                                </div>
                            </div>
                        </div>
                    </For>
                </div>
            </Show>
        </div>
    }
}
