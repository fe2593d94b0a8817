//! Template creation page
//!
//! Name and category form around the hotspot editor. Submitting composes a
//! [`TemplateSubmission`](crate::core::TemplateSubmission) from the draft.

use leptos::logging::log;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::{TEMPLATE_CATEGORIES, TemplateDraft};
use crate::ui::hotspot_editor::HotspotEditor;

#[component]
pub fn NewTemplatePage() -> impl IntoView {
    let draft = RwSignal::new(TemplateDraft::new());
    let submitted = RwSignal::new(None::<String>);

    let can_submit = move || draft.with(|d| d.can_submit());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(submission) = draft.with(|d| d.submission()) else {
            return;
        };
        match serde_json::to_string(&submission) {
            Ok(json) => log!("template submission: {}", json),
            Err(err) => log!("template submission could not be encoded: {}", err),
        }
        submitted.set(Some(format!(
            "\"{}\" is ready with {} hotspots.",
            submission.name,
            submission.hotspots.len()
        )));
    };

    view! {
        <Title text="New Template - Drawtab" />

        <div class="max-w-5xl space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-semibold text-gray-900">"New Template"</h1>
                    <p class="mt-1 text-sm text-gray-500">
                        "Upload a flyer design and mark where names and photos go"
                    </p>
                </div>
                <A href="/dashboard/templates" attr:class="text-sm font-medium text-gray-600 hover:text-gray-900">
                    "Back to templates"
                </A>
            </div>

            {move || submitted.get().map(|message| view! {
                <div class="p-3 bg-green-50 border border-green-300 rounded-lg">
                    <p class="text-sm text-green-700">{message}</p>
                </div>
            })}

            <form on:submit=on_submit class="space-y-8">
                // Template Information
                <section class="bg-white rounded-lg border border-gray-200 p-6">
                    <h3 class="text-lg font-medium text-gray-900 mb-4">"Template Information"</h3>
                    <div class="grid grid-cols-1 gap-6 sm:grid-cols-2">
                        <div>
                            <label for="template-name" class="block text-sm font-medium text-gray-700">
                                "Template Name"
                            </label>
                            <input
                                type="text"
                                id="template-name"
                                placeholder="e.g. Birthday Celebration"
                                class="mt-1 w-full px-3 py-2 border border-gray-300 rounded-lg
                                       focus:outline-none focus:ring-2 focus:ring-blue-500"
                                prop:value=move || draft.with(|d| d.name.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.name = value);
                                }
                            />
                        </div>
                        <div>
                            <label for="template-category" class="block text-sm font-medium text-gray-700">
                                "Category"
                            </label>
                            <select
                                id="template-category"
                                class="mt-1 w-full px-3 py-2 border border-gray-300 rounded-lg bg-white"
                                prop:value=move || draft.with(|d| d.category.clone())
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.category = value);
                                }
                            >
                                {TEMPLATE_CATEGORIES
                                    .iter()
                                    .map(|category| view! { <option value=*category>{*category}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                    </div>
                </section>

                // Upload and hotspots
                <section class="bg-white rounded-lg border border-gray-200 p-6">
                    <h3 class="text-lg font-medium text-gray-900 mb-4">"Upload Template & Define Hotspots"</h3>
                    <HotspotEditor draft=draft />
                </section>

                <div class="flex justify-end gap-3">
                    <A
                        href="/dashboard/templates"
                        attr:class="px-4 py-2 text-sm font-medium text-gray-700 border border-gray-300 rounded-lg hover:bg-gray-50"
                    >
                        "Cancel"
                    </A>
                    <button
                        type="submit"
                        class="px-4 py-2 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 rounded-lg
                               disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled=move || !can_submit()
                    >
                        "Create Template"
                    </button>
                </div>
            </form>
        </div>
    }
}
