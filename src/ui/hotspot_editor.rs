//! Hotspot editor component
//!
//! Renders the uploaded template with its hotspot overlays and feeds file
//! selection and image clicks into the [`TemplateDraft`] editor state.

use leptos::prelude::*;

use crate::core::{Hotspot, HotspotKind, TemplateDraft};
#[cfg(not(feature = "ssr"))]
use crate::core::{Point, RenderedRect};
use crate::ui::icon::{Icon, icons};

/// Absolute position of an overlay, in percent of the rendered image
fn overlay_style(hotspot: &Hotspot) -> String {
    format!(
        "left: {}%; top: {}%; width: {}%; height: {}%;",
        hotspot.x, hotspot.y, hotspot.width, hotspot.height
    )
}

fn overlay_class(kind: HotspotKind) -> &'static str {
    match kind {
        HotspotKind::Text => "absolute pointer-events-none border-2 border-blue-500 bg-blue-500/20 rounded",
        HotspotKind::Image => "absolute pointer-events-none border-2 border-green-500 bg-green-500/20 rounded",
    }
}

/// Hotspots closer than this to the top edge carry their label inside
const LABEL_INSIDE_BELOW_Y: f64 = 8.0;

/// Label sits above the overlay unless that would clip at the canvas edge
fn label_class(hotspot: &Hotspot) -> &'static str {
    if hotspot.y < LABEL_INSIDE_BELOW_Y {
        "absolute top-0 left-0 text-xs font-medium bg-white/90 px-1 rounded"
    } else {
        "absolute -top-5 left-0 text-xs font-medium bg-white/90 px-1 rounded"
    }
}

fn badge_class(kind: HotspotKind) -> &'static str {
    match kind {
        HotspotKind::Text => "px-2 py-0.5 text-xs font-medium rounded bg-blue-100 text-blue-700",
        HotspotKind::Image => "px-2 py-0.5 text-xs font-medium rounded bg-green-100 text-green-700",
    }
}

fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Upload area, image canvas and hotspot list for one template draft
#[component]
pub fn HotspotEditor(draft: RwSignal<TemplateDraft>) -> impl IntoView {
    let image_ref = NodeRef::<leptos::html::Img>::new();
    let image_error = RwSignal::new(None::<String>);

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(not(feature = "ssr"))]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let file = gloo_file::File::from(file);

            leptos::task::spawn_local(async move {
                match gloo_file::futures::read_as_bytes(&file).await {
                    Ok(bytes) => {
                        let mut result = Ok(());
                        draft.update(|d| {
                            result = d.editor.load_file(file.name(), file.raw_mime_type(), &bytes);
                        });
                        image_error.set(result.err().map(|e| e.to_string()));
                    }
                    Err(err) => image_error.set(Some(err.to_string())),
                }
            });
        }
        #[cfg(feature = "ssr")]
        let _ = ev;
    };

    let on_image_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(not(feature = "ssr"))]
        {
            let Some(image) = image_ref.get() else {
                return;
            };
            let bounds = image.get_bounding_client_rect();
            let rect = RenderedRect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height());
            let click = Point::new(ev.client_x() as f64, ev.client_y() as f64);
            draft.update(|d| {
                d.editor.place_at(click, rect);
            });
        }
        #[cfg(feature = "ssr")]
        let _ = ev;
    };

    let has_image = move || draft.with(|d| d.editor.has_image());
    let placing = move || draft.with(|d| d.editor.placing());

    let placement_button = move |kind: HotspotKind, label: &'static str, icon: &'static str| {
        view! {
            <button
                type="button"
                class="flex items-center gap-2 px-3 py-2 text-sm font-medium rounded-lg border transition-colors
                       disabled:opacity-50 disabled:cursor-not-allowed"
                class:border-blue-500=move || placing() == Some(kind)
                class:bg-blue-50=move || placing() == Some(kind)
                class:border-gray-300=move || placing() != Some(kind)
                disabled=move || !has_image()
                on:click=move |_| draft.update(|d| d.editor.begin_placement(kind))
            >
                <Icon name=icon class="h-4 w-4" />
                {label}
            </button>
        }
    };

    view! {
        <div class="space-y-4">
            // Image selection
            <Show
                when=has_image
                fallback=move || view! {
                    <label class="flex flex-col items-center justify-center w-full h-64 border-2 border-dashed
                                  border-gray-300 rounded-xl cursor-pointer hover:border-blue-400 hover:bg-blue-50/40">
                        <Icon name=icons::UPLOAD class="w-10 h-10 mb-3" />
                        <span class="text-sm font-medium text-gray-700">"Click to upload a template image"</span>
                        <span class="text-xs text-gray-500 mt-1">"PNG, JPG or GIF"</span>
                        <input type="file" accept="image/*" class="hidden" on:change=on_file_change />
                    </label>
                }
            >
                <div class="flex items-center justify-between">
                    <div class="text-sm text-gray-600">
                        {move || draft.with(|d| d.editor.image().map(|image| {
                            format!("{} ({})", image.name, format_size(image.size))
                        }))}
                    </div>
                    <button
                        type="button"
                        class="flex items-center gap-1 text-sm text-red-500 hover:text-red-600"
                        on:click=move |_| draft.update(|d| d.editor.remove_image())
                    >
                        <Icon name=icons::TRASH class="h-4 w-4" />
                        "Remove image"
                    </button>
                </div>
            </Show>

            {move || image_error.get().map(|error| view! {
                <div class="p-3 bg-red-50 border border-red-300 rounded-lg">
                    <p class="text-sm text-red-700">{error}</p>
                </div>
            })}

            // Placement controls
            <div class="flex flex-wrap items-center gap-2">
                {placement_button(HotspotKind::Text, "Add Text Area", icons::TEXT)}
                {placement_button(HotspotKind::Image, "Add Image Area", icons::IMAGE)}
                {move || placing().map(|kind| view! {
                    <span class="text-sm text-blue-600">
                        {format!("Click on the image to place the {} area", kind)}
                    </span>
                    <button
                        type="button"
                        class="text-sm text-gray-500 hover:text-gray-700 underline"
                        on:click=move |_| draft.update(|d| d.editor.cancel_placement())
                    >
                        "Cancel"
                    </button>
                })}
            </div>

            // Canvas
            <Show when=has_image>
                <div class="relative inline-block max-w-full border border-gray-200 rounded-lg overflow-hidden">
                    <img
                        node_ref=image_ref
                        src=move || draft.with(|d| d.editor.image().map(|i| i.data_url().to_string()))
                        alt="Template preview"
                        class="block max-w-full select-none"
                        class:cursor-crosshair=move || placing().is_some()
                        draggable="false"
                        on:click=on_image_click
                    />
                    <For
                        each=move || draft.with(|d| d.editor.hotspots().to_vec())
                        key=|hotspot| hotspot.id.clone()
                        let:hotspot
                    >
                        <div class=overlay_class(hotspot.kind) style=overlay_style(&hotspot)>
                            <span class=label_class(&hotspot)>
                                {hotspot.label.clone()}
                            </span>
                        </div>
                    </For>
                </div>
            </Show>

            // Hotspot list
            <div class="border border-gray-200 rounded-lg divide-y divide-gray-200">
                <div class="px-4 py-2 text-sm font-medium text-gray-900">
                    {move || format!("Hotspots ({})", draft.with(|d| d.editor.len()))}
                </div>
                <Show
                    when=move || draft.with(|d| !d.editor.is_empty())
                    fallback=|| view! {
                        <p class="px-4 py-3 text-sm text-gray-500">
                            "No hotspots yet. Upload an image and add text or image areas."
                        </p>
                    }
                >
                    <For
                        each=move || draft.with(|d| d.editor.hotspots().to_vec())
                        key=|hotspot| hotspot.id.clone()
                        let:hotspot
                    >
                        {
                            let id = hotspot.id.clone();
                            view! {
                                <div class="flex items-center justify-between px-4 py-2">
                                    <div class="flex items-center gap-2">
                                        <span class=badge_class(hotspot.kind)>{hotspot.kind.to_string()}</span>
                                        <span class="text-sm text-gray-900">{hotspot.label.clone()}</span>
                                        <span class="text-xs text-gray-500">
                                            {format!("{:.1}%, {:.1}%", hotspot.x, hotspot.y)}
                                        </span>
                                    </div>
                                    <button
                                        type="button"
                                        class="text-gray-400 hover:text-red-500"
                                        title="Remove hotspot"
                                        on:click=move |_| draft.update(|d| {
                                            d.editor.remove(&id);
                                        })
                                    >
                                        <Icon name=icons::X class="h-4 w-4" />
                                    </button>
                                </div>
                            }
                        }
                    </For>
                </Show>
            </div>
        </div>
    }
}
