//! Hotspot editor model
//!
//! Keeps the in-memory state of one template editing session: the loaded
//! template image, the hotspots placed on it and the placement mode.
//! All geometry is expressed in percentages of the rendered image size.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Default hotspot width, in percent of the rendered image width
pub const DEFAULT_HOTSPOT_WIDTH: f64 = 20.0;
/// Default hotspot height, in percent of the rendered image height
pub const DEFAULT_HOTSPOT_HEIGHT: f64 = 10.0;

/// Kind of dynamic content a hotspot will receive
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HotspotKind {
    Text,
    Image,
}

impl HotspotKind {
    /// Prefix used for auto-generated labels
    pub fn label_prefix(&self) -> &'static str {
        match self {
            HotspotKind::Text => "Text",
            HotspotKind::Image => "Image",
        }
    }
}

impl std::fmt::Display for HotspotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HotspotKind::Text => write!(f, "text"),
            HotspotKind::Image => write!(f, "image"),
        }
    }
}

/// Labeled rectangular region on a template image
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Hotspot {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: HotspotKind,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Hotspot {
    /// Right edge in percent. May exceed 100, placements are not clamped.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge in percent. May exceed 100.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// A point in viewport coordinates (e.g. `MouseEvent.clientX/Y`)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// On-screen rectangle the image is rendered into
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderedRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl RenderedRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Convert a viewport point into percentages of this rectangle.
    ///
    /// Returns `None` for a degenerate rectangle.
    pub fn to_percent(&self, point: Point) -> Option<(f64, f64)> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let x = 100.0 * (point.x - self.left) / self.width;
        let y = 100.0 * (point.y - self.top) / self.height;
        Some((x, y))
    }
}

/// Template image errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditorError {
    #[error("File '{0}' is not an image")]
    NotAnImage(String),
}

/// Raster image selected for editing
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateImage {
    pub name: String,
    pub mime_type: String,
    pub size: usize,
    data_url: String,
}

impl TemplateImage {
    /// Build a previewable image from raw file bytes.
    pub fn from_bytes(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: &[u8],
    ) -> Result<Self, EditorError> {
        let name = name.into();
        let mime_type = mime_type.into();

        if !mime_type.starts_with("image/") {
            return Err(EditorError::NotAnImage(name));
        }

        let data_url = format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes));

        Ok(Self {
            name,
            mime_type,
            size: bytes.len(),
            data_url,
        })
    }

    /// `data:` URL usable as an `<img src>`
    pub fn data_url(&self) -> &str {
        &self.data_url
    }
}

/// State of one hotspot editing session
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HotspotEditor {
    image: Option<TemplateImage>,
    hotspots: Vec<Hotspot>,
    placing: Option<HotspotKind>,
    next_id: u64,
}

impl HotspotEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> Option<&TemplateImage> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Hotspots in creation order
    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    /// Pending hotspot kind while placement mode is active
    pub fn placing(&self) -> Option<HotspotKind> {
        self.placing
    }

    pub fn is_placing(&self) -> bool {
        self.placing.is_some()
    }

    /// Replace the template image. Existing hotspots are relative to the old
    /// image and are discarded.
    pub fn load_image(&mut self, image: TemplateImage) {
        self.image = Some(image);
        self.hotspots.clear();
        self.placing = None;
    }

    /// Validate and load an image from raw file data.
    ///
    /// On error the editor is left untouched.
    pub fn load_file(
        &mut self,
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: &[u8],
    ) -> Result<(), EditorError> {
        let image = TemplateImage::from_bytes(name, mime_type, bytes)?;
        self.load_image(image);
        Ok(())
    }

    /// Drop the image together with every hotspot.
    pub fn remove_image(&mut self) {
        self.image = None;
        self.hotspots.clear();
        self.placing = None;
    }

    /// Enter placement mode for `kind`. Ignored until an image is loaded.
    pub fn begin_placement(&mut self, kind: HotspotKind) {
        if self.image.is_some() {
            self.placing = Some(kind);
        }
    }

    pub fn cancel_placement(&mut self) {
        self.placing = None;
    }

    /// Place a hotspot at `click`, given where the image is rendered.
    ///
    /// Does nothing unless placement mode is active. Leaves placement mode
    /// after a successful placement.
    pub fn place_at(&mut self, click: Point, rect: RenderedRect) -> Option<&Hotspot> {
        let kind = self.placing?;
        let (x, y) = rect.to_percent(click)?;

        self.next_id += 1;
        let hotspot = Hotspot {
            id: format!("hotspot-{}", self.next_id),
            kind,
            // Ordinal comes from the current set size; labels are never renumbered
            label: format!("{} {}", kind.label_prefix(), self.hotspots.len() + 1),
            x,
            y,
            width: DEFAULT_HOTSPOT_WIDTH,
            height: DEFAULT_HOTSPOT_HEIGHT,
        };

        self.hotspots.push(hotspot);
        self.placing = None;
        self.hotspots.last()
    }

    /// Remove a hotspot by id. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) -> Option<Hotspot> {
        let index = self.hotspots.iter().position(|h| h.id == id)?;
        Some(self.hotspots.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Hotspot> {
        self.hotspots.iter().find(|h| h.id == id)
    }

    pub fn len(&self) -> usize {
        self.hotspots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotspots.is_empty()
    }
}

/// Categories offered on the template creation screen
pub const TEMPLATE_CATEGORIES: [&str; 6] = [
    "Birthday",
    "Anniversary",
    "Promotion",
    "Holiday",
    "Welcome",
    "General",
];

/// Record composed on template submission
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct TemplateSubmission {
    pub name: String,
    pub category: String,
    pub file_name: String,
    pub hotspots: Vec<Hotspot>,
}

/// Template creation form: metadata plus the hotspot editor
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateDraft {
    pub name: String,
    pub category: String,
    pub editor: HotspotEditor,
}

impl Default for TemplateDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: TEMPLATE_CATEGORIES[0].to_string(),
            editor: HotspotEditor::new(),
        }
    }
}

impl TemplateDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// A draft needs an image and a name before it can be submitted
    pub fn can_submit(&self) -> bool {
        self.editor.has_image() && !self.name.trim().is_empty()
    }

    pub fn submission(&self) -> Option<TemplateSubmission> {
        if !self.can_submit() {
            return None;
        }
        let image = self.editor.image()?;
        Some(TemplateSubmission {
            name: self.name.trim().to_string(),
            category: self.category.clone(),
            file_name: image.name.clone(),
            hotspots: self.editor.hotspots().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn editor_with_image() -> HotspotEditor {
        let mut editor = HotspotEditor::new();
        editor
            .load_file("flyer.png", "image/png", PNG_BYTES)
            .unwrap();
        editor
    }

    fn rect() -> RenderedRect {
        RenderedRect::new(100.0, 50.0, 400.0, 200.0)
    }

    fn place(editor: &mut HotspotEditor, kind: HotspotKind, x: f64, y: f64) -> String {
        editor.begin_placement(kind);
        editor.place_at(Point::new(x, y), rect()).unwrap().id.clone()
    }

    #[test]
    fn test_load_file_builds_data_url() {
        let image = TemplateImage::from_bytes("a.png", "image/png", b"abc").unwrap();
        assert_eq!(image.data_url(), "data:image/png;base64,YWJj");
        assert_eq!(image.size, 3);
    }

    #[test]
    fn test_load_rejects_non_image() {
        let mut editor = editor_with_image();
        place(&mut editor, HotspotKind::Text, 200.0, 100.0);

        let result = editor.load_file("notes.txt", "text/plain", b"hello");
        assert_eq!(result, Err(EditorError::NotAnImage("notes.txt".to_string())));
        assert_eq!(editor.image().unwrap().name, "flyer.png");
        assert_eq!(editor.len(), 1);
    }

    #[test]
    fn test_load_accepts_any_image_type() {
        let mut editor = HotspotEditor::new();
        assert!(editor.load_file("photo.jpg", "image/jpeg", b"jpg").is_ok());
    }

    #[test]
    fn test_loading_new_image_clears_hotspots() {
        let mut editor = editor_with_image();
        place(&mut editor, HotspotKind::Text, 200.0, 100.0);
        place(&mut editor, HotspotKind::Image, 300.0, 100.0);
        editor.begin_placement(HotspotKind::Text);

        editor.load_file("other.png", "image/png", PNG_BYTES).unwrap();

        assert!(editor.is_empty());
        assert!(!editor.is_placing());
        assert_eq!(editor.image().unwrap().name, "other.png");
    }

    #[test]
    fn test_begin_placement_requires_image() {
        let mut editor = HotspotEditor::new();
        editor.begin_placement(HotspotKind::Text);
        assert!(!editor.is_placing());
    }

    #[test]
    fn test_click_without_placement_is_noop() {
        let mut editor = editor_with_image();
        assert!(editor.place_at(Point::new(300.0, 150.0), rect()).is_none());
        assert!(editor.is_empty());
    }

    #[test]
    fn test_placement_exits_placement_mode() {
        let mut editor = editor_with_image();
        editor.begin_placement(HotspotKind::Image);
        assert_eq!(editor.placing(), Some(HotspotKind::Image));

        editor.place_at(Point::new(300.0, 150.0), rect());
        assert!(!editor.is_placing());

        // Second click without re-arming does nothing
        assert!(editor.place_at(Point::new(300.0, 150.0), rect()).is_none());
        assert_eq!(editor.len(), 1);
    }

    #[test]
    fn test_coordinate_conversion() {
        let r = rect();
        let center = r.to_percent(Point::new(300.0, 150.0)).unwrap();
        assert!((center.0 - 50.0).abs() < f64::EPSILON);
        assert!((center.1 - 50.0).abs() < f64::EPSILON);

        let top_left = r.to_percent(Point::new(100.0, 50.0)).unwrap();
        assert_eq!(top_left, (0.0, 0.0));

        let bottom_right = r.to_percent(Point::new(500.0, 250.0)).unwrap();
        assert!((bottom_right.0 - 100.0).abs() < 1e-9);
        assert!((bottom_right.1 - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_rect_places_nothing() {
        let mut editor = editor_with_image();
        editor.begin_placement(HotspotKind::Text);
        let flat = RenderedRect::new(0.0, 0.0, 0.0, 100.0);

        assert!(editor.place_at(Point::new(0.0, 10.0), flat).is_none());
        assert!(editor.is_empty());
        assert!(editor.is_placing());
    }

    #[test]
    fn test_placed_hotspot_has_defaults() {
        let mut editor = editor_with_image();
        editor.begin_placement(HotspotKind::Text);
        let hotspot = editor
            .place_at(Point::new(300.0, 150.0), rect())
            .unwrap()
            .clone();

        assert_eq!(hotspot.kind, HotspotKind::Text);
        assert_eq!(hotspot.label, "Text 1");
        assert_eq!(hotspot.width, DEFAULT_HOTSPOT_WIDTH);
        assert_eq!(hotspot.height, DEFAULT_HOTSPOT_HEIGHT);
    }

    #[test]
    fn test_labels_follow_placement_order() {
        let mut editor = editor_with_image();
        place(&mut editor, HotspotKind::Text, 150.0, 60.0);
        place(&mut editor, HotspotKind::Image, 200.0, 60.0);
        place(&mut editor, HotspotKind::Text, 250.0, 60.0);

        let labels: Vec<&str> = editor.hotspots().iter().map(|h| h.label.as_str()).collect();
        assert_eq!(labels, vec!["Text 1", "Image 2", "Text 3"]);
    }

    #[test]
    fn test_remove_does_not_renumber() {
        let mut editor = editor_with_image();
        let first = place(&mut editor, HotspotKind::Text, 150.0, 60.0);
        place(&mut editor, HotspotKind::Text, 200.0, 60.0);

        assert!(editor.remove(&first).is_some());
        assert_eq!(editor.hotspots()[0].label, "Text 2");

        // Ordinal comes from the current set size, so labels may repeat
        place(&mut editor, HotspotKind::Image, 250.0, 60.0);
        assert_eq!(editor.hotspots()[1].label, "Image 2");
    }

    #[test]
    fn test_ids_stay_unique_after_removal() {
        let mut editor = editor_with_image();
        let a = place(&mut editor, HotspotKind::Text, 150.0, 60.0);
        editor.remove(&a);
        let b = place(&mut editor, HotspotKind::Text, 150.0, 60.0);
        let c = place(&mut editor, HotspotKind::Text, 150.0, 60.0);

        assert_ne!(a, b);
        assert_ne!(b, c);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut editor = editor_with_image();
        place(&mut editor, HotspotKind::Text, 150.0, 60.0);
        let before = editor.clone();

        assert!(editor.remove("hotspot-999").is_none());
        assert_eq!(editor, before);
    }

    #[test]
    fn test_hotspot_can_exceed_bounds() {
        let mut editor = editor_with_image();
        let id = place(&mut editor, HotspotKind::Image, 480.0, 240.0);
        let hotspot = editor.get(&id).unwrap();

        assert!(hotspot.right() > 100.0);
        assert!(hotspot.bottom() > 100.0);
    }

    #[test]
    fn test_remove_image_clears_everything() {
        let mut editor = editor_with_image();
        place(&mut editor, HotspotKind::Text, 150.0, 60.0);
        editor.begin_placement(HotspotKind::Image);

        editor.remove_image();

        assert!(!editor.has_image());
        assert!(editor.is_empty());
        assert!(!editor.is_placing());
    }

    #[test]
    fn test_hotspot_serializes_kind_as_type() {
        let mut editor = editor_with_image();
        place(&mut editor, HotspotKind::Image, 150.0, 60.0);
        let json = serde_json::to_value(&editor.hotspots()[0]).unwrap();

        assert_eq!(json["type"], "image");
        assert_eq!(json["label"], "Image 1");
    }

    #[test]
    fn test_draft_requires_name_and_image() {
        let mut draft = TemplateDraft::new();
        assert_eq!(draft.category, "Birthday");
        assert!(!draft.can_submit());

        draft.name = "   ".to_string();
        draft
            .editor
            .load_file("flyer.png", "image/png", PNG_BYTES)
            .unwrap();
        assert!(!draft.can_submit());
        assert!(draft.submission().is_none());

        draft.name = " Birthday Celebration ".to_string();
        assert!(draft.can_submit());
    }

    #[test]
    fn test_draft_submission_contents() {
        let mut draft = TemplateDraft::new();
        draft.name = "Work Anniversary".to_string();
        draft.category = "Anniversary".to_string();
        draft
            .editor
            .load_file("anniversary.png", "image/png", PNG_BYTES)
            .unwrap();
        draft.editor.begin_placement(HotspotKind::Text);
        draft.editor.place_at(Point::new(300.0, 150.0), rect());

        let submission = draft.submission().unwrap();
        assert_eq!(submission.name, "Work Anniversary");
        assert_eq!(submission.category, "Anniversary");
        assert_eq!(submission.file_name, "anniversary.png");
        assert_eq!(submission.hotspots.len(), 1);
    }
}
