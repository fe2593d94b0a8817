//! Document shapes stored on the hosted platform
//!
//! These mirror the collection schemas (camelCase attributes plus the
//! platform's `$`-prefixed metadata). Nothing here drives a lifecycle; the
//! shapes are only serialized to and from the document store.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::hotspot::{Hotspot, HotspotKind};

/// Metadata the platform attaches to every document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMeta {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "$createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "$updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub timezone: String,
    pub email_notifications: bool,
}

/// Flyer template with its hotspot definitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub file_id: String,
    pub file_url: String,
    pub hotspots: Vec<TemplateHotspot>,
    pub is_active: bool,
    pub usage_count: u32,
    pub created_by: String,
}

impl Template {
    /// Fields an event must fill in for this template, keyed by hotspot id
    pub fn required_fields(&self) -> BTreeMap<&str, HotspotKind> {
        self.hotspots
            .iter()
            .filter(|h| h.required)
            .map(|h| (h.area.id.as_str(), h.area.kind))
            .collect()
    }

    pub fn hotspot(&self, id: &str) -> Option<&TemplateHotspot> {
        self.hotspots.iter().find(|h| h.area.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

fn default_required() -> bool {
    true
}

/// Hotspot as stored on a template: the placed area plus fill-in options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateHotspot {
    #[serde(flatten)]
    pub area: Hotspot,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
}

/// Editor placements become required areas with no styling
impl From<Hotspot> for TemplateHotspot {
    fn from(area: Hotspot) -> Self {
        Self {
            area,
            required: true,
            default_value: None,
            font_family: None,
            font_size: None,
            font_color: None,
            text_align: None,
        }
    }
}

/// Contact / staff member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub photo_id: Option<String>,
    pub photo_url: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub date_of_birth: Option<String>,
    pub hire_date: Option<String>,
    pub anniversary_date: Option<String>,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_by: String,
}

impl Contact {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Birthday,
    Anniversary,
    Promotion,
    Holiday,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrencePattern {
    Yearly,
    Monthly,
    Weekly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Scheduled,
    Sent,
    Failed,
    Cancelled,
}

/// Content filled into a single hotspot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum HotspotValue {
    Text(String),
    /// File id of an image in storage
    Image(String),
}

impl HotspotValue {
    pub fn kind(&self) -> HotspotKind {
        match self {
            HotspotValue::Text(_) => HotspotKind::Text,
            HotspotValue::Image(_) => HotspotKind::Image,
        }
    }
}

/// Hotspot fill-in mismatch against a template
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FillError {
    #[error("Missing value for hotspot '{0}'")]
    Missing(String),

    #[error("Hotspot '{0}' does not exist on the template")]
    Unknown(String),

    #[error("Hotspot '{id}' expects {expected} content, got {actual}")]
    KindMismatch {
        id: String,
        expected: HotspotKind,
        actual: HotspotKind,
    },
}

/// Hotspot fill-in data keyed by hotspot id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HotspotValues(pub BTreeMap<String, HotspotValue>);

impl HotspotValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, hotspot_id: impl Into<String>, value: HotspotValue) {
        self.0.insert(hotspot_id.into(), value);
    }

    pub fn get(&self, hotspot_id: &str) -> Option<&HotspotValue> {
        self.0.get(hotspot_id)
    }

    /// Check these values cover the template's required hotspots, name no
    /// other hotspots, and carry the right content kinds. All problems are
    /// reported.
    pub fn validate_for(&self, template: &Template) -> Result<(), Vec<FillError>> {
        let mut errors = Vec::new();

        for hotspot in &template.hotspots {
            let (id, expected) = (&hotspot.area.id, hotspot.area.kind);
            match self.0.get(id) {
                None if hotspot.required => errors.push(FillError::Missing(id.clone())),
                None => {}
                Some(value) if value.kind() != expected => {
                    errors.push(FillError::KindMismatch {
                        id: id.clone(),
                        expected,
                        actual: value.kind(),
                    })
                }
                Some(_) => {}
            }
        }

        for id in self.0.keys() {
            if template.hotspot(id).is_none() {
                errors.push(FillError::Unknown(id.clone()));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Scheduled flyer event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEvent {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub title: String,
    pub description: Option<String>,
    pub event_type: EventType,
    pub contact_id: String,
    pub template_id: String,
    pub scheduled_date: DateTime<Utc>,
    pub is_recurring: bool,
    pub recurrence_pattern: Option<RecurrencePattern>,
    pub custom_data: HotspotValues,
    pub status: EventStatus,
    pub email_subject: Option<String>,
    pub email_body: Option<String>,
    pub last_sent_at: Option<DateTime<Utc>>,
    pub next_send_at: Option<DateTime<Utc>>,
    pub created_by: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlyerStatus {
    Generating,
    Ready,
    Sent,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Pending,
    Sent,
    Delivered,
    Failed,
    Bounced,
}

/// Flyer produced by the generation function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedFlyer {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub event_id: String,
    pub template_id: String,
    pub contact_id: String,
    pub file_id: String,
    pub file_url: String,
    pub generated_data: HotspotValues,
    pub status: FlyerStatus,
    pub generated_at: DateTime<Utc>,
    pub sent_at: Option<DateTime<Utc>>,
    pub email_delivery_status: Option<DeliveryStatus>,
    pub email_delivery_error: Option<String>,
    pub created_by: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailStatus {
    Queued,
    Sending,
    Sent,
    Delivered,
    Failed,
    Bounced,
}

/// Outgoing email record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailLog {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub flyer_id: Option<String>,
    pub event_id: Option<String>,
    pub contact_id: String,
    pub recipient_email: String,
    pub subject: String,
    pub body: String,
    pub status: EmailStatus,
    pub error: Option<String>,
    pub sent_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub opened_at: Option<DateTime<Utc>>,
    pub clicked_at: Option<DateTime<Utc>>,
    pub created_by: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> DocumentMeta {
        DocumentMeta {
            id: "doc1".to_string(),
            created_at: "2025-01-15T10:00:00Z".parse().unwrap(),
            updated_at: "2025-01-15T10:00:00Z".parse().unwrap(),
        }
    }

    fn hotspot(id: &str, kind: HotspotKind) -> Hotspot {
        Hotspot {
            id: id.to_string(),
            kind,
            label: id.to_string(),
            x: 10.0,
            y: 10.0,
            width: 20.0,
            height: 10.0,
        }
    }

    fn template() -> Template {
        Template {
            meta: meta(),
            name: "Birthday Celebration".to_string(),
            category: "Birthday".to_string(),
            description: None,
            file_id: "file1".to_string(),
            file_url: "https://cloud.example.com/file1".to_string(),
            hotspots: vec![
                hotspot("hotspot-1", HotspotKind::Text).into(),
                hotspot("hotspot-2", HotspotKind::Image).into(),
            ],
            is_active: true,
            usage_count: 12,
            created_by: "user1".to_string(),
        }
    }

    #[test]
    fn test_required_fields_from_template() {
        let template = template();
        let fields = template.required_fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["hotspot-1"], HotspotKind::Text);
        assert_eq!(fields["hotspot-2"], HotspotKind::Image);
    }

    #[test]
    fn test_values_validate_against_template() {
        let mut values = HotspotValues::new();
        values.insert("hotspot-1", HotspotValue::Text("Happy birthday, John!".into()));
        values.insert("hotspot-2", HotspotValue::Image("photo42".into()));

        assert!(values.validate_for(&template()).is_ok());
    }

    #[test]
    fn test_values_report_every_problem() {
        let mut values = HotspotValues::new();
        values.insert("hotspot-2", HotspotValue::Text("not an image".into()));
        values.insert("hotspot-9", HotspotValue::Text("stray".into()));

        let errors = values.validate_for(&template()).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&FillError::Missing("hotspot-1".into())));
        assert!(errors.contains(&FillError::Unknown("hotspot-9".into())));
        assert!(errors.contains(&FillError::KindMismatch {
            id: "hotspot-2".into(),
            expected: HotspotKind::Image,
            actual: HotspotKind::Text,
        }));
    }

    #[test]
    fn test_optional_hotspot_may_be_left_empty() {
        let mut template = template();
        template.hotspots[0].required = false;

        assert_eq!(template.required_fields().len(), 1);

        let mut values = HotspotValues::new();
        values.insert("hotspot-2", HotspotValue::Image("photo42".into()));
        assert!(values.validate_for(&template).is_ok());

        // Filled optional hotspots are still checked for kind
        values.insert("hotspot-1", HotspotValue::Image("photo43".into()));
        let errors = values.validate_for(&template).unwrap_err();
        assert_eq!(
            errors,
            vec![FillError::KindMismatch {
                id: "hotspot-1".into(),
                expected: HotspotKind::Text,
                actual: HotspotKind::Image,
            }]
        );
    }

    #[test]
    fn test_stored_hotspot_keeps_fill_options() {
        let json = serde_json::json!({
            "id": "h1",
            "type": "text",
            "label": "Text 1",
            "x": 1.0,
            "y": 1.0,
            "width": 20.0,
            "height": 10.0,
            "required": false,
            "defaultValue": "Hi",
            "fontFamily": "Inter",
            "fontSize": 24.0,
            "fontColor": "#112233",
            "textAlign": "center"
        });

        let hotspot: TemplateHotspot = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(hotspot.area.label, "Text 1");
        assert!(!hotspot.required);
        assert_eq!(hotspot.default_value.as_deref(), Some("Hi"));
        assert_eq!(hotspot.font_size, Some(24.0));
        assert_eq!(hotspot.text_align, Some(TextAlign::Center));

        assert_eq!(serde_json::to_value(&hotspot).unwrap(), json);
    }

    #[test]
    fn test_stored_hotspot_defaults_to_required() {
        let hotspot: TemplateHotspot = serde_json::from_str(
            r#"{"id":"h2","type":"image","label":"Image 1","x":5.0,"y":5.0,"width":15.0,"height":15.0}"#,
        )
        .unwrap();
        assert!(hotspot.required);
        assert!(hotspot.font_family.is_none());

        let json = serde_json::to_value(&hotspot).unwrap();
        assert_eq!(json["required"], true);
        assert!(json.get("defaultValue").is_none());
    }

    #[test]
    fn test_hotspot_value_wire_format() {
        let json = serde_json::to_value(HotspotValue::Image("file7".into())).unwrap();
        assert_eq!(json, serde_json::json!({"type": "image", "value": "file7"}));
    }

    #[test]
    fn test_template_document_round_trip_keys() {
        let json = serde_json::to_value(template()).unwrap();
        assert_eq!(json["$id"], "doc1");
        assert_eq!(json["fileId"], "file1");
        assert_eq!(json["usageCount"], 12);
        assert_eq!(json["hotspots"][1]["type"], "image");
    }

    #[test]
    fn test_scheduled_event_deserializes() {
        let json = r#"{
            "$id": "evt1",
            "$createdAt": "2025-01-15T10:00:00Z",
            "$updatedAt": "2025-01-15T10:00:00Z",
            "title": "John's birthday",
            "description": null,
            "eventType": "birthday",
            "contactId": "c1",
            "templateId": "t1",
            "scheduledDate": "2025-03-01T09:00:00Z",
            "isRecurring": true,
            "recurrencePattern": "yearly",
            "customData": {"hotspot-1": {"type": "text", "value": "Happy birthday!"}},
            "status": "scheduled",
            "emailSubject": null,
            "emailBody": null,
            "lastSentAt": null,
            "nextSendAt": null,
            "createdBy": "user1"
        }"#;

        let event: ScheduledEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.meta.id, "evt1");
        assert_eq!(event.event_type, EventType::Birthday);
        assert_eq!(event.recurrence_pattern, Some(RecurrencePattern::Yearly));
        assert_eq!(
            event.custom_data.get("hotspot-1"),
            Some(&HotspotValue::Text("Happy birthday!".into()))
        );
    }

    #[test]
    fn test_email_log_status_lowercase() {
        let json = serde_json::to_value(EmailStatus::Bounced).unwrap();
        assert_eq!(json, "bounced");
    }
}
