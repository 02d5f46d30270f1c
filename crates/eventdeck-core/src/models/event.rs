use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::asset::StoredAsset;
use crate::AppError;

/// An event ("card") shown in the community feed, with its attached image.
///
/// `image_id` is the asset store handle of the current image and `image_url` where it
/// is served from. Both are set together from a single upload result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: Uuid,
    pub date: String,
    pub heading: String,
    pub description: String,
    pub location: String,
    pub link: Option<String>,
    pub image_url: Option<String>,
    pub image_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Display fields as submitted by a client. Every field is optional on the wire;
/// empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct EventFields {
    pub date: Option<String>,
    pub heading: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub link: Option<String>,
}

/// Fields required to persist a brand new event.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewEvent {
    #[validate(length(min = 1, message = "date is required"))]
    pub date: String,
    #[validate(length(min = 1, message = "heading is required"))]
    pub heading: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,
    pub link: Option<String>,
}

/// Full replacement values for an existing event, produced by [`EventRecord::merge`].
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatedEvent {
    pub date: String,
    pub heading: String,
    pub description: String,
    pub location: String,
    pub link: Option<String>,
    pub image_url: Option<String>,
    pub image_id: Option<String>,
}

/// `{ message, data }` body returned by create and edit.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EventEnvelope {
    pub message: String,
    pub data: EventRecord,
}

/// `{ message }` body returned by delete.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl EventFields {
    /// Assign a named multipart text field. Returns false for names that are not event fields.
    pub fn set(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "date" => &mut self.date,
            "heading" => &mut self.heading,
            "description" => &mut self.description,
            "location" => &mut self.location,
            "link" => &mut self.link,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    /// Turn the submitted fields into a [`NewEvent`], failing if any required field is
    /// missing or empty.
    pub fn into_new_event(self) -> Result<NewEvent, AppError> {
        let event = NewEvent {
            date: self.date.unwrap_or_default(),
            heading: self.heading.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            link: non_empty(self.link),
        };
        event.validate()?;
        Ok(event)
    }
}

impl EventRecord {
    /// Overlay submitted fields on the stored values.
    ///
    /// Absent or empty fields keep their prior value. When `image` is given it
    /// replaces both the URL and the asset id.
    pub fn merge(&self, fields: EventFields, image: Option<StoredAsset>) -> UpdatedEvent {
        let (image_url, image_id) = match image {
            Some(asset) => (Some(asset.url), Some(asset.id)),
            None => (self.image_url.clone(), self.image_id.clone()),
        };

        UpdatedEvent {
            date: non_empty(fields.date).unwrap_or_else(|| self.date.clone()),
            heading: non_empty(fields.heading).unwrap_or_else(|| self.heading.clone()),
            description: non_empty(fields.description)
                .unwrap_or_else(|| self.description.clone()),
            location: non_empty(fields.location).unwrap_or_else(|| self.location.clone()),
            link: non_empty(fields.link).or_else(|| self.link.clone()),
            image_url,
            image_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> EventRecord {
        let now = Utc::now();
        EventRecord {
            id: Uuid::new_v4(),
            date: "2024-03-01".to_string(),
            heading: "Intro to Solidity".to_string(),
            description: "Hands-on workshop".to_string(),
            location: "Lab 3".to_string(),
            link: Some("https://lu.ma/solidity".to_string()),
            image_url: Some("https://cdn.example.com/events/a.png".to_string()),
            image_id: Some("events/a.png".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    fn complete_fields() -> EventFields {
        EventFields {
            date: Some("2024-03-01".to_string()),
            heading: Some("Hackathon".to_string()),
            description: Some("48h build sprint".to_string()),
            location: Some("Main hall".to_string()),
            link: None,
        }
    }

    #[test]
    fn test_set_known_and_unknown_fields() {
        let mut fields = EventFields::default();
        assert!(fields.set("heading", "Meetup".to_string()));
        assert!(!fields.set("avatar", "x".to_string()));
        assert_eq!(fields.heading.as_deref(), Some("Meetup"));
    }

    #[test]
    fn test_into_new_event_accepts_complete_fields() {
        let event = complete_fields().into_new_event().unwrap();
        assert_eq!(event.heading, "Hackathon");
        assert_eq!(event.link, None);
    }

    #[test]
    fn test_into_new_event_rejects_each_missing_required_field() {
        for name in ["date", "heading", "description", "location"] {
            let mut missing = complete_fields();
            missing.set(name, String::new());
            let err = missing.into_new_event().unwrap_err();
            assert!(matches!(err, AppError::Validation(ref msg) if msg.contains(name)));

            let mut absent = complete_fields();
            match name {
                "date" => absent.date = None,
                "heading" => absent.heading = None,
                "description" => absent.description = None,
                _ => absent.location = None,
            }
            assert!(matches!(
                absent.into_new_event(),
                Err(AppError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_into_new_event_drops_empty_link() {
        let mut fields = complete_fields();
        fields.link = Some(String::new());
        assert_eq!(fields.into_new_event().unwrap().link, None);
    }

    #[test]
    fn test_merge_ignores_empty_and_absent_fields() {
        let record = sample_record();
        let fields = EventFields {
            date: Some(String::new()),
            heading: Some(String::new()),
            description: None,
            location: Some(String::new()),
            link: Some(String::new()),
        };

        let merged = record.merge(fields, None);
        assert_eq!(merged.date, record.date);
        assert_eq!(merged.heading, record.heading);
        assert_eq!(merged.description, record.description);
        assert_eq!(merged.location, record.location);
        assert_eq!(merged.link, record.link);
        assert_eq!(merged.image_url, record.image_url);
        assert_eq!(merged.image_id, record.image_id);
    }

    #[test]
    fn test_merge_applies_present_fields_and_new_image() {
        let record = sample_record();
        let fields = EventFields {
            heading: Some("Intro to Solidity, part 2".to_string()),
            ..Default::default()
        };
        let asset = StoredAsset {
            url: "https://cdn.example.com/events/b.png".to_string(),
            id: "events/b.png".to_string(),
        };

        let merged = record.merge(fields, Some(asset));
        assert_eq!(merged.heading, "Intro to Solidity, part 2");
        assert_eq!(merged.date, record.date);
        assert_eq!(merged.image_id.as_deref(), Some("events/b.png"));
        assert_eq!(
            merged.image_url.as_deref(),
            Some("https://cdn.example.com/events/b.png")
        );
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let json = serde_json::to_value(sample_record()).unwrap();
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("imageId").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("image_url").is_none());
    }
}
