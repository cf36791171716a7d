use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::sanitize::escape_html;

/// Minimum length for title and description, counted after trimming.
pub const MIN_TEXT_LEN: usize = 6;

/// Dates are rendered as plain calendar days in responses.
const DATE_FORMAT: &str = "%Y-%m-%d";

fn validate_trimmed_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() < MIN_TEXT_LEN {
        let mut err = ValidationError::new("length");
        err.message = Some("must be at least 6 characters long (ignoring surrounding whitespace)".into());
        return Err(err);
    }
    Ok(())
}

/// Calendar event entity - represents an event stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Event title
    pub title: String,
    /// Event description
    pub description: String,
    /// Day the event starts
    pub start_date: DateTime<Utc>,
    /// Day the event ends
    pub end_date: DateTime<Utc>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new event
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    #[validate(custom(function = validate_trimmed_text))]
    #[schema(min_length = 6, example = "Team standup")]
    pub title: String,
    #[validate(custom(function = validate_trimmed_text))]
    #[schema(min_length = 6, example = "Daily sync with the platform team")]
    pub description: String,
    /// Day the event starts (YYYY-MM-DD)
    #[schema(value_type = String, format = Date, example = "2024-05-01")]
    pub start_date: NaiveDate,
    /// Day the event ends (YYYY-MM-DD)
    #[schema(value_type = String, format = Date, example = "2024-05-01")]
    pub end_date: NaiveDate,
}

/// DTO for updating an existing event
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEvent {
    #[validate(custom(function = validate_trimmed_text))]
    #[schema(min_length = 6)]
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub start_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = Date)]
    pub end_date: Option<NaiveDate>,
}

impl Event {
    /// Create a new event from the create DTO with a fresh v7 UUID.
    pub fn new(input: CreateEvent) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            title: input.title,
            description: input.description,
            start_date: day_start(input.start_date),
            end_date: day_start(input.end_date),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply partial updates from the update DTO.
    pub fn apply_update(&mut self, input: UpdateEvent) {
        if let Some(title) = input.title {
            self.title = title;
        }
        if let Some(description) = input.description {
            self.description = description;
        }
        if let Some(start_date) = input.start_date {
            self.start_date = day_start(start_date);
        }
        if let Some(end_date) = input.end_date {
            self.end_date = day_start(end_date);
        }
        self.updated_at = Utc::now();
    }
}

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Event representation returned to clients.
///
/// Text fields are HTML-escaped and dates are formatted as YYYY-MM-DD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    /// Event identifier
    pub id: String,
    /// HTML-escaped title
    pub title: String,
    /// HTML-escaped description
    pub description: String,
    /// Start day (YYYY-MM-DD)
    #[schema(example = "2024-05-01")]
    pub start: String,
    /// End day (YYYY-MM-DD)
    #[schema(example = "2024-05-01")]
    pub end: String,
}

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.to_string(),
            title: escape_html(&event.title),
            description: escape_html(&event.description),
            start: event.start_date.format(DATE_FORMAT).to_string(),
            end: event.end_date.format(DATE_FORMAT).to_string(),
        }
    }
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self::from(&event)
    }
}

/// Success envelope for a single event
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventEnvelope {
    /// HTTP status code echoed in the body
    #[schema(example = 200)]
    pub code: u16,
    pub data: EventResponse,
}

/// Success envelope for event listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventListEnvelope {
    #[schema(example = 200)]
    pub code: u16,
    pub data: Vec<EventResponse>,
}

/// Success envelope carrying a human-readable message
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageEnvelope {
    #[schema(example = 200)]
    pub code: u16,
    #[schema(example = "Successfully deleted the event")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input() -> CreateEvent {
        CreateEvent {
            title: "Team standup".to_string(),
            description: "Daily sync with the platform team".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
        }
    }

    #[test]
    fn test_create_event_validation_passes() {
        assert!(create_input().validate().is_ok());
    }

    #[test]
    fn test_short_title_fails_validation() {
        let input = CreateEvent {
            title: "ab".to_string(),
            ..create_input()
        };
        let err = input.validate().unwrap_err();
        assert!(err.field_errors().contains_key("title"));
    }

    #[test]
    fn test_whitespace_does_not_count_toward_length() {
        let input = CreateEvent {
            title: "  abc   ".to_string(),
            ..create_input()
        };
        let err = input.validate().unwrap_err();
        assert!(err.field_errors().contains_key("title"));
    }

    #[test]
    fn test_update_event_only_validates_title() {
        let input = UpdateEvent {
            description: Some("ab".to_string()),
            ..Default::default()
        };
        assert!(input.validate().is_ok());

        let input = UpdateEvent {
            title: Some("ab".to_string()),
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_new_event_gets_id_and_timestamps() {
        let event = Event::new(create_input());
        assert!(!event.id.is_nil());
        assert_eq!(event.created_at, event.updated_at);
        assert_eq!(event.start_date.format("%Y-%m-%d").to_string(), "2024-05-01");
    }

    #[test]
    fn test_apply_update_merges_fields() {
        let mut event = Event::new(create_input());
        let original_description = event.description.clone();

        event.apply_update(UpdateEvent {
            title: Some("Sprint review".to_string()),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 3),
            ..Default::default()
        });

        assert_eq!(event.title, "Sprint review");
        assert_eq!(event.description, original_description);
        assert_eq!(event.end_date.format("%Y-%m-%d").to_string(), "2024-05-03");
        assert!(event.updated_at >= event.created_at);
    }

    #[test]
    fn test_response_escapes_html_and_formats_dates() {
        let mut event = Event::new(create_input());
        event.title = "<script>alert(1)</script> standup".to_string();

        let response = EventResponse::from(&event);
        assert_eq!(
            response.title,
            "&lt;script&gt;alert(1)&lt;&#x2F;script&gt; standup"
        );
        assert_eq!(response.start, "2024-05-01");
        assert_eq!(response.end, "2024-05-02");
        assert_eq!(response.id, event.id.to_string());
    }
}
