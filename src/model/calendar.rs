//! Calendar entry domain models and parameters.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{error::validation::ValidationError, util::parse::parse_datetime};

/// A calendar entry as stored in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEntry {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub is_all_day: bool,
}

impl CalendarEntry {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::calendar_entry::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            location: entity.location,
            start_time: entity.start_time,
            end_time: entity.end_time,
            is_all_day: entity.is_all_day,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> CalendarEntryDto {
        CalendarEntryDto {
            id: self.id,
            title: self.title,
            description: self.description,
            location: self.location,
            start_time: self.start_time,
            end_time: self.end_time,
            is_all_day: self.is_all_day,
        }
    }
}

/// Parameters for inserting a calendar entry.
#[derive(Debug, Clone)]
pub struct CreateCalendarEntryParam {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub is_all_day: bool,
}

/// Form payload for POST /add_calendar_entry.
#[derive(Debug, Deserialize)]
pub struct AddCalendarEntryForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub is_all_day: Option<String>,
}

impl AddCalendarEntryForm {
    /// Validates field presence, parses the timestamps, and converts into
    /// insert parameters.
    ///
    /// An empty `end_time` counts as absent (HTML forms submit the key even
    /// when the input is left blank). `is_all_day` is true exactly when the
    /// form value is `"on"`, the value a checked HTML checkbox submits.
    pub fn into_param(self) -> Result<CreateCalendarEntryParam, ValidationError> {
        let title = self.title.ok_or(ValidationError::MissingField("title"))?;
        let start_time_raw = self
            .start_time
            .ok_or(ValidationError::MissingField("start_time"))?;
        let start_time = parse_datetime("start_time", &start_time_raw)?;

        let end_time = self
            .end_time
            .as_deref()
            .filter(|value| !value.is_empty())
            .map(|value| parse_datetime("end_time", value))
            .transpose()?;

        let is_all_day = self.is_all_day.as_deref() == Some("on");

        Ok(CreateCalendarEntryParam {
            title,
            description: self.description,
            location: self.location,
            start_time,
            end_time,
            is_all_day,
        })
    }
}

/// Calendar entry as returned by GET /calendar_entries.
#[derive(Debug, Serialize)]
pub struct CalendarEntryDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub is_all_day: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: Option<&str>, start_time: Option<&str>, is_all_day: Option<&str>) -> AddCalendarEntryForm {
        AddCalendarEntryForm {
            title: title.map(str::to_string),
            description: None,
            location: None,
            start_time: start_time.map(str::to_string),
            end_time: None,
            is_all_day: is_all_day.map(str::to_string),
        }
    }

    #[test]
    fn missing_title_is_rejected_by_name() {
        let err = form(None, Some("2025-06-01T08:00"), None)
            .into_param()
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingField("title"));
    }

    #[test]
    fn is_all_day_absent_means_false() {
        let param = form(Some("Fair"), Some("2025-06-01T08:00"), None)
            .into_param()
            .unwrap();
        assert!(!param.is_all_day);
    }

    #[test]
    fn is_all_day_on_means_true() {
        let param = form(Some("Fair"), Some("2025-06-01T08:00"), Some("on"))
            .into_param()
            .unwrap();
        assert!(param.is_all_day);
    }

    #[test]
    fn is_all_day_other_values_mean_false() {
        for value in ["off", "true", "1", ""] {
            let param = form(Some("Fair"), Some("2025-06-01T08:00"), Some(value))
                .into_param()
                .unwrap();
            assert!(!param.is_all_day, "value {:?} should not count as all-day", value);
        }
    }

    #[test]
    fn empty_end_time_counts_as_absent() {
        let mut raw = form(Some("Fair"), Some("2025-06-01T08:00"), None);
        raw.end_time = Some(String::new());

        let param = raw.into_param().unwrap();
        assert_eq!(param.end_time, None);
    }

    #[test]
    fn unparseable_start_time_is_a_validation_error() {
        let err = form(Some("Fair"), Some("soon"), None).into_param().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidField { field: "start_time", .. }
        ));
    }
}
