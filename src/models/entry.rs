use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RelayError;
use crate::DEFAULT_TITLE;

/// Body accepted by `POST /create`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEntryRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub date: Option<String>,
}

/// A record about to be written to the database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub body_text: Option<String>,
    pub tags: Vec<String>,
    pub occurred_on: NaiveDate,
}

impl Entry {
    /// Build an entry from a request, filling in the title and date defaults
    pub fn from_request(req: CreateEntryRequest, today: NaiveDate) -> Result<Self, RelayError> {
        let title = req
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let body_text = req.content.filter(|c| !c.is_empty());

        // Ordered set: caller order, first occurrence wins
        let mut tags: Vec<String> = Vec::new();
        for tag in req.tags.unwrap_or_default() {
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        let occurred_on = match req.date.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| {
                    RelayError::InvalidRequest(format!("date must be YYYY-MM-DD, got {:?}", raw))
                })?,
            _ => today,
        };

        Ok(Self {
            title,
            body_text,
            tags,
            occurred_on,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn test_defaults_for_empty_request() {
        let entry = Entry::from_request(CreateEntryRequest::default(), today()).unwrap();
        assert_eq!(entry.title, "Untitled");
        assert_eq!(entry.body_text, None);
        assert!(entry.tags.is_empty());
        assert_eq!(entry.occurred_on, today());
    }

    #[test]
    fn test_empty_strings_treated_as_absent() {
        let req = CreateEntryRequest {
            title: Some(String::new()),
            content: Some(String::new()),
            tags: Some(vec![]),
            date: Some(String::new()),
        };
        let entry = Entry::from_request(req, today()).unwrap();
        assert_eq!(entry.title, "Untitled");
        assert_eq!(entry.body_text, None);
        assert_eq!(entry.occurred_on, today());
    }

    #[test]
    fn test_tags_keep_order_and_drop_duplicates() {
        let req = CreateEntryRequest {
            title: Some("T".into()),
            tags: Some(vec!["b".into(), "a".into(), "b".into(), "".into(), "c".into()]),
            ..Default::default()
        };
        let entry = Entry::from_request(req, today()).unwrap();
        assert_eq!(entry.tags, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_explicit_date() {
        let req = CreateEntryRequest {
            date: Some("2025-12-31".into()),
            ..Default::default()
        };
        let entry = Entry::from_request(req, today()).unwrap();
        assert_eq!(entry.occurred_on, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }

    #[test]
    fn test_invalid_date_rejected() {
        for bad in ["31/12/2025", "2025-02-30", "tomorrow"] {
            let req = CreateEntryRequest {
                date: Some(bad.into()),
                ..Default::default()
            };
            let err = Entry::from_request(req, today()).unwrap_err();
            assert!(matches!(err, RelayError::InvalidRequest(_)), "{}", bad);
        }
    }

    #[test]
    fn test_parse_request_json() {
        let req: CreateEntryRequest =
            serde_json::from_str(r#"{"title":"T","tags":["a","b"],"extra":1}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("T"));
        assert_eq!(req.tags, Some(vec!["a".to_string(), "b".to_string()]));
        assert!(req.content.is_none());

        let req: CreateEntryRequest = serde_json::from_str(r#"{"tags":null}"#).unwrap();
        assert!(req.tags.is_none());
    }
}
