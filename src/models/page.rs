use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use super::Entry;
use crate::config::PropertyNames;

/// Body of `POST /pages`
#[derive(Debug, Clone, Serialize)]
pub struct PageRequest {
    pub parent: Parent,
    pub properties: BTreeMap<String, PropertyValue>,
    pub children: Vec<Block>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Parent {
    pub database_id: String,
}

/// A typed page property, serialized as `{"<type>": ...}`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyValue {
    Title(Vec<RichText>),
    MultiSelect(Vec<SelectOption>),
    Date(DateValue),
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DateValue {
    pub start: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct RichText {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: TextContent,
}

impl RichText {
    pub fn plain(content: &str) -> Self {
        Self {
            kind: "text",
            text: TextContent {
                content: content.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TextContent {
    pub content: String,
}

/// Body block. Only paragraphs are ever written.
#[derive(Debug, Clone, Serialize)]
pub struct Block {
    pub object: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub paragraph: Paragraph,
}

#[derive(Debug, Clone, Serialize)]
pub struct Paragraph {
    pub rich_text: Vec<RichText>,
}

impl Block {
    pub fn paragraph(content: &str) -> Self {
        Self {
            object: "block",
            kind: "paragraph",
            paragraph: Paragraph {
                rich_text: vec![RichText::plain(content)],
            },
        }
    }
}

impl PageRequest {
    /// Map an entry onto the database schema
    pub fn from_entry(entry: &Entry, database_id: &str, names: &PropertyNames) -> Self {
        let mut properties = BTreeMap::new();
        properties.insert(
            names.title.clone(),
            PropertyValue::Title(vec![RichText::plain(&entry.title)]),
        );

        if !entry.tags.is_empty() {
            properties.insert(
                names.tags.clone(),
                PropertyValue::MultiSelect(
                    entry
                        .tags
                        .iter()
                        .map(|t| SelectOption { name: t.clone() })
                        .collect(),
                ),
            );
        }

        properties.insert(
            names.date.clone(),
            PropertyValue::Date(DateValue {
                start: entry.occurred_on,
            }),
        );

        let children = entry
            .body_text
            .as_deref()
            .map(|text| vec![Block::paragraph(text)])
            .unwrap_or_default();

        Self {
            parent: Parent {
                database_id: database_id.to_string(),
            },
            properties,
            children,
        }
    }
}

/// Body of `POST /databases/{id}/query`
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    pub page_size: u32,
    pub sorts: Vec<Sort>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Sort {
    pub timestamp: &'static str,
    pub direction: &'static str,
}

impl QueryRequest {
    /// Most recently created entries first
    pub fn recent(page_size: u32) -> Self {
        Self {
            page_size,
            sorts: vec![Sort {
                timestamp: "created_time",
                direction: "descending",
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry() -> Entry {
        Entry {
            title: "T".to_string(),
            body_text: None,
            tags: vec!["a".to_string(), "b".to_string()],
            occurred_on: NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
        }
    }

    #[test]
    fn test_page_shape() {
        let page = PageRequest::from_entry(&entry(), "db-1", &PropertyNames::default());
        let value = serde_json::to_value(&page).unwrap();

        assert_eq!(
            value,
            json!({
                "parent": {"database_id": "db-1"},
                "properties": {
                    "Title": {"title": [{"type": "text", "text": {"content": "T"}}]},
                    "Tags": {"multi_select": [{"name": "a"}, {"name": "b"}]},
                    "Date": {"date": {"start": "2026-01-02"}},
                },
                "children": [],
            })
        );
    }

    #[test]
    fn test_body_text_becomes_paragraph() {
        let mut e = entry();
        e.body_text = Some("hello".to_string());
        let page = PageRequest::from_entry(&e, "db-1", &PropertyNames::default());
        let value = serde_json::to_value(&page).unwrap();

        assert_eq!(
            value["children"],
            json!([{
                "object": "block",
                "type": "paragraph",
                "paragraph": {"rich_text": [{"type": "text", "text": {"content": "hello"}}]},
            }])
        );
    }

    #[test]
    fn test_no_tags_omits_property() {
        let mut e = entry();
        e.tags.clear();
        let names = PropertyNames {
            title: "Name".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(PageRequest::from_entry(&e, "db", &names)).unwrap();
        let props = value["properties"].as_object().unwrap();

        assert!(props.contains_key("Name"));
        assert!(props.contains_key("Date"));
        assert!(!props.contains_key("Tags"));
    }

    #[test]
    fn test_recent_query() {
        let value = serde_json::to_value(QueryRequest::recent(10)).unwrap();
        assert_eq!(
            value,
            json!({
                "page_size": 10,
                "sorts": [{"timestamp": "created_time", "direction": "descending"}],
            })
        );
    }
}
