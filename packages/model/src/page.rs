use crate::record::ComponentRecord;
use chrono::{DateTime, Utc};
use pageforge_common::CommonResult;
use serde::{Deserialize, Serialize};

/// Publication state of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Draft,
    Published,
    Archived,
}

impl Default for PageStatus {
    fn default() -> Self {
        PageStatus::Draft
    }
}

/// Whole-page document as exchanged with the backing document store.
///
/// Persistence is optimistic put-whole-document; there is no partial
/// patch contract. Component order in `components` is render order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDocument {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub components: Vec<ComponentRecord>,

    #[serde(default)]
    pub status: PageStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    pub user_id: String,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl PageDocument {
    pub fn new(id: impl Into<String>, name: impl Into<String>, user_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            components: Vec::new(),
            status: PageStatus::Draft,
            template_id: None,
            user_id: user_id.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_component(mut self, record: ComponentRecord) -> Self {
        self.components.push(record);
        self
    }

    /// Mark the document as touched (called on every save).
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn from_json(source: &str) -> CommonResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_json(&self) -> CommonResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wire_shape_is_camel_case() {
        let mut page = PageDocument::new("page-1", "Launch", "user-9");
        page.template_id = Some("tpl-3".to_string());

        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["templateId"], "tpl-3");
        assert_eq!(json["userId"], "user-9");
        assert_eq!(json["status"], "draft");
    }

    #[test]
    fn test_page_deserializes_with_missing_optionals() {
        let page: PageDocument = serde_json::from_str(
            r#"{"id": "p", "name": "n", "userId": "u"}"#,
        )
        .unwrap();

        assert!(page.components.is_empty());
        assert_eq!(page.status, PageStatus::Draft);
        assert!(page.template_id.is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let page = PageDocument::new("p", "n", "u")
            .with_component(ComponentRecord::create("Hero").with_content("title", "hi"));

        let json = page.to_json().unwrap();
        let back = PageDocument::from_json(&json).unwrap();
        assert_eq!(back, page);
        assert!(back.components[0].id.starts_with("hero-"));
    }
}
