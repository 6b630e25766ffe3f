use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// The bookmark collection persisted by the server
///
/// Only used to build the fallback document and to describe the payload in
/// the OpenAPI schema. Stored documents are passed through as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Bookmark records, opaque to the server
    #[schema(value_type = Vec<Object>)]
    pub bookmarks: Vec<JsonValue>,
    pub groups: Vec<String>,
    pub app_title: String,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            bookmarks: Vec::new(),
            groups: vec!["General".to_string()],
            app_title: "MarkKeeper".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_document_shape() {
        let value = serde_json::to_value(Document::default()).unwrap();
        assert_eq!(
            value,
            json!({ "bookmarks": [], "groups": ["General"], "appTitle": "MarkKeeper" })
        );
    }
}
