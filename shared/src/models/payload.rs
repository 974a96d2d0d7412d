//! Request Payloads

use serde::{Deserialize, Serialize};

use super::Table;

/// Create room payload (POST /api/room)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomCreate {
    #[serde(default)]
    pub name: String,
}

/// Full-layout submission (POST/PUT /api/layout)
///
/// `tables` 缺失与空列表含义不同：对已存在的房间，缺失视为不可处理的
/// 请求；新增房间时缺失按空列表处理。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutUpsert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tables: Option<Vec<Table>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_tables_deserializes_to_none() {
        let layout: LayoutUpsert = serde_json::from_str(r#"{"name":"Bar"}"#).unwrap();
        assert_eq!(layout.name, "Bar");
        assert!(layout.tables.is_none());
    }

    #[test]
    fn test_empty_tables_is_not_absent() {
        let layout: LayoutUpsert = serde_json::from_str(r#"{"name":"Bar","tables":[]}"#).unwrap();
        assert_eq!(layout.tables, Some(Vec::new()));
    }
}
