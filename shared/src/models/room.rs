//! Room Model
//!
//! 房间实体与布局合并语义。合并规则按桌台 `name` 匹配：命中整表替换，
//! 未命中追加；整布局提交还会删除提交列表之外的桌台。

use serde::{Deserialize, Serialize};

use super::{LayoutUpsert, Table};

/// Room entity (房间：大厅、露台、包厢等)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Unique across rooms (case-insensitive at creation time)
    pub name: String,
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Room {
    /// 按名称 upsert 单张桌台：同名整表替换，否则追加
    fn upsert_table(&mut self, incoming: Table) {
        match self.tables.iter_mut().find(|t| t.name == incoming.name) {
            Some(existing) => *existing = incoming,
            None => self.tables.push(incoming),
        }
    }

    /// Apply a full layout submission.
    ///
    /// Upserts every incoming table by name, then drops every existing table
    /// whose name is absent from the incoming list, then adopts the incoming
    /// room name. The resulting table set is driven entirely by the incoming
    /// list, so resubmitting the same layout is idempotent.
    pub fn apply_layout(&mut self, name: String, incoming: Vec<Table>) {
        let keep: Vec<String> = incoming.iter().map(|t| t.name.clone()).collect();
        for table in incoming {
            self.upsert_table(table);
        }
        self.tables.retain(|t| keep.iter().any(|k| *k == t.name));
        self.name = name;
    }

    /// Merge tables without pruning: same per-table upsert as
    /// [`apply_layout`](Self::apply_layout), but tables absent from the
    /// incoming list are left untouched.
    pub fn merge_tables(&mut self, incoming: Vec<Table>) {
        for table in incoming {
            self.upsert_table(table);
        }
    }
}

impl From<LayoutUpsert> for Room {
    /// 新增房间路径：id 原样透传（可能缺失），缺失的 tables 按空列表处理
    fn from(layout: LayoutUpsert) -> Self {
        Self {
            id: layout.id,
            name: layout.name,
            tables: layout.tables.unwrap_or_default(),
        }
    }
}
