use serde::{Deserialize, Serialize};
use serde_json::Value;
use utils::app_config::SyncConfig;

/// 同步选项 - 是否删除目标端多余文件，以及排除模式列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncOptions {
    /// 源端不存在的文件是否从目标端删除（默认 true）
    delete: bool,
    /// 排除模式，原样传给 --exclude，保持给定顺序
    exclude: Vec<String>,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            delete: true,
            exclude: Vec::new(),
        }
    }
}

impl SyncOptions {
    pub fn new(delete: bool, exclude: Vec<String>) -> Self {
        Self { delete, exclude }
    }

    /// 从松散类型的键值映射构建选项。
    ///
    /// Only `delete` and `exclude` are read, other keys are ignored. A value
    /// of the wrong shape falls back to its default instead of failing.
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };

        Self {
            delete: map.get("delete").and_then(loose_bool).unwrap_or(true),
            exclude: map.get("exclude").map(loose_list).unwrap_or_default(),
        }
    }

    pub fn should_delete(&self) -> bool {
        self.delete
    }

    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }
}

impl From<&SyncConfig> for SyncOptions {
    fn from(config: &SyncConfig) -> Self {
        Self::new(config.delete, config.exclude.clone())
    }
}

/// `null` counts as absent; everything else compares loosely against `true`.
fn loose_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(*b),
        Value::Number(n) => Some(n.as_f64().map_or(true, |f| f != 0.0)),
        Value::String(s) => Some(!(s.is_empty() || s == "0")),
        Value::Array(items) => Some(!items.is_empty()),
        Value::Object(map) => Some(!map.is_empty()),
    }
}

fn loose_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}
