use serde::{Deserialize, Deserializer};

/// 用于部分更新中的可空字段：`Option<Option<T>>`
///
/// - 字段缺失 -> `None`（保持原值）
/// - 显式 `null` -> `Some(None)`（清空）
/// - 有值 -> `Some(Some(v))`
///
/// 需要配合 `#[serde(default, deserialize_with = "deserialize_some")]` 使用。
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
