use crate::{Error, Result};

/// Data type of a sort key
/// 排序键的数据类型
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DataType {
  #[default]
  Text,
  Number,
  /// User type `prefix:local`, resolved by local name
  /// 用户类型 `prefix:local`，按本地名解析
  Named { prefix: String, local: String },
}

impl DataType {
  /// Parse `text`, `number` or a prefixed name
  /// 解析 `text`、`number` 或带前缀的名称
  pub fn parse(s: &str) -> Result<Self> {
    match s {
      "text" => Ok(DataType::Text),
      "number" => Ok(DataType::Number),
      _ => match s.split_once(':') {
        Some((prefix, local)) if !prefix.is_empty() && !local.is_empty() && !local.contains(':') => {
          Ok(DataType::Named {
            prefix: prefix.into(),
            local: local.into(),
          })
        }
        _ => Err(Error::DataType(s.into())),
      },
    }
  }

  #[inline]
  pub fn is_text(&self) -> bool {
    matches!(self, DataType::Text)
  }
}
