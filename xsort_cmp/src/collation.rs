//! Comparator factories / 比较器工厂

use std::{fmt::Debug, sync::Arc};

use crate::{CaseOrder, Comparer, DataType, Numeric, Text, text_cmp};

/// Builds a comparator for a data type and case order
/// 根据数据类型和大小写顺序构建比较器
///
/// Registered per language or per named data type in a [`crate::Registry`].
/// 在 [`crate::Registry`] 中按语言或命名数据类型注册。
pub trait Collation: Debug + Send + Sync {
  fn make(&self, data_type: &DataType, case: CaseOrder) -> Arc<dyn Comparer>;
}

/// Built-in text families ignore the data type tag
/// 内置文本族忽略数据类型标记
impl Collation for Text {
  #[inline]
  fn make(&self, _: &DataType, case: CaseOrder) -> Arc<dyn Comparer> {
    text_cmp(*self, case)
  }
}

/// Numbers have no case
/// 数字无大小写
impl Collation for Numeric {
  #[inline]
  fn make(&self, _: &DataType, _: CaseOrder) -> Arc<dyn Comparer> {
    Arc::new(Numeric)
  }
}
