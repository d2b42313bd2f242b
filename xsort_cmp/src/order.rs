use std::cmp::Ordering;

use crate::{Error, Result};

/// Ordering policy (ascending or descending)
/// 排序策略（升序或降序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
  #[default]
  Asc,
  Desc,
}

impl Order {
  /// Apply the policy to an ascending comparison
  /// 将策略作用于升序比较结果
  #[inline(always)]
  pub fn apply(self, o: Ordering) -> Ordering {
    match self {
      Order::Asc => o,
      Order::Desc => o.reverse(),
    }
  }

  /// Parse `ascending` / `descending`
  /// 解析 `ascending` / `descending`
  pub fn parse(s: &str) -> Result<Self> {
    match s {
      "ascending" => Ok(Order::Asc),
      "descending" => Ok(Order::Desc),
      _ => Err(Error::Order(s.into())),
    }
  }
}

/// Which case sorts first among otherwise equal strings
/// 其余相同的字符串中哪种大小写在前
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseOrder {
  /// Collation decides (`#default`)
  /// 由排序规则决定（`#default`）
  #[default]
  Default,
  LowerFirst,
  UpperFirst,
}

impl CaseOrder {
  /// Parse `#default` / `lower-first` / `upper-first`
  /// 解析 `#default` / `lower-first` / `upper-first`
  pub fn parse(s: &str) -> Result<Self> {
    match s {
      "#default" => Ok(CaseOrder::Default),
      "lower-first" => Ok(CaseOrder::LowerFirst),
      "upper-first" => Ok(CaseOrder::UpperFirst),
      _ => Err(Error::CaseOrder(s.into())),
    }
  }
}
