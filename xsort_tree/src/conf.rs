//! Tree configuration
//! 树配置

use std::sync::Arc;

use xsort_cmp::{Binary, Comparer, Order};

/// Tree option
/// 树选项
#[derive(Debug, Clone)]
pub enum Conf {
  /// Key direction
  /// 键方向
  Order(Order),
  /// Keep equal keys as separate entries, in arrival order
  /// 相等的键作为独立条目保留，按到达顺序
  Dup(bool),
  /// Key comparer, [`Binary`] by default
  /// 键比较器，默认 [`Binary`]
  Cmp(Arc<dyn Comparer>),
}

/// Parsed configuration
/// 解析后的配置
#[derive(Debug, Clone)]
pub struct ParsedConf {
  pub order: Order,
  pub dup: bool,
  pub cmp: Arc<dyn Comparer>,
}

impl Default for ParsedConf {
  fn default() -> Self {
    Self {
      order: Order::Asc,
      dup: false,
      cmp: Arc::new(Binary),
    }
  }
}

impl ParsedConf {
  pub fn new(conf: impl IntoIterator<Item = Conf>) -> Self {
    let mut c = Self::default();
    for item in conf {
      match item {
        Conf::Order(v) => c.order = v,
        Conf::Dup(v) => c.dup = v,
        Conf::Cmp(v) => c.cmp = v,
      }
    }
    c
  }
}
