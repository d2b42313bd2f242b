//! Sort key configuration
//! 排序键配置

use crate::Attr;

/// Literal defaults of a sort key
/// 排序键的字面量默认值
pub mod default {
  pub const ORDER: &str = "ascending";
  pub const DATA_TYPE: &str = "text";
  pub const CASE_ORDER: &str = "#default";
  /// Reported when no language is given
  /// 未指定语言时报告的值
  pub const LANG: &str = "en";
}

/// Sort key option
/// 排序键选项
#[derive(Debug, Clone)]
pub enum Conf<E> {
  /// `ascending` or `descending`
  Order(Attr<E>),
  /// `text`, `number` or `prefix:local`
  DataType(Attr<E>),
  /// `#default`, `lower-first` or `upper-first`
  CaseOrder(Attr<E>),
  /// Language tag
  /// 语言标签
  Lang(Attr<E>),
}

/// Parsed configuration
/// 解析后的配置
#[derive(Debug, Clone)]
pub struct ParsedConf<E> {
  pub order: Attr<E>,
  pub data_type: Attr<E>,
  pub case_order: Attr<E>,
  /// `None` selects the binary text family
  /// `None` 表示使用二进制文本族
  pub lang: Option<Attr<E>>,
}

impl<E> Default for ParsedConf<E> {
  fn default() -> Self {
    Self {
      order: Attr::lit(default::ORDER),
      data_type: Attr::lit(default::DATA_TYPE),
      case_order: Attr::lit(default::CASE_ORDER),
      lang: None,
    }
  }
}

impl<E> ParsedConf<E> {
  pub fn new(conf: impl IntoIterator<Item = Conf<E>>) -> Self {
    let mut c = Self::default();
    for item in conf {
      match item {
        Conf::Order(v) => c.order = v,
        Conf::DataType(v) => c.data_type = v,
        Conf::CaseOrder(v) => c.case_order = v,
        Conf::Lang(v) => c.lang = Some(v),
      }
    }
    c
  }

  /// All options literal (an absent language counts as literal)
  /// 所有选项均为字面量（未指定语言视为字面量）
  pub fn is_lit(&self) -> bool {
    self.order.is_lit()
      && self.data_type.is_lit()
      && self.case_order.is_lit()
      && self.lang.as_ref().is_none_or(Attr::is_lit)
  }
}
