//! Sort key binding / 排序键绑定

use std::sync::Arc;

use xsort_cmp::{CaseOrder, Collation, Comparer, DataType, Numeric, Order, Registry, Rev, Text};

use crate::{Attr, Conf, Ctx, ParsedConf, Result, default};

/// Build the comparer for literal configuration values
/// 根据字面量配置值构建比较器
///
/// Unknown languages fall back to `en` and unknown named types to binary,
/// with a warning. Invalid literals are errors.
/// 未知语言回退到 `en`，未知命名类型回退到二进制，并输出警告。非法字面量返回错误。
pub fn resolve(
  order: &str,
  data_type: &str,
  case_order: &str,
  lang: Option<&str>,
  reg: &Registry,
) -> Result<Arc<dyn Comparer>> {
  let order = Order::parse(order)?;
  let data_type = DataType::parse(data_type)?;
  let case = CaseOrder::parse(case_order)?;

  let collation: &dyn Collation = match &data_type {
    DataType::Text => match lang {
      None => &Text::Binary,
      Some(tag) => match reg.lang(tag) {
        Some(c) => &**c,
        None => {
          log::warn!("no collation for language {tag:?}, fall back to en");
          &Text::En
        }
      },
    },
    DataType::Number => &Numeric,
    DataType::Named { prefix, local } => match reg.named(local) {
      Some(c) => &**c,
      None => {
        log::warn!("no collation for data-type {prefix}:{local}, fall back to binary");
        &Text::Binary
      }
    },
  };

  // case order first, so a descending key keeps it
  let cmp = collation.make(&data_type, case);
  Ok(match order {
    Order::Asc => cmp,
    Order::Desc => Arc::new(Rev::new(cmp)),
  })
}

/// One `sort` instruction key
/// 一个排序键
#[derive(Debug)]
pub struct SortKey<E> {
  select: E,
  conf: ParsedConf<E>,
  /// Present iff every option is literal
  /// 当且仅当所有选项均为字面量时存在
  bound: Option<Arc<dyn Comparer>>,
}

impl<E> SortKey<E> {
  /// Create a key; all-literal configuration is validated and bound here
  /// 创建排序键；全字面量配置在此校验并绑定
  pub fn new(
    select: E,
    conf: impl IntoIterator<Item = Conf<E>>,
    reg: &Registry,
  ) -> Result<Self> {
    let conf = ParsedConf::new(conf);
    let bound = match (
      conf.order.as_lit(),
      conf.data_type.as_lit(),
      conf.case_order.as_lit(),
      &conf.lang,
    ) {
      (Some(order), Some(data_type), Some(case), None) => {
        Some(resolve(order, data_type, case, None, reg)?)
      }
      (Some(order), Some(data_type), Some(case), Some(Attr::Lit(lang))) => {
        Some(resolve(order, data_type, case, Some(lang.as_str()), reg)?)
      }
      _ => None,
    };
    log::debug!(
      "sort key {}",
      if bound.is_some() {
        "bound once"
      } else {
        "resolved per sort"
      }
    );
    Ok(Self {
      select,
      conf,
      bound,
    })
  }

  #[inline]
  pub fn select(&self) -> &E {
    &self.select
  }

  #[inline]
  pub fn conf(&self) -> &ParsedConf<E> {
    &self.conf
  }

  /// Comparer was bound at construction
  /// 比较器已在构造时绑定
  #[inline]
  pub fn is_static(&self) -> bool {
    self.bound.is_some()
  }

  /// Language in effect; `en` when none was given
  /// 生效的语言；未指定时为 `en`
  pub fn lang(&self) -> Attr<&E> {
    match &self.conf.lang {
      Some(a) => a.as_ref(),
      None => Attr::lit(default::LANG),
    }
  }

  /// Comparer for this key: the bound one, or a fresh one from `ctx`
  /// 该键的比较器：已绑定的，或从 `ctx` 新解析的
  pub fn comparer<C: Ctx<Expr = E>>(&self, ctx: &C, reg: &Registry) -> Result<Arc<dyn Comparer>> {
    if let Some(c) = &self.bound {
      return Ok(c.clone());
    }
    let eval = |a: &Attr<E>| -> Result<String> {
      match a {
        Attr::Lit(s) => Ok(s.clone()),
        Attr::Expr(e) => ctx.attr(e),
      }
    };
    let order = eval(&self.conf.order)?;
    let data_type = eval(&self.conf.data_type)?;
    let case = eval(&self.conf.case_order)?;
    let lang = self.conf.lang.as_ref().map(eval).transpose()?;
    resolve(&order, &data_type, &case, lang.as_deref(), reg)
  }
}
