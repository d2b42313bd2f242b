//! Numeric comparator / 数值比较器

use std::cmp::Ordering;

use crate::{Comparer, Order, Result, Val, comparer::mismatch};

/// Parse a sort value as a number; anything unparsable is NaN
/// 将排序值解析为数字；无法解析时为 NaN
#[inline]
pub fn to_num(s: &str) -> f64 {
  s.trim().parse().unwrap_or(f64::NAN)
}

/// Numeric order with NaN after every number
/// 数值顺序，NaN 排在所有数字之后
///
/// NaN stays last when reversed by [`crate::Rev`]. Two NaNs are equal and
/// `-0.0 == 0.0`.
/// 经 [`crate::Rev`] 反转后 NaN 仍在最后。两个 NaN 相等，且 `-0.0 == 0.0`。
#[derive(Debug, Clone, Copy, Default)]
pub struct Numeric;

impl Numeric {
  #[inline]
  fn num(v: Val<'_>) -> Result<f64> {
    match v {
      Val::Num(n) => Ok(n),
      Val::Str(s) => Ok(to_num(s)),
      other => Err(mismatch("numeric", "number or string", other)),
    }
  }

  fn nan_last(a: Val<'_>, b: Val<'_>, order: Order) -> Result<Ordering> {
    let (a, b) = (Self::num(a)?, Self::num(b)?);
    Ok(match (a.is_nan(), b.is_nan()) {
      (true, true) => Ordering::Equal,
      (true, false) => Ordering::Greater,
      (false, true) => Ordering::Less,
      // neither is NaN
      (false, false) => order.apply(a.partial_cmp(&b).unwrap_or(Ordering::Equal)),
    })
  }
}

impl Comparer for Numeric {
  #[inline]
  fn cmp(&self, a: Val<'_>, b: Val<'_>) -> Result<Ordering> {
    Self::nan_last(a, b, Order::Asc)
  }

  #[inline]
  fn cmp_rev(&self, a: Val<'_>, b: Val<'_>) -> Result<Ordering> {
    Self::nan_last(a, b, Order::Desc)
  }

  fn name(&self) -> &'static str {
    "numeric"
  }
}
