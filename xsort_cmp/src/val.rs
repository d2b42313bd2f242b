//! Comparator input domain / 比较器输入值域

use hipstr::HipStr;
use xsort_doc::Token;

/// Value handed to a [`crate::Comparer`]
/// 传给 [`crate::Comparer`] 的值
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Val<'a> {
  Str(&'a str),
  Num(f64),
  Node(Token),
}

impl Val<'_> {
  /// Kind name used in diagnostics
  /// 诊断信息中使用的类型名
  pub const fn kind(&self) -> &'static str {
    match self {
      Val::Str(_) => "string",
      Val::Num(_) => "number",
      Val::Node(_) => "node",
    }
  }
}

impl<'a> From<&'a str> for Val<'a> {
  #[inline]
  fn from(v: &'a str) -> Self {
    Val::Str(v)
  }
}

impl From<f64> for Val<'_> {
  #[inline]
  fn from(v: f64) -> Self {
    Val::Num(v)
  }
}

impl From<Token> for Val<'_> {
  #[inline]
  fn from(v: Token) -> Self {
    Val::Node(v)
  }
}

/// Anything that can be viewed as a [`Val`]
/// 可视为 [`Val`] 的类型
pub trait AsVal {
  fn as_val(&self) -> Val<'_>;
}

macro_rules! impl_as_str {
  ($($t:ty),+ $(,)?) => {
    $(
      impl AsVal for $t {
        #[inline]
        fn as_val(&self) -> Val<'_> {
          Val::Str(self)
        }
      }
    )+
  };
}

impl_as_str!(str, String, Box<str>, HipStr<'_>);

impl AsVal for f64 {
  #[inline]
  fn as_val(&self) -> Val<'_> {
    Val::Num(*self)
  }
}

impl AsVal for Token {
  #[inline]
  fn as_val(&self) -> Val<'_> {
    Val::Node(*self)
  }
}

impl AsVal for Val<'_> {
  #[inline]
  fn as_val(&self) -> Val<'_> {
    *self
  }
}

impl<T: AsVal + ?Sized> AsVal for &T {
  #[inline]
  fn as_val(&self) -> Val<'_> {
    (**self).as_val()
  }
}
