/// Configuration value: literal, or an expression evaluated per sort
/// 配置值：字面量，或每次排序时求值的表达式
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Attr<E> {
  Lit(String),
  Expr(E),
}

impl<E> Attr<E> {
  #[inline]
  pub fn lit(s: impl Into<String>) -> Self {
    Attr::Lit(s.into())
  }

  #[inline]
  pub fn is_lit(&self) -> bool {
    matches!(self, Attr::Lit(_))
  }

  #[inline]
  pub fn as_lit(&self) -> Option<&str> {
    match self {
      Attr::Lit(s) => Some(s),
      Attr::Expr(_) => None,
    }
  }

  pub fn as_ref(&self) -> Attr<&E> {
    match self {
      Attr::Lit(s) => Attr::Lit(s.clone()),
      Attr::Expr(e) => Attr::Expr(e),
    }
  }
}
