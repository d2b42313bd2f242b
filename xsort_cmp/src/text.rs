//! Text comparators / 文本比较器

use std::{cmp::Ordering, sync::Arc};

use crate::{CaseOrder, Comparer, Result, Val, comparer::mismatch};

/// Unaccented counterparts of U+00C0..=U+00FF
/// U+00C0..=U+00FF 对应的无重音字符
const LATIN1: &[u8; 64] = b"AAAAAAACEEEEIIII[NOOOOO*OUUUUY]Saaaaaaaceeeeiiii{nooooo*ouuuuy}y";

/// Fold a Latin-1 accented letter to its base letter
/// 将 Latin-1 重音字母折叠为基本字母
#[inline]
pub fn fold(c: char) -> char {
  match c {
    '\u{C0}'..='\u{FF}' => LATIN1[c as usize - 0xC0] as char,
    _ => c,
  }
}

#[inline]
fn lower(c: char) -> char {
  c.to_lowercase().next().unwrap_or(c)
}

/// Lexicographic over mapped chars, shorter first on a common prefix
/// 对映射后的字符逐个比较，公共前缀相同时短者在前
#[inline]
fn mapped(a: &str, b: &str, f: impl Fn(char) -> char) -> Ordering {
  a.chars().map(&f).cmp(b.chars().map(&f))
}

/// Case rank of a char; the preferred case is 0, uncased and titlecase 1
/// 字符的大小写等级；优先的大小写为 0，无大小写及标题大小写为 1
#[inline]
fn case_rank(c: char, lower_first: bool) -> u8 {
  let (first, last) = if lower_first {
    (c.is_lowercase(), c.is_uppercase())
  } else {
    (c.is_uppercase(), c.is_lowercase())
  };
  if first {
    0
  } else if last {
    2
  } else {
    1
  }
}

/// Let the first differing char pair decide by case rank, then code point
/// 由第一对不同字符的大小写等级决定顺序，其次按码点
fn by_case(a: &str, b: &str, lower_first: bool) -> Ordering {
  let key = |c: char| (case_rank(c, lower_first), c);
  a.chars().map(key).cmp(b.chars().map(key))
}

#[inline]
fn str_of<'a>(cmp: &'static str, v: Val<'a>) -> Result<&'a str> {
  match v {
    Val::Str(s) => Ok(s),
    other => Err(mismatch(cmp, "string", other)),
  }
}

/// Code-point order
/// 码点顺序
///
/// Astral chars sort after U+E000..=U+FFFF, unlike UTF-16 code unit order.
/// 增补平面字符排在 U+E000..=U+FFFF 之后，与 UTF-16 码元顺序不同。
#[derive(Debug, Clone, Copy, Default)]
pub struct Binary;

impl Comparer for Binary {
  #[inline]
  fn cmp(&self, a: Val<'_>, b: Val<'_>) -> Result<Ordering> {
    // UTF-8 byte order equals code-point order
    Ok(str_of("binary", a)?.cmp(str_of("binary", b)?))
  }

  fn name(&self) -> &'static str {
    "binary"
  }
}

/// Case-insensitive order, ties broken by case
/// 忽略大小写比较，相同时按大小写决定
#[derive(Debug, Clone, Copy)]
pub struct CaseFirst {
  pub lower: bool,
}

impl Comparer for CaseFirst {
  fn cmp(&self, a: Val<'_>, b: Val<'_>) -> Result<Ordering> {
    let (a, b) = (str_of(self.name(), a)?, str_of(self.name(), b)?);
    Ok(mapped(a, b, lower).then_with(|| by_case(a, b, self.lower)))
  }

  fn name(&self) -> &'static str {
    if self.lower { "lower-first" } else { "upper-first" }
  }
}

/// English collation
/// 英文排序规则
///
/// 1. accents folded, case ignored
/// 2. case ignored
/// 3. case order; `#default` acts as upper-first
#[derive(Debug, Clone, Copy, Default)]
pub struct En {
  pub case: CaseOrder,
}

impl En {
  #[inline]
  fn lower_first(&self) -> bool {
    self.case == CaseOrder::LowerFirst
  }
}

impl Comparer for En {
  fn cmp(&self, a: Val<'_>, b: Val<'_>) -> Result<Ordering> {
    let (a, b) = (str_of("en", a)?, str_of("en", b)?);
    Ok(
      mapped(a, b, |c| lower(fold(c)))
        .then_with(|| mapped(a, b, lower))
        .then_with(|| by_case(a, b, self.lower_first())),
    )
  }

  fn name(&self) -> &'static str {
    "en"
  }
}

/// Text comparator family
/// 文本比较器族
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Text {
  Binary,
  En,
}

/// Comparator of `family` honoring `case`
/// 按 `case` 生成 `family` 的比较器
///
/// Binary with a case order becomes [`CaseFirst`]; the binary comparator
/// itself is never changed.
/// 带大小写顺序的 Binary 变为 [`CaseFirst`]；Binary 本身保持不变。
pub fn text_cmp(family: Text, case: CaseOrder) -> Arc<dyn Comparer> {
  match (family, case) {
    (Text::Binary, CaseOrder::Default) => Arc::new(Binary),
    (Text::Binary, CaseOrder::LowerFirst) => Arc::new(CaseFirst { lower: true }),
    (Text::Binary, CaseOrder::UpperFirst) => Arc::new(CaseFirst { lower: false }),
    (Text::En, case) => Arc::new(En { case }),
  }
}
