//! Comparator family tests / 比较器族测试

use std::{cmp::Ordering, sync::Arc};

use aok::{OK, Void};
use proptest::prelude::*;
use xsort_cmp::{
  Binary, CaseOrder, Collation, Comparer, DataType, DocOrder, En, Error, Numeric,
  Order, Registry, Rev, Text, Val, fold, norm_lang, text_cmp, to_num,
};
use xsort_doc::{Builder, Node, QName, SlotAlloc, Token};

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

fn sorted(c: &dyn Comparer, li: &[&str]) -> Vec<String> {
  let mut v: Vec<&str> = li.to_vec();
  v.sort_by(|a, b| c.cmp(Val::Str(a), Val::Str(b)).unwrap());
  v.into_iter().map(String::from).collect()
}

#[test]
fn test_case_orders() -> Void {
  let input = ["b", "A", "a", "B"];
  assert_eq!(sorted(&Binary, &input), ["A", "B", "a", "b"]);
  assert_eq!(
    sorted(&*text_cmp(Text::Binary, CaseOrder::LowerFirst), &input),
    ["a", "A", "b", "B"]
  );
  assert_eq!(
    sorted(&*text_cmp(Text::Binary, CaseOrder::UpperFirst), &input),
    ["A", "a", "B", "b"]
  );
  // en with #default puts uppercase first
  // en 在 #default 下大写在前
  assert_eq!(sorted(&En::default(), &input), ["A", "a", "B", "b"]);
  assert_eq!(
    sorted(
      &En {
        case: CaseOrder::LowerFirst
      },
      &input
    ),
    ["a", "A", "b", "B"]
  );
  OK
}

#[test]
fn test_factory_keeps_binary() {
  assert_eq!(text_cmp(Text::Binary, CaseOrder::Default).name(), "binary");
  assert_eq!(
    text_cmp(Text::Binary, CaseOrder::LowerFirst).name(),
    "lower-first"
  );
  assert_eq!(text_cmp(Text::En, CaseOrder::UpperFirst).name(), "en");
}

#[test]
fn test_en_accents() -> Void {
  let en = En::default();
  assert_eq!(fold('é'), 'e');
  assert_eq!(fold('Ñ'), 'N');
  assert_eq!(fold('ß'), 'S');
  assert_eq!(fold('×'), '*');
  assert_eq!(fold('z'), 'z');

  // accent only matters once the folded strings tie
  // 仅在折叠后相同时才比较重音
  assert_eq!(en.cmp(Val::Str("éa"), Val::Str("eb"))?, Ordering::Less);
  assert_eq!(en.cmp(Val::Str("e"), Val::Str("é"))?, Ordering::Less);
  assert_eq!(en.cmp(Val::Str("Résumé"), Val::Str("resume"))?, Ordering::Greater);
  assert_eq!(en.cmp(Val::Str("ab"), Val::Str("abc"))?, Ordering::Less);
  assert_eq!(en.cmp(Val::Str("naïve"), Val::Str("naïve"))?, Ordering::Equal);
  assert_eq!(
    sorted(&en, &["zeta", "Éclair", "eclair", "apple"]),
    ["apple", "eclair", "Éclair", "zeta"]
  );
  OK
}

#[test]
fn test_numeric_nan_last() -> Void {
  let input = ["3", "abc", "-1", "2"];
  assert_eq!(sorted(&Numeric, &input), ["-1", "2", "3", "abc"]);
  let desc = Rev::new(Arc::new(Numeric));
  assert_eq!(sorted(&desc, &input), ["3", "2", "-1", "abc"]);

  assert_eq!(to_num(" 42 "), 42.0);
  assert!(to_num("4 2").is_nan());
  assert!(to_num("").is_nan());
  assert_eq!(Numeric.cmp(Val::Num(-0.0), Val::Num(0.0))?, Ordering::Equal);
  assert_eq!(Numeric.cmp(Val::Str("x"), Val::Num(f64::NAN))?, Ordering::Equal);
  assert_eq!(
    Numeric.cmp(Val::Str("1e3"), Val::Num(999.0))?,
    Ordering::Greater
  );
  OK
}

#[test]
fn test_mismatch() {
  let t = Val::Node(Token::slot(1));
  assert_eq!(
    Binary.cmp(Val::Str("a"), Val::Num(1.0)),
    Err(Error::Mismatch {
      cmp: "binary",
      expect: "string",
      got: "number"
    })
  );
  assert!(matches!(
    En::default().cmp(t, Val::Str("a")),
    Err(Error::Mismatch { got: "node", .. })
  ));
  assert!(Numeric.cmp(Val::Num(1.0), t).is_err());
  assert!(DocOrder.cmp(Val::Str("a"), t).is_err());
  // errors pass through the reverse wrapper
  // 错误透传反转包装器
  assert!(Rev::new(Arc::new(Binary)).cmp(t, t).is_err());
}

#[test]
fn test_doc_order() -> Void {
  let alloc = SlotAlloc::new();
  let mut b = Builder::new(&alloc)?;
  b.start(QName::local("a"))?;
  let x = b.attr(QName::local("x"), "1")?;
  let t = b.text("t")?;
  b.end()?;
  let doc = b.finish()?;
  let (x, t) = (doc.node(x)?, doc.node(t)?);

  assert_eq!(DocOrder::cmp_nodes(&x, &t), Ordering::Less);
  assert_eq!(DocOrder::cmp_nodes(&t, &t), Ordering::Equal);
  assert_eq!(
    DocOrder.cmp(Val::Node(t.token()), Val::Node(x.token()))?,
    Ordering::Greater
  );
  OK
}

#[test]
fn test_parse_literals() {
  assert_eq!(Order::parse("descending"), Ok(Order::Desc));
  assert_eq!(Order::parse("up"), Err(Error::Order("up".into())));
  assert_eq!(Order::Desc.apply(Ordering::Less), Ordering::Greater);
  assert_eq!(CaseOrder::parse("#default"), Ok(CaseOrder::Default));
  assert_eq!(CaseOrder::parse("lower-first"), Ok(CaseOrder::LowerFirst));
  assert!(CaseOrder::parse("Lower-First").is_err());
  assert_eq!(DataType::parse("number"), Ok(DataType::Number));
  assert_eq!(
    DataType::parse("my:type"),
    Ok(DataType::Named {
      prefix: "my".into(),
      local: "type".into()
    })
  );
  assert_eq!(DataType::parse("qname"), Err(Error::DataType("qname".into())));
  assert!(DataType::parse(":x").is_err());
  let msg = Error::Order("up".into()).to_string();
  assert!(msg.contains("ascending or descending"));
}

#[derive(Debug)]
struct Reverse;

impl Collation for Reverse {
  fn make(&self, _: &DataType, _: CaseOrder) -> Arc<dyn Comparer> {
    Arc::new(Rev::new(Arc::new(Binary)))
  }
}

#[test]
fn test_registry() -> Void {
  let mut reg = Registry::default();
  assert_eq!(norm_lang("en-US"), "enUS");
  assert!(reg.lang("en").is_some());
  assert!(reg.lang("e-n").is_some());
  assert!(reg.lang("fr").is_none());
  assert!(reg.named("rev").is_none());

  assert!(reg.register_type("rev", Arc::new(Reverse)).is_none());
  let c = reg
    .named("rev")
    .unwrap()
    .make(&DataType::parse("x:rev")?, CaseOrder::Default);
  assert_eq!(sorted(&*c, &["a", "c", "b"]), ["c", "b", "a"]);

  assert!(reg.register_lang("en", Arc::new(Text::Binary)).is_some());
  let en = reg.lang("en").unwrap().make(&DataType::Text, CaseOrder::Default);
  assert_eq!(en.name(), "binary");
  assert!(Registry::empty().lang("en").is_none());
  OK
}

#[test]
fn test_titlecase_digraph() -> Void {
  // Ǆ upper, ǅ title, ǆ lower
  // Ǆ 大写，ǅ 标题，ǆ 小写
  let input = ["\u{1C5}", "\u{1C6}", "\u{1C4}"];
  for c in [
    text_cmp(Text::Binary, CaseOrder::LowerFirst),
    text_cmp(Text::En, CaseOrder::LowerFirst),
  ] {
    assert_eq!(sorted(&*c, &input), ["\u{1C6}", "\u{1C5}", "\u{1C4}"], "{}", c.name());
  }
  for c in [
    text_cmp(Text::Binary, CaseOrder::UpperFirst),
    text_cmp(Text::En, CaseOrder::Default),
  ] {
    assert_eq!(sorted(&*c, &input), ["\u{1C4}", "\u{1C5}", "\u{1C6}"], "{}", c.name());
  }
  OK
}

fn comparers() -> Vec<Arc<dyn Comparer>> {
  vec![
    text_cmp(Text::Binary, CaseOrder::Default),
    text_cmp(Text::Binary, CaseOrder::LowerFirst),
    text_cmp(Text::Binary, CaseOrder::UpperFirst),
    text_cmp(Text::En, CaseOrder::Default),
    text_cmp(Text::En, CaseOrder::LowerFirst),
    Numeric.make(&DataType::Number, CaseOrder::Default),
  ]
}

fn text() -> impl Strategy<Value = String> {
  prop_oneof![
    "[aAbBéÉeE]{0,4}",
    "[ -~]{0,6}",
    "[0-9 .-]{0,4}",
    any::<String>(),
  ]
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(300))]

  #[test]
  fn prop_antisymmetric(a in text(), b in text()) {
    for c in comparers() {
      let ab = c.cmp(Val::Str(&a), Val::Str(&b)).unwrap();
      let ba = c.cmp(Val::Str(&b), Val::Str(&a)).unwrap();
      prop_assert_eq!(ab, ba.reverse(), "{}", c.name());

      let r = Rev::new(c.clone());
      let rab = r.cmp(Val::Str(&a), Val::Str(&b)).unwrap();
      let rba = r.cmp(Val::Str(&b), Val::Str(&a)).unwrap();
      prop_assert_eq!(rab, rba.reverse(), "rev {}", c.name());
    }
  }

  #[test]
  fn prop_desc_negates_text(a in text(), b in text()) {
    for c in comparers().into_iter().filter(|c| c.name() != "numeric") {
      let r = Rev::new(c.clone());
      prop_assert_eq!(
        r.cmp(Val::Str(&a), Val::Str(&b)).unwrap(),
        c.cmp(Val::Str(&a), Val::Str(&b)).unwrap().reverse()
      );
    }
  }

  #[test]
  fn prop_desc_negates_numbers(a in -1e6f64..1e6, b in -1e6f64..1e6) {
    let r = Rev::new(Arc::new(Numeric));
    prop_assert_eq!(
      r.cmp(Val::Num(a), Val::Num(b)).unwrap(),
      Numeric.cmp(Val::Num(a), Val::Num(b)).unwrap().reverse()
    );
  }

  #[test]
  fn prop_en_equal_iff_identical(a in text(), b in text()) {
    for c in [En::default(), En { case: CaseOrder::LowerFirst }] {
      let eq = c.cmp(Val::Str(&a), Val::Str(&b)).unwrap() == Ordering::Equal;
      prop_assert_eq!(eq, a == b);
    }
  }

  #[test]
  fn prop_numeric_matches_f64(a in any::<i32>(), b in any::<i32>()) {
    let (sa, sb) = (a.to_string(), b.to_string());
    prop_assert_eq!(
      Numeric.cmp(Val::Str(&sa), Val::Str(&sb)).unwrap(),
      a.cmp(&b)
    );
  }
}

#[test]
fn test_shuffled_sort_is_deterministic() {
  let words = ["Apple", "apple", "APPLE", "ápple", "banana", "Banana", "b", ""];
  let expect = sorted(&En::default(), &words);
  let mut v = words.to_vec();
  for _ in 0..32 {
    fastrand::shuffle(&mut v);
    assert_eq!(sorted(&En::default(), &v), expect);
  }
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(500))]

  #[test]
  fn prop_transitive(
    a in "[\u{1C4}-\u{1C6}aAbB]{0,3}",
    b in "[\u{1C4}-\u{1C6}aAbB]{0,3}",
    c in "[\u{1C4}-\u{1C6}aAbB]{0,3}",
  ) {
    for cmp in comparers().into_iter().filter(|c| c.name() != "numeric") {
      let mut v = [a.as_str(), b.as_str(), c.as_str()];
      v.sort_by(|x, y| cmp.cmp(Val::Str(x), Val::Str(y)).unwrap());
      for (x, y) in [(v[0], v[1]), (v[1], v[2]), (v[0], v[2])] {
        prop_assert_ne!(
          cmp.cmp(Val::Str(x), Val::Str(y)).unwrap(),
          Ordering::Greater,
          "{} {:?} {:?}",
          cmp.name(),
          x,
          y
        );
      }
    }
  }
}
