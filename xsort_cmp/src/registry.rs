//! Language and data-type collations / 语言与数据类型排序规则

use std::{collections::HashMap, sync::Arc};

use hipstr::HipStr;

use crate::{Collation, Text};

/// Language tag reduced to its letters (`en-US` -> `enUS`)
/// 仅保留语言标签中的字母（`en-US` -> `enUS`）
pub fn norm_lang(tag: &str) -> String {
  tag.chars().filter(|c| c.is_alphabetic()).collect()
}

/// Name to collation maps, filled at configuration time
/// 名称到排序规则的映射，在配置阶段填充
#[derive(Debug, Clone)]
pub struct Registry {
  langs: HashMap<HipStr<'static>, Arc<dyn Collation>>,
  types: HashMap<HipStr<'static>, Arc<dyn Collation>>,
}

impl Default for Registry {
  /// Registry knowing `en`
  /// 已注册 `en` 的注册表
  fn default() -> Self {
    let mut r = Self::empty();
    r.register_lang("en", Arc::new(Text::En));
    r
  }
}

impl Registry {
  pub fn empty() -> Self {
    Self {
      langs: HashMap::new(),
      types: HashMap::new(),
    }
  }

  /// Register a language; returns the collation it replaces
  /// 注册语言；返回被替换的排序规则
  pub fn register_lang(
    &mut self,
    tag: &str,
    collation: Arc<dyn Collation>,
  ) -> Option<Arc<dyn Collation>> {
    self.langs.insert(norm_lang(tag).into(), collation)
  }

  /// Register a named data type by its local name
  /// 按本地名注册命名数据类型
  pub fn register_type(
    &mut self,
    local: &str,
    collation: Arc<dyn Collation>,
  ) -> Option<Arc<dyn Collation>> {
    self.types.insert(local.to_owned().into(), collation)
  }

  pub fn lang(&self, tag: &str) -> Option<&Arc<dyn Collation>> {
    self.langs.get(norm_lang(tag).as_str())
  }

  pub fn named(&self, local: &str) -> Option<&Arc<dyn Collation>> {
    self.types.get(local)
  }
}
