#![cfg_attr(docsrs, feature(doc_cfg))]

//! xsort_key - Sort keys and multi-key sorting of nodes
//! 排序键与节点多键排序
//!
//! A [`SortKey`] with only literal configuration binds its comparer once in
//! [`SortKey::new`]; otherwise the comparer is resolved from the live
//! [`Ctx`] on every sort. [`sort`] evaluates each key once per node and
//! breaks full ties by document order, so the result is always stable.
//! 配置全为字面量的 [`SortKey`] 在 [`SortKey::new`] 中一次性绑定比较器；否则每次排序都从
//! [`Ctx`] 重新解析。[`sort`] 对每个节点的每个键只求值一次，完全相同时按文档顺序决定，
//! 因此结果始终稳定。

mod attr;
mod composite;
mod conf;
mod ctx;
mod error;
mod sort;
mod sort_key;

pub use attr::Attr;
pub use composite::{CompositeKey, MultiKeyCmp};
pub use conf::{Conf, ParsedConf, default};
pub use ctx::Ctx;
pub use error::{Error, Result};
pub use sort::sort;
pub use sort_key::{SortKey, resolve};
