#![cfg_attr(docsrs, feature(doc_cfg))]

//! xsort_cmp - Comparators for collation and ordering
//! 排序与比较使用的比较器
//!
//! Every comparator implements [`Comparer`] over the tagged value [`Val`].
//! Text comparators are never mutated in place: [`text_cmp`] and
//! [`Collation::make`] map a descriptor (family, data type, case order) to a
//! fresh comparator.
//! 所有比较器都基于标记值 [`Val`] 实现 [`Comparer`]。文本比较器不会被就地修改：
//! [`text_cmp`] 与 [`Collation::make`] 根据描述（族、数据类型、大小写顺序）生成新的比较器。

mod collation;
mod comparer;
mod data_type;
mod error;
mod num;
mod order;
mod registry;
mod text;
mod val;

pub use collation::Collation;
pub use comparer::{Comparer, DocOrder, Rev};
pub use data_type::DataType;
pub use error::{Error, Result};
pub use num::{Numeric, to_num};
pub use order::{CaseOrder, Order};
pub use registry::{Registry, norm_lang};
pub use text::{Binary, CaseFirst, En, Text, fold, text_cmp};
pub use val::{AsVal, Val};
