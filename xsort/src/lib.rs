#![cfg_attr(docsrs, feature(doc_cfg))]

//! xsort - Collation and ordering core
//! 排序与比较核心
//!
//! - [`doc`]: document-order tokens, tree arena and builder
//! - [`cmp`]: comparators, collations and the registry
//! - [`key`]: sort keys and multi-key sort of nodes
//! - [`tree`]: ordered container over any comparer
//!
//! - [`doc`]：文档顺序令牌、树内存池与构建器
//! - [`cmp`]：比较器、排序规则与注册表
//! - [`key`]：排序键与节点多键排序
//! - [`tree`]：基于任意比较器的有序容器

pub use xsort_cmp as cmp;
pub use xsort_doc as doc;
pub use xsort_key as key;
pub use xsort_tree as tree;

pub use xsort_cmp::{AsVal, CaseOrder, Comparer, DataType, Order, Registry, Val};
pub use xsort_doc::{Builder, Doc, Node, NodeRef, SlotAlloc, Token};
pub use xsort_key::{Attr, Conf, Ctx, SortKey, sort};
pub use xsort_tree::{BinaryTree, CaseBlindSet};
