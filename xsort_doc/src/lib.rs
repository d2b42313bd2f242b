#![cfg_attr(docsrs, feature(doc_cfg))]

//! xsort_doc - Document-order numbering for tree nodes
//! 树节点的文档顺序编号
//!
//! Every structural node (root or element) takes a slot from a shared
//! [`SlotAlloc`]; all other nodes derive their [`Token`] arithmetically from
//! a structural node, so comparing two tokens answers "which node comes
//! first" without walking the tree.
//! 每个结构节点（根或元素）从共享的 [`SlotAlloc`] 获取槽位；其余节点由结构节点
//! 算术推导 [`Token`]，比较令牌即可得出文档顺序，无需遍历树。

mod builder;
mod doc;
mod error;
mod node;
mod slot;
mod token;

pub use builder::Builder;
pub use doc::{Doc, DocIter};
pub use error::{Error, Result};
pub use node::{Kind, Node, NodeId, NodeRef, QName};
pub use slot::SlotAlloc;
pub use token::{ATTR_BASE, CHILD_BASE, MAX_ATTR, MAX_NS, Token};
