//! HTML document model: match criteria, node capabilities, owned documents and
//! pretty-printing.

pub mod criteria;
pub mod node;
pub mod pretty;
pub mod tree;
