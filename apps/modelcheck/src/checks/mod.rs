//! Convention rules applied to one asset directory.
//!
//! Each rule is a pure inspection returning findings; only `fix` writes.

pub mod material;
pub mod mesh;
pub mod metadata;
pub mod naming;
pub mod structure;
pub mod texture;
