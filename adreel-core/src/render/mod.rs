//! Still-frame rendering: text layout and rasterization.

pub mod frame;
pub mod text;
