pub mod common;
pub mod tag;
pub mod toast;
