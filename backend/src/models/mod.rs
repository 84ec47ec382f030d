pub mod launch;
pub mod selector;

pub use launch::*;
pub use selector::*;
