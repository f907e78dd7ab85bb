pub mod check;
pub mod rule;

pub use check::*;
pub use rule::*;
