pub mod plan;
pub mod report;

pub use plan::*;
pub use report::*;
