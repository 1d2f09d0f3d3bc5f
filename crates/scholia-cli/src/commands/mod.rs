//! Command implementations.

pub mod analyze;
pub mod compare;
pub mod extract;
pub mod inspect;

pub use self::analyze::execute_analyze;
pub use self::compare::execute_compare;
pub use self::extract::execute_extract;
pub use self::inspect::execute_inspect;
