pub mod arm;

mod bitwise;
pub mod conformance;

#[allow(clippy::module_name_repetitions)]
pub mod dispatch;
pub mod emit;

#[allow(clippy::module_name_repetitions)]
pub mod error;
pub mod family;

pub use bitwise::Bits;
