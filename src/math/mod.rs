//! Mathematical utilities: factor expansion and trapezoid quadrature.

pub mod expansion;
pub mod quadrature;

pub use expansion::*;
pub use quadrature::*;
