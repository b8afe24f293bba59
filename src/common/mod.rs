pub mod constants;
pub mod error;
pub mod validation;

pub use constants::*;
pub use error::*;
pub use validation::*;
