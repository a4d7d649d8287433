pub mod park_miller;
pub mod shuffle;
pub mod source;

pub use park_miller::ParkMiller;
pub use shuffle::shuffle;
pub use source::{RandomSource, RngSource};
