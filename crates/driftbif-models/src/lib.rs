pub mod soliton;

pub use soliton::{DissipativeSoliton, SolitonParams};
