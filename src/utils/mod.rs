pub mod constants;
pub mod errors;

pub use constants::{Algorithm, GANTT_CELL_WIDTH};
pub use errors::LoadError;
