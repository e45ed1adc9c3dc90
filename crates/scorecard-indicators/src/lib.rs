pub mod indicators;
pub mod snapshot;
pub mod windows;


pub use indicators::*;
pub use snapshot::*;
pub use windows::*;
