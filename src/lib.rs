#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod canvas;
mod config;
mod font;
mod geometry;
#[cfg(feature = "std")]
mod logging;
mod status;
mod surface;

pub use canvas::*;
pub use config::*;
pub use font::*;
pub use geometry::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use status::*;
pub use surface::*;
