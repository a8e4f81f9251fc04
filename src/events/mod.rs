pub mod controls;
pub mod keyboard;
pub mod pointer;

pub use controls::*;
pub use keyboard::*;
pub use pointer::*;
