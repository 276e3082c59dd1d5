pub mod display;

pub use display::{DisplaySurface, ScreenDisplay};
