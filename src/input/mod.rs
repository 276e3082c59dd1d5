pub mod keymap;

pub use keymap::{Button, Keymap};
