pub mod pointer;

pub use pointer::{wire_element_handlers, wire_window_handlers};
