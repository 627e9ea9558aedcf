//! Platform-independent core of the proximity motion effect.
//!
//! Nothing here references browser APIs; the web front-end supplies a
//! [`Surface`] and a [`FrameScheduler`] and forwards pointer events.

pub mod channel;
pub mod constants;
pub mod controller;
pub mod frame;
pub mod tuning;

pub use channel::*;
pub use controller::*;
pub use frame::*;
pub use tuning::*;
