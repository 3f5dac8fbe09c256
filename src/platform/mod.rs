//! Platform abstraction layer
//!
//! Host-facing plumbing that sits between the event loop and the simulation:
//! - Keyboard state and bindings
//! - Frame timing

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::InputState;
