//! Reusable form components.

mod button;
mod choice_buttons;
mod input;
mod phone_input;
mod progress;

pub use button::*;
pub use choice_buttons::*;
pub use input::*;
pub use phone_input::*;
pub use progress::*;
