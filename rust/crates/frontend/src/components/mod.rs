//! Reusable UI components.

mod button;
mod card;
mod input;
mod progress;

pub use button::Button;
pub use card::{Card, CardContent, CardHeader, CardTitle};
pub use input::Input;
pub use progress::Progress;
