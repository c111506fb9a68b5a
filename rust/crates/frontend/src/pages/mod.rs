//! Page components.

mod funding;

pub use funding::DemoFunding;
