mod window;
pub use window::Window;

mod rolling;
pub use rolling::{Policy, Rolling};

pub mod select;

#[cfg(test)]
pub mod testing;
