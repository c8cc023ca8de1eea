pub mod item;
pub mod flash;
pub mod health;

pub use item::*;
pub use flash::*;
pub use health::*;
