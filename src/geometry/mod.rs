mod compass;
mod gap;

pub use compass::{Corner, Side, Wall};
pub use gap::Gap;
