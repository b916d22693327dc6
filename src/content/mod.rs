pub use defaults::*;
pub use migrate::*;
pub use payload::*;

mod defaults;
mod migrate;
mod payload;
