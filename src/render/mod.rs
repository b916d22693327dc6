pub use renderer::*;
pub use style::*;
pub use tree::*;

mod renderer;
mod style;
mod tree;
