pub use store::*;

mod store;
