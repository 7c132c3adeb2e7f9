pub mod collection;

pub use collection::{Collection, Endpoint, Group, Item};
