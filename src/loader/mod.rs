pub mod collection;
pub mod prompt;

pub use collection::load_collection;
pub use prompt::{
    DEFAULT_COLLECTION_PATH, prompt_collection_path, resolve_collection_path,
    validate_collection_path,
};
