pub mod generate;
pub mod list;

pub use generate::{GenerateCommandArgs, GenerationSummary, execute_generate};
pub use list::{ListEntry, execute_list, list_entries};
