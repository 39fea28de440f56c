pub mod config;
pub mod driver;
pub mod error;
pub mod input;
pub mod print;
pub mod sort;

pub use config::Config;
pub use driver::{run, SAMPLE};
pub use error::SortError;
pub use print::{render, write_values};
pub use sort::{count_positive, is_sorted_binary, sort_binary, sort_binary_in_place};
