pub mod core;
pub mod word_list;

pub use core::Language;
pub use word_list::WordList;
