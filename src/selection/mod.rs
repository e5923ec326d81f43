pub mod selector;

pub use selector::Selector;
