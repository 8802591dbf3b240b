mod entry;
mod language_code;
mod value;

pub use entry::{Entry, Node, Template, TemplateFn};
pub use language_code::LanguageCode;
pub use value::Value;
