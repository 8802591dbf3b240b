//! Dictionary composition.
//!
//! Raw dictionaries are registered per language and turned into effective
//! dictionaries on first use by merging in their fallback chain. Built
//! dictionaries are cached and never mutated afterwards.

mod builder;
mod effective;
mod error;
mod merge;
mod raw;

pub use builder::DictionaryBuilder;
pub use effective::EffectiveDictionary;
pub use error::DictionaryError;
pub use merge::merge;
pub use raw::{DECIMAL_SEPARATOR_KEY, FALLBACK_KEY, GROUP_SEPARATOR_KEY, RawDictionary};
