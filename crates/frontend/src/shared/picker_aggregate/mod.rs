//! Выбор элемента справочника по вводу текста.

pub mod component;
pub mod traits;
pub mod typeahead;

pub use component::TypeaheadInput;
pub use traits::AggregatePickerResult;
pub use typeahead::{Typeahead, SUGGESTION_LIMIT};
