// Text normalization — language resolution, tokenization and stop-word filtering.

pub mod language;
pub mod tokenize;
