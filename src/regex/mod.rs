// Cached compilation of the crate's own fixed patterns

#[macro_use]
mod cache;
