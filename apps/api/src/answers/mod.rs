// Answer normalisation: raw quiz answers in, canonical record out.
// Alias resolution is the primary path; key-shape normalisation is a pre-pass
// for answer sets keyed by question id or camelCase.

pub mod aliases;
pub mod keys;
pub mod typed;
