//! Pure domain logic: the savings jar, the quiz, and the value objects they use.
//!
//! Nothing in here performs I/O or fails on user input; malformed input is a
//! no-op or coerced to a default.

pub mod action;
pub mod money;
pub mod ports;
pub mod quiz;
pub mod savings;
