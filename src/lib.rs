//! A tiny comma-separated greeting builder.
//!
//! This crate provides the small building blocks of a program that greets a
//! list of names on standard output as `Hello a, b, c!`. It is intentionally
//! small and easy to read, suitable for coursework and experiments with
//! string formatting and testable output.
//!
//! The core is [`join_with_commas`], a pure function that joins a sequence of
//! strings with the `", "` separator. The public modules [`greeting`] and
//! [`names`] expose the line composition around it and the built-in name
//! list; [`repl`] adds an interactive loop on top.

mod format;
pub mod greeting;
pub mod names;
pub mod repl;

/// Just a convenient re-export of the core join operation.
///
/// See [`join_with_commas`] for the contract and examples.
pub use format::join_with_commas;
