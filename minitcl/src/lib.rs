//! minitcl — a tiny Tcl-flavoured command language.
//!
//! This crate implements the evaluation core of a minimalist
//! command-oriented scripting language:
//!
//! - A context-sensitive lexer ([`lexer`]): brace nesting, `[…]` command
//!   substitution, quoted strings, `$name` interpolation.
//! - A word-assembling evaluation loop ([`interp`]): adjacent tokens merge
//!   into one argument unless separated by whitespace; completed statements
//!   dispatch through a flat command table.
//! - A call-frame stack with full shadowing, pushed per procedure call.
//! - A five-state control-flow signal (normal/error/return/break/continue)
//!   threading every evaluation boundary.
//! - A standalone arithmetic/relational expression evaluator ([`expr`])
//!   used by `if`, `while`, and `expr`.
//!
//! # Quick start
//!
//! ```rust
//! use minitcl::Interp;
//!
//! let mut interp = Interp::new();
//! interp.evaluate("set x 6; set y [expr $x * 7]").unwrap();
//! assert_eq!(interp.result(), "42");
//!
//! interp.evaluate("puts \"x is $x\"").unwrap();
//! assert_eq!(interp.take_output(), vec!["x is 6"]);
//! ```
//!
//! Embedders can add native commands through [`Interp::register`]; the
//! `minitcl` binary wraps the interpreter in a line-oriented REPL
//! ([`repl`]).

pub mod builtins;
pub mod cli;
pub mod expr;
pub mod interp;
pub mod lexer;
pub mod repl;

// Re-exports for convenience.
pub use interp::{CmdResult, Command, Flow, Interp, NativeFn};
