//! Comparing render-memoization policies for an expensive component.
//!
//! Three variants of a display element render the Fibonacci sequence up to a
//! counter's value, each wired to its own increment button:
//!
//! - *plain*: recomputes everything and re-executes on every parent
//!   re-render,
//! - *cached compute*: caches the sequence by count but still re-executes
//!   with the parent,
//! - *memoized*: skipped entirely unless its own count changed.
//!
//! A probe logs every body execution, which makes the punchline measurable:
//! how the increment handler is supplied (fresh closure, named closure,
//! cached callback) never changes what re-renders. Only output memoization
//! and render-skip memoization do.
//!
//! `cargo run` drives every board headlessly and logs the counts; build with
//! `--features desktop` (or `web`) to click through the screen yourself.

pub mod board;
pub mod display;
pub mod fib;
pub mod harness;
pub mod probe;

pub use board::{App, HandlerStyle};
pub use display::Policy;
pub use probe::RenderProbe;
