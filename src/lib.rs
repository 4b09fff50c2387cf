//! Paralist
//!
//! Terminal widget with a text field, a conditional "Add" button and a
//! bounded list of the most recent submissions.
//!
//! Follows a Pure Core / Impure Shell split: `model` and `state` hold the
//! data and pure handlers, `view` owns the terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
