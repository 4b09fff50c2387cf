//! Internal test modules - whitebox tests with crate access
//!
//! Tests here drive `TuiApp` through the acceptance harness, which needs
//! the crate-private test constructors.

mod acceptance_widget;
