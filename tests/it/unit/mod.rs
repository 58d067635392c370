//! Unit tests for the statechart core.

mod lifecycle_tests;
mod transition_tests;
