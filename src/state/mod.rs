//! Reactive application state provided through context.

pub mod ui;
