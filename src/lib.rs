//! # learn-js-first
//!
//! Leptos + WASM frontend for a single-page "learn JavaScript before you
//! ask" guide. The page is rendered entirely client-side; the only
//! persisted state is a dark-mode preference kept in the browser cookie
//! jar.
//!
//! This crate contains the page components, UI state, and the utility
//! layer: a cookie store over an injectable jar, DOM lookup helpers, and
//! the theme controller that ties the two together.

pub mod app;
pub mod components;
pub mod state;
pub mod util;
