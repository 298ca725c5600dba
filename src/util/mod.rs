//! Utility helpers shared across the page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic. The cookie store is written against an injectable
//! jar so its logic runs natively under test; the DOM and share-link
//! helpers are browser-only glue.

pub mod cookies;
pub mod dom;
pub mod share_link;
pub mod theme;
