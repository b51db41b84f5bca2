//! Bilingual (Arabic/English) portfolio page pipeline.
//!
//! A content document is loaded once ([`store`]), resolved through the
//! active language ([`i18n`]), and poured into a fixed page template
//! ([`binder`] for static slots, [`render`] for the service, skill and
//! project collections). [`controller`] owns the language state and re-runs
//! both on every toggle.

pub mod binder;
pub mod config;
pub mod content;
pub mod controller;
pub mod dom;
pub mod i18n;
pub mod render;
pub mod store;
pub mod template;
