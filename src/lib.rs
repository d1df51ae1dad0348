// src/lib.rs

//! On-page SEO scanner: fetches a page, runs deterministic checks over its
//! markup (title, headings, meta description, images, canonical tag, URL
//! structure), and serves the categorized findings over HTTP. A background
//! path summarizes the page text with a local language model and proposes
//! replacement copy for flagged issues.
//!
//! The `core` module is pure and synchronous; everything that talks to the
//! network lives in the sibling modules.

pub mod assistant;
pub mod config;
pub mod core;
pub mod fetcher;
pub mod logging;
pub mod server;
pub mod tasks;
