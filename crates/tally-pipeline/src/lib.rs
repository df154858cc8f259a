//! # tally-pipeline
//!
//! Board cleaning and context summarization for Tally.
//!
//! A board snapshot flows through these stages, in order:
//! - [`resolve`]: column ids to titles
//! - [`normalize`]: raw cell text to typed values
//! - [`filter`]: drop empty and embedded header rows
//! - [`audit`]: completeness statistics and quality notes
//! - [`roles`]: semantic column roles and board kind
//! - [`aggregate`]: per-group counts and sums
//! - [`render`]: the bounded context document
//!
//! [`clean::clean_board`] runs the first four stages and
//! [`render::summarize`] the last three. Both are pure: the same snapshot
//! always yields the same board and the same document.

pub mod aggregate;
pub mod audit;
pub mod clean;
pub mod filter;
pub mod format;
pub mod normalize;
pub mod render;
pub mod resolve;
pub mod roles;

pub use clean::{CleanOptions, clean_board, clean_json};
pub use render::{ContextSummary, RenderOptions, render_context, summarize};
