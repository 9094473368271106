//! smartpunct - typographic punctuation as a display overlay
//!
//! Scans text for straight ASCII quotes, hyphen runs, and (optionally)
//! single-spaced sentence ends, and emits (range, replacement)
//! directives that a host display layer can overlay: curly quotes, en
//! and em dashes, double sentence spacing. The stored text is never
//! modified.
//!
//! Quote orientation is decided by word-boundary heuristics, not
//! grammar. That gets contractions like `'bout` wrong by default, so
//! an exception list of known elisions forces the closing quote for
//! those; anything not on the list keeps the heuristic answer.
//!
//! ```
//! use smartpunct::{Config, Mapper};
//!
//! let mapper = Mapper::new(&Config::default()).unwrap();
//! for directive in mapper.scan("she said \"wait\"--then left") {
//!     println!("{}..{} -> {}", directive.start, directive.end, directive.replacement);
//! }
//! ```

mod category;
mod config;
mod directive;
mod error;
mod mapper;
mod overlay;
mod rules;

pub use category::{
    Category, EM_DASH, EN_DASH, LEFT_DOUBLE, LEFT_SINGLE, RIGHT_DOUBLE, RIGHT_SINGLE,
    SENTENCE_SPACE,
};
pub use config::Config;
pub use directive::Directive;
pub use error::{ConfigError, Result};
pub use mapper::{Mapper, Scan};
pub use overlay::{DirectiveSink, OverlayController, OverlayState};
pub use rules::{build_rules, PatternRule, Precondition};
