//! Rendering of payload values into the conventions of German funding forms.
//!
//! All functions are pure and total: unusable input degrades to a documented
//! fallback instead of failing.

pub mod date;
pub mod number;
pub mod text;

pub use date::{format_date, format_month_year, parse_date};
pub use number::{format_euro, format_percent, to_number};
pub use text::{non_empty_text, normalize_text, slugify_filename};
