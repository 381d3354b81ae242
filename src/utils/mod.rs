//! Stateless helper functions.
//!
//! This module provides:
//! - Date formatting and day differences ([`date`])
//! - Decimal rounding ([`number`])
//! - Shuffling and ordered-map merge/sort/filter ([`collections`])
//! - Trimming, pattern replacement and prefix/suffix tests ([`strings`])
//! - Email, non-empty and password predicates ([`validation`])

pub mod collections;
pub mod date;
pub mod number;
pub mod strings;
pub mod validation;

pub use collections::{
    filter_object_by_key, merge_objects, shuffle_array, sort_object_by_key, SortOrder,
};
pub use date::{calculate_date_difference, format_date, get_current_date};
pub use number::round_number;
pub use strings::{ends_with, replace_string, starts_with, trim_string};
pub use validation::{is_not_empty, is_strong_password, is_valid_email};
