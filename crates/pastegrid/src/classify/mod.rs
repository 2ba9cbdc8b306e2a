//! Numeric locale handling and cell classification.

mod cell;
mod locale;

pub use cell::{
    clean_cell, is_blank, is_boolean, is_integer, is_numeric, looks_numeric, parse_number,
};
pub use locale::NumericLocale;

pub(crate) use cell::fits_i64;
