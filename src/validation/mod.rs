//! Input validation for cut lists.

mod validate;

pub use validate::{
    check_cut_list, check_kerf, check_piece, check_stock, validate_cut_list, ValidationResult,
};
