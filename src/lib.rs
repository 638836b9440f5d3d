mod kzg;
mod poly_utils;

pub use kzg::*;
pub use poly_utils::{const_poly, divide_by_linear, effective_degree, to_f, trimmed_coeffs};
