use ark_ff::Field;
use ark_poly::univariate::DensePolynomial;
use ark_poly::DenseUVPolynomial;
use ark_std::Zero;

pub fn to_f<F: Field>(values: Vec<u64>) -> Vec<F> {
    values.into_iter().map(F::from).collect()
}

pub fn const_poly<F: Field>(value: F) -> DensePolynomial<F> {
    DensePolynomial::from_coefficients_vec(vec![value])
}

/// Coefficients up to the last non-zero one. Tolerates polynomials built from a raw `coeffs` vec.
pub fn trimmed_coeffs<F: Field>(poly: &DensePolynomial<F>) -> &[F] {
    match poly.coeffs.iter().rposition(|c| !c.is_zero()) {
        Some(last) => &poly.coeffs[..=last],
        None => &[],
    }
}

pub fn effective_degree<F: Field>(poly: &DensePolynomial<F>) -> usize {
    trimmed_coeffs(poly).len().saturating_sub(1)
}

/// Divides `poly` by the monic linear factor `(x - point)` using Ruffini's rule.
///
/// Returns the quotient and the remainder. The remainder is always `poly(point)`,
/// so dividing `poly - poly(point)` must leave zero.
pub fn divide_by_linear<F: Field>(
    poly: &DensePolynomial<F>,
    point: &F,
) -> (DensePolynomial<F>, F) {
    if poly.coeffs.is_empty() {
        return (DensePolynomial::zero(), F::zero());
    }

    let n = poly.coeffs.len();
    let mut quotient = vec![F::zero(); n - 1];
    let mut carry = F::zero();

    // walk from the leading coefficient down
    for i in (0..n).rev() {
        carry = poly.coeffs[i] + carry * point;

        if i > 0 {
            quotient[i - 1] = carry;
        }
    }

    (DensePolynomial::from_coefficients_vec(quotient), carry)
}
