use ark_ec::pairing::Pairing;
use ark_ec::CurveGroup;
use ark_poly::univariate::DensePolynomial;
use ark_poly::{DenseUVPolynomial, Polynomial};
use ark_std::Zero;
use tracing::{debug, error};
use crate::kzg::commitment::linear_combination;
use crate::kzg::error::{KzgError, Result};
use crate::kzg::srs::Srs;
use crate::poly_utils::{const_poly, divide_by_linear, effective_degree, trimmed_coeffs};

/// Claimed evaluation plus a G2 witness for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opening<P: Pairing> {
    pub evaluation: P::ScalarField,
    /// Commitment to `(f(x) - f(point)) / (x - point)` over the G2 powers.
    pub evaluation_proof: P::G2Affine,
}

impl<P: Pairing> Opening<P> {
    pub fn new(evaluation: P::ScalarField, evaluation_proof: P::G2Affine) -> Self {
        Self {
            evaluation,
            evaluation_proof,
        }
    }
}

pub fn open<P: Pairing>(
    srs: &Srs<P>,
    poly: &DensePolynomial<P::ScalarField>,
    point: &P::ScalarField,
) -> Result<Opening<P>> {
    let degree = effective_degree(poly);
    srs.ensure_degree(degree)?;

    let poly = DensePolynomial::from_coefficients_slice(trimmed_coeffs(poly));
    let evaluation = poly.evaluate(point);
    let (quotient_poly, remainder) = divide_by_linear(&(&poly - &const_poly(evaluation)), point);

    if !remainder.is_zero() {
        error!(%point, %remainder, "x - point does not divide f(x) - f(point)");
        return Err(KzgError::DivisionInvariantViolated {
            remainder: remainder.to_string(),
        });
    }

    let evaluation_proof = linear_combination(srs.g2_powers(), &quotient_poly.coeffs).into_affine();
    debug!(degree, "opened polynomial");

    Ok(Opening::new(evaluation, evaluation_proof))
}
