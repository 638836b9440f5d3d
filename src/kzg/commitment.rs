use std::ops::Add;
use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup};
use ark_poly::univariate::DensePolynomial;
use ark_std::Zero;
use tracing::debug;
use crate::kzg::error::Result;
use crate::kzg::srs::Srs;
use crate::poly_utils::{effective_degree, trimmed_coeffs};

/// A polynomial evaluated at the hidden trapdoor, in G1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commitment<P: Pairing>(P::G1Affine);

impl<P: Pairing> Commitment<P> {
    pub fn new(point: P::G1Affine) -> Self {
        Self(point)
    }

    pub fn inner(&self) -> &P::G1Affine {
        &self.0
    }

    pub fn into_inner(self) -> P::G1Affine {
        self.0
    }
}

impl<P: Pairing> Add for Commitment<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self((self.0 + rhs.0).into_affine())
    }
}

/// sum(coeffs[i] * bases[i]); extra bases are ignored.
pub(crate) fn linear_combination<G: AffineRepr>(bases: &[G], coeffs: &[G::ScalarField]) -> G::Group {
    coeffs
        .iter()
        .zip(bases)
        .map(|(c_i, base)| *base * *c_i)
        .fold(G::Group::zero(), |acc, term| acc + term)
}

pub fn commit<P: Pairing>(
    srs: &Srs<P>,
    poly: &DensePolynomial<P::ScalarField>,
) -> Result<Commitment<P>> {
    let degree = effective_degree(poly);
    srs.ensure_degree(degree)?;

    let commitment = linear_combination(srs.g1_powers(), trimmed_coeffs(poly)).into_affine();
    debug!(degree, "committed to polynomial");

    Ok(Commitment(commitment))
}

/// Opens the whole polynomial: recomputes the commitment and compares.
pub fn verify_poly<P: Pairing>(
    srs: &Srs<P>,
    commitment: &Commitment<P>,
    poly: &DensePolynomial<P::ScalarField>,
) -> bool {
    match commit(srs, poly) {
        Ok(recomputed) => recomputed == *commitment,
        Err(err) => {
            debug!(%err, "rejecting full opening");
            false
        }
    }
}
