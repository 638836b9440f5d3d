mod commitment;
mod error;
mod opening;
mod srs;
mod verifier;

use ark_ec::pairing::Pairing;
use ark_poly::univariate::DensePolynomial;
use ark_poly::DenseUVPolynomial;
use ark_test_curves::bls12_381::{Bls12_381, Fr};
use rand::CryptoRng;
use tracing::info;
use crate::poly_utils::to_f;

pub use commitment::{commit, verify_poly, Commitment};
pub use error::{KzgError, Result};
pub use opening::{open, Opening};
pub use srs::{setup, setup_with_config, SetupConfig, Srs, DEFAULT_MAX_SUPPORTED_DEGREE};
pub use verifier::VerifierKey;

/// Prover and verifier sharing one read-only srs.
#[derive(Debug, Clone)]
pub struct KZG<P: Pairing> {
    srs: Srs<P>,
}

impl<P: Pairing> KZG<P> {
    pub fn new(srs: Srs<P>) -> Self {
        Self { srs }
    }

    pub fn setup<R: CryptoRng + ?Sized>(max_degree: usize, rng: &mut R) -> Result<Self> {
        Ok(Self::new(setup(max_degree, rng)?))
    }

    pub fn srs(&self) -> &Srs<P> {
        &self.srs
    }

    pub fn verifier_key(&self) -> VerifierKey<P> {
        self.srs.verifier_key()
    }

    pub fn commit(&self, poly: &DensePolynomial<P::ScalarField>) -> Result<Commitment<P>> {
        commit(&self.srs, poly)
    }

    pub fn open(
        &self,
        poly: &DensePolynomial<P::ScalarField>,
        point: &P::ScalarField,
    ) -> Result<Opening<P>> {
        open(&self.srs, poly, point)
    }

    pub fn check(
        &self,
        point: &P::ScalarField,
        commitment: &Commitment<P>,
        opening: &Opening<P>,
    ) -> bool {
        self.verifier_key().verify(
            commitment,
            point,
            &opening.evaluation,
            &opening.evaluation_proof,
        )
    }

    pub fn verify_poly(
        &self,
        commitment: &Commitment<P>,
        poly: &DensePolynomial<P::ScalarField>,
    ) -> bool {
        verify_poly(&self.srs, commitment, poly)
    }
}

/// One full commitment round over BLS12-381 with a fresh trapdoor.
pub fn run_kzg() -> Result<()> {
    let kzg = KZG::<Bls12_381>::setup(5, &mut rand::rng())?;

    // 4x^3 + 7x^2 + 2x + 1
    let polynomial = DensePolynomial::from_coefficients_vec(to_f::<Fr>(vec![1, 2, 7, 4]));
    let commitment = kzg.commit(&polynomial)?;

    info!(full_opening = kzg.verify_poly(&commitment, &polynomial), "committed");

    for point in [Fr::from(0), Fr::from(3)] {
        let opening = kzg.open(&polynomial, &point)?;
        let is_valid = kzg.check(&point, &commitment, &opening);

        info!(%point, value = %opening.evaluation, is_valid, "opened");
    }

    let point = Fr::from(3);
    let forged = Opening::new(Fr::from(177), kzg.open(&polynomial, &point)?.evaluation_proof);
    let is_valid = kzg.check(&point, &commitment, &forged);

    info!(%point, value = %forged.evaluation, is_valid, "forged opening");

    Ok(())
}
