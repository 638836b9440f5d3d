use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ec::AffineRepr;
use ark_serialize::Valid;
use tracing::{debug, warn};
use crate::kzg::commitment::Commitment;
use crate::kzg::error::{KzgError, Result};

/// Public part of the srs. Enough to check any opening, useless for producing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifierKey<P: Pairing> {
    pub(crate) g1: P::G1Affine,
    pub(crate) g2: P::G2Affine,
    pub(crate) alpha_g1: P::G1Affine,
    pub(crate) gt: PairingOutput<P>,
}

impl<P: Pairing> VerifierKey<P> {
    /// Rejects points that are off the curve or outside the prime order subgroup.
    pub fn check_inputs(&self, commitment: &Commitment<P>, proof: &P::G2Affine) -> Result<()> {
        commitment
            .inner()
            .check()
            .map_err(|_| KzgError::MalformedProofInput("commitment is not a valid G1 element"))?;
        proof
            .check()
            .map_err(|_| KzgError::MalformedProofInput("proof is not a valid G2 element"))?;

        Ok(())
    }

    /// e(C, G2) == e(G1 * (alpha - point), proof) + e(G1, G2) * value
    pub fn verify(
        &self,
        commitment: &Commitment<P>,
        point: &P::ScalarField,
        value: &P::ScalarField,
        proof: &P::G2Affine,
    ) -> bool {
        if let Err(err) = self.check_inputs(commitment, proof) {
            warn!(%err, "rejecting opening");
            return false;
        }

        let shifted = self.alpha_g1.into_group() - self.g1 * *point;

        let lhs = P::pairing(*commitment.inner(), self.g2);
        let rhs = P::pairing(shifted, *proof) + self.gt * *value;

        let is_valid = lhs == rhs;
        debug!(is_valid, "checked opening");

        is_valid
    }
}

#[cfg(test)]
mod tests {
    use ark_ec::{AffineRepr, CurveGroup, PrimeGroup};
    use ark_poly::univariate::DensePolynomial;
    use ark_poly::DenseUVPolynomial;
    use ark_test_curves::bls12_381::{Bls12_381, Fq, Fr, G1Affine, G2Affine, G2Projective as G2};
    use crate::kzg::commitment::{commit, Commitment};
    use crate::kzg::error::KzgError;
    use crate::kzg::opening::open;
    use crate::kzg::srs::derive_srs;
    use crate::poly_utils::to_f;

    #[test]
    pub fn test_verify_accepts_honest_opening() {
        let srs = derive_srs::<Bls12_381>(4, &Fr::from(1234567));
        let vk = srs.verifier_key();
        let poly = DensePolynomial::from_coefficients_vec(to_f::<Fr>(vec![5, 0, 3, 9, 1]));
        let commitment = commit(&srs, &poly).unwrap();
        let point = Fr::from(42);
        let opening = open(&srs, &poly, &point).unwrap();

        assert!(vk.verify(&commitment, &point, &opening.evaluation, &opening.evaluation_proof));
        assert!(!vk.verify(&commitment, &Fr::from(43), &opening.evaluation, &opening.evaluation_proof));
    }

    #[test]
    pub fn test_verify_rejects_off_curve_commitment() {
        let srs = derive_srs::<Bls12_381>(2, &Fr::from(99));
        let vk = srs.verifier_key();
        let bogus = Commitment::<Bls12_381>::new(G1Affine::new_unchecked(Fq::from(1), Fq::from(1)));
        let proof = G2::generator().into_affine();

        assert_eq!(
            vk.check_inputs(&bogus, &proof),
            Err(KzgError::MalformedProofInput("commitment is not a valid G1 element")),
        );
        assert!(!vk.verify(&bogus, &Fr::from(1), &Fr::from(1), &proof));
    }

    #[test]
    pub fn test_verify_rejects_off_curve_proof() {
        let srs = derive_srs::<Bls12_381>(2, &Fr::from(99));
        let vk = srs.verifier_key();
        let poly = DensePolynomial::from_coefficients_vec(to_f::<Fr>(vec![3, 1, 4]));
        let commitment = commit(&srs, &poly).unwrap();
        let opening = open(&srs, &poly, &Fr::from(6)).unwrap();
        // (x, x) is off the curve since the generator's y is not +-x
        let generator = G2Affine::generator();
        let bogus = G2Affine::new_unchecked(generator.x, generator.x);

        assert_eq!(
            vk.check_inputs(&commitment, &bogus),
            Err(KzgError::MalformedProofInput("proof is not a valid G2 element")),
        );
        assert!(!vk.verify(&commitment, &Fr::from(6), &opening.evaluation, &bogus));
        assert!(vk.verify(&commitment, &Fr::from(6), &opening.evaluation, &opening.evaluation_proof));
    }

    #[test]
    pub fn test_identity_inputs_are_well_formed() {
        let srs = derive_srs::<Bls12_381>(2, &Fr::from(99));
        let vk = srs.verifier_key();
        let zero = Commitment::<Bls12_381>::new(G1Affine::zero());

        // zero polynomial: value 0 everywhere, quotient 0
        assert!(vk.check_inputs(&zero, &G2::generator().into_affine()).is_ok());
        assert!(vk.verify(&zero, &Fr::from(17), &Fr::from(0), &G2Affine::zero()));
    }
}
