use std::time::Instant;
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ec::{AffineRepr, CurveGroup, PrimeGroup};
use ark_ff::{One, PrimeField};
use ark_serialize::Valid;
use ark_std::Zero;
use rand::{CryptoRng, RngCore};
use tracing::{debug, info};
use zeroize::Zeroizing;
use crate::kzg::error::{KzgError, Result};
use crate::kzg::verifier::VerifierKey;

/// Ceiling on the number of powers a single setup may allocate.
pub const DEFAULT_MAX_SUPPORTED_DEGREE: usize = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupConfig {
    pub max_supported_degree: usize,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            max_supported_degree: DEFAULT_MAX_SUPPORTED_DEGREE,
        }
    }
}

/// Structured reference string: powers of a discarded trapdoor in both source groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Srs<P: Pairing> {
    g1: P::G1Affine,
    g2: P::G2Affine,
    /// G1 * alpha^i for i = 0..=t
    g1_powers: Vec<P::G1Affine>,
    /// G2 * alpha^i for i = 0..=t
    g2_powers: Vec<P::G2Affine>,
    /// G1 * alpha, kept apart from the table so a degree 0 srs can still verify
    alpha_g1: P::G1Affine,
    /// e(G1, G2)
    gt: PairingOutput<P>,
}

impl<P: Pairing> Srs<P> {
    pub fn max_degree(&self) -> usize {
        self.g1_powers.len() - 1
    }

    pub fn g1(&self) -> &P::G1Affine {
        &self.g1
    }

    pub fn g2(&self) -> &P::G2Affine {
        &self.g2
    }

    pub fn g1_powers(&self) -> &[P::G1Affine] {
        &self.g1_powers
    }

    pub fn g2_powers(&self) -> &[P::G2Affine] {
        &self.g2_powers
    }

    pub fn gt(&self) -> &PairingOutput<P> {
        &self.gt
    }

    pub fn verifier_key(&self) -> VerifierKey<P> {
        VerifierKey {
            g1: self.g1,
            g2: self.g2,
            alpha_g1: self.alpha_g1,
            gt: self.gt,
        }
    }

    pub(crate) fn ensure_degree(&self, degree: usize) -> Result<()> {
        if degree > self.max_degree() {
            return Err(KzgError::DegreeExceeded {
                degree,
                max_degree: self.max_degree(),
            });
        }

        Ok(())
    }

    /// Checks that the tables are consistent powers of one hidden scalar.
    ///
    /// Needs nothing but the public parameters, so a party receiving an srs
    /// from elsewhere can run it before trusting commitments made against it.
    pub fn validate(&self) -> Result<()> {
        if self.g1_powers.is_empty() || self.g1_powers.len() != self.g2_powers.len() {
            return Err(KzgError::MalformedSrs("power tables are empty or differ in length"));
        }

        let g1_valid = self.g1_powers.iter().all(|p| p.check().is_ok())
            && self.g1.check().is_ok()
            && self.alpha_g1.check().is_ok();
        let g2_valid = self.g2_powers.iter().all(|p| p.check().is_ok()) && self.g2.check().is_ok();

        if !g1_valid || !g2_valid {
            return Err(KzgError::MalformedSrs("element outside the prime order subgroup"));
        }

        if self.g1.is_zero() || self.g2.is_zero() || self.alpha_g1.is_zero() {
            return Err(KzgError::MalformedSrs("identity where a generator is expected"));
        }

        if self.g1_powers[0] != self.g1 || self.g2_powers[0] != self.g2 {
            return Err(KzgError::MalformedSrs("power tables do not start at the generators"));
        }

        if self.gt.is_zero() || self.gt != P::pairing(self.g1, self.g2) {
            return Err(KzgError::MalformedSrs("gt is not e(G1, G2)"));
        }

        for (g1_power, g2_power) in self.g1_powers.iter().zip(&self.g2_powers) {
            if P::pairing(self.g1, *g2_power) != P::pairing(*g1_power, self.g2) {
                return Err(KzgError::MalformedSrs("g1 and g2 tables disagree"));
            }
        }

        // alpha itself is only visible through g2_powers[1] when t >= 1
        if let Some(alpha_g2) = self.g2_powers.get(1) {
            if P::pairing(self.alpha_g1, self.g2) != P::pairing(self.g1, *alpha_g2) {
                return Err(KzgError::MalformedSrs("alpha_g1 disagrees with the g2 table"));
            }

            for window in self.g1_powers.windows(2) {
                if P::pairing(window[1], self.g2) != P::pairing(window[0], *alpha_g2) {
                    return Err(KzgError::MalformedSrs("g1 table is not a geometric sequence"));
                }
            }
        }

        Ok(())
    }
}

pub fn setup<P: Pairing, R: CryptoRng + ?Sized>(max_degree: usize, rng: &mut R) -> Result<Srs<P>> {
    setup_with_config(max_degree, &SetupConfig::default(), rng)
}

pub fn setup_with_config<P: Pairing, R: CryptoRng + ?Sized>(
    max_degree: usize,
    config: &SetupConfig,
    rng: &mut R,
) -> Result<Srs<P>> {
    if max_degree > config.max_supported_degree {
        return Err(KzgError::InvalidDegreeBound {
            requested: max_degree,
            max: config.max_supported_degree,
        });
    }

    let started = Instant::now();
    let toxic_waste = sample_trapdoor::<P::ScalarField, R>(rng);
    let srs = derive_srs::<P>(max_degree, &toxic_waste);

    info!(max_degree, elapsed = ?started.elapsed(), "generated srs");

    Ok(srs)
}

/// Builds the srs from a caller supplied trapdoor. Callers own wiping `toxic_waste`.
pub(crate) fn derive_srs<P: Pairing>(max_degree: usize, toxic_waste: &P::ScalarField) -> Srs<P> {
    let g1 = P::G1::generator();
    let g2 = P::G2::generator();

    let mut g1_powers = Vec::with_capacity(max_degree + 1);
    let mut g2_powers = Vec::with_capacity(max_degree + 1);
    let mut power = Zeroizing::new(P::ScalarField::one());

    for _ in 0..=max_degree {
        g1_powers.push(g1 * *power);
        g2_powers.push(g2 * *power);
        *power *= toxic_waste;
    }

    debug!(powers = max_degree + 1, "computed srs power tables");

    Srs {
        g1: g1.into_affine(),
        g2: g2.into_affine(),
        g1_powers: P::G1::normalize_batch(&g1_powers),
        g2_powers: P::G2::normalize_batch(&g2_powers),
        alpha_g1: (g1 * *toxic_waste).into_affine(),
        gt: P::pairing(g1, g2),
    }
}

/// Draws a uniform non-zero scalar. 64 bytes reduced mod r keeps the bias negligible.
fn sample_trapdoor<F: PrimeField, R: CryptoRng + ?Sized>(rng: &mut R) -> Zeroizing<F> {
    loop {
        let mut bytes = Zeroizing::new([0u8; 64]);
        rng.fill_bytes(bytes.as_mut_slice());

        let candidate = Zeroizing::new(F::from_le_bytes_mod_order(bytes.as_slice()));

        if !candidate.is_zero() {
            return candidate;
        }
    }
}
