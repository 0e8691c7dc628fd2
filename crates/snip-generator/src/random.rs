use crate::Generator;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use snip_core::ShortCode;
use thiserror::Error;
use typed_builder::TypedBuilder;

/// The 62 symbols generated codes are drawn from.
pub const ALPHANUMERIC: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Length of generated codes unless configured otherwise.
pub const DEFAULT_LENGTH: usize = 8;
/// Longest generated code a deployment may configure.
pub const MAX_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("code length must be between {min} and {max}, got {length}")]
    InvalidLength {
        length: usize,
        min: usize,
        max: usize,
    },
}

/// Draws `length` symbols uniformly and independently from `alphabet`.
///
/// `alphabet` must hold ASCII bytes only.
///
/// # Panics
///
/// Panics if `alphabet` is empty.
pub fn generate_candidate<R: Rng>(alphabet: &[u8], length: usize, rng: &mut R) -> String {
    (0..length)
        .map(|_| char::from(alphabet[rng.random_range(0..alphabet.len())]))
        .collect()
}

/// Settings for a [`RandomGenerator`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct GeneratorSettings {
    /// Length of generated codes. Deployments may only go longer than the
    /// default, never shorter.
    #[builder(default = DEFAULT_LENGTH)]
    pub length: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GeneratorSettings {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.length < DEFAULT_LENGTH || self.length > MAX_LENGTH {
            return Err(GeneratorError::InvalidLength {
                length: self.length,
                min: DEFAULT_LENGTH,
                max: MAX_LENGTH,
            });
        }
        Ok(())
    }
}

/// A generator drawing uniformly random alphanumeric codes.
///
/// The random source is injected, so tests can substitute a seeded one.
/// It sits behind a mutex that is held for a single draw only.
#[derive(Debug)]
pub struct RandomGenerator<R = StdRng> {
    rng: Mutex<R>,
    length: usize,
}

impl RandomGenerator<StdRng> {
    /// Creates a generator seeded from the operating system.
    pub fn new(settings: GeneratorSettings) -> Result<Self, GeneratorError> {
        Self::with_rng(settings, StdRng::from_os_rng())
    }

    /// Creates a deterministic generator, for tests and reproducible runs.
    pub fn seeded(settings: GeneratorSettings, seed: u64) -> Result<Self, GeneratorError> {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RandomGenerator<R> {
    /// Creates a generator drawing from the given random source.
    pub fn with_rng(settings: GeneratorSettings, rng: R) -> Result<Self, GeneratorError> {
        settings.validate()?;
        Ok(Self {
            rng: Mutex::new(rng),
            length: settings.length,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl<R: RngCore + Send + 'static> Generator for RandomGenerator<R> {
    type Output = ShortCode;

    fn generate(&self) -> Self::Output {
        let mut rng = self.rng.lock();
        ShortCode::new_unchecked(generate_candidate(ALPHANUMERIC, self.length, &mut *rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn seeded(seed: u64) -> RandomGenerator {
        RandomGenerator::seeded(GeneratorSettings::default(), seed).unwrap()
    }

    #[test]
    fn alphabet_has_62_unique_symbols() {
        let unique: HashSet<_> = ALPHANUMERIC.iter().collect();
        assert_eq!(unique.len(), 62);
        assert!(ALPHANUMERIC.iter().all(u8::is_ascii_alphanumeric));
    }

    #[test]
    fn default_length_is_eight() {
        let code = seeded(1).generate();
        assert_eq!(code.as_str().len(), 8);
    }

    #[test]
    fn codes_are_alphanumeric() {
        let generator = seeded(2);
        for _ in 0..200 {
            let code = generator.generate();
            assert!(code.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
            assert!(ShortCode::parse(code.as_str()).is_ok());
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let first = seeded(42);
        let second = seeded(42);

        for _ in 0..20 {
            assert_eq!(first.generate(), second.generate());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        assert_ne!(seeded(1).generate(), seeded(2).generate());
    }

    #[test]
    fn draws_do_not_repeat_in_practice() {
        let generator = seeded(7);
        let codes: HashSet<_> = (0..1000).map(|_| generator.generate()).collect();
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn longer_codes_when_configured() {
        let settings = GeneratorSettings::builder().length(12).build();
        let generator = RandomGenerator::seeded(settings, 3).unwrap();
        assert_eq!(generator.generate().as_str().len(), 12);
        assert_eq!(generator.length(), 12);
    }

    #[test]
    fn rejects_shorter_than_default() {
        let settings = GeneratorSettings::builder().length(7).build();
        let err = RandomGenerator::new(settings).unwrap_err();
        assert_eq!(
            err,
            GeneratorError::InvalidLength {
                length: 7,
                min: DEFAULT_LENGTH,
                max: MAX_LENGTH
            }
        );
    }

    #[test]
    fn rejects_longer_than_max() {
        let settings = GeneratorSettings::builder().length(MAX_LENGTH + 1).build();
        assert!(RandomGenerator::new(settings).is_err());
    }

    #[test]
    fn candidate_uses_only_given_alphabet() {
        let mut rng = StdRng::seed_from_u64(9);
        let candidate = generate_candidate(b"xyz", 64, &mut rng);
        assert_eq!(candidate.len(), 64);
        assert!(candidate.chars().all(|c| "xyz".contains(c)));
    }

    #[test]
    fn candidate_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(11);
        let candidate = generate_candidate(b"ab", 10_000, &mut rng);
        let a = candidate.chars().filter(|c| *c == 'a').count();
        assert!((4_500..=5_500).contains(&a), "skewed draw: {a} of 10000");
    }

    #[test]
    fn zero_length_candidate_is_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(generate_candidate(ALPHANUMERIC, 0, &mut rng), "");
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RandomGenerator>();
    }
}
