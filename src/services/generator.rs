//! Password generation
//!
//! Draws every character independently and uniformly from the effective
//! alphabet. The generator never clamps the requested length: the CLI keeps
//! lengths inside 6..=32, but any length is honored here (0 yields an empty
//! password).

use rand::rngs::ThreadRng;
use rand::Rng;
use std::fmt;

use crate::error::{PassgenResult, ValidationError};
use crate::models::{alphabet_for, GenerationPreset, GenerationRequest};

/// A freshly generated password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generate a single password with the given random source
pub fn generate_password<R: Rng + ?Sized>(
    rng: &mut R,
    request: &GenerationRequest,
) -> Result<GeneratedPassword, ValidationError> {
    if request.classes.is_empty() {
        return Err(ValidationError::NoCharacterClassSelected);
    }

    let alphabet: Vec<char> = alphabet_for(&request.classes).chars().collect();
    let password = (0..request.length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect();

    Ok(GeneratedPassword(password))
}

/// Stateful generator that remembers the last result
///
/// A failed generation clears the remembered password rather than leaving a
/// stale one behind.
pub struct PasswordGenerator<R: Rng = ThreadRng> {
    rng: R,
    current: Option<GeneratedPassword>,
}

impl PasswordGenerator<ThreadRng> {
    /// Generator backed by the thread-local random source
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for PasswordGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PasswordGenerator<R> {
    /// Generator over an explicit random source (seeded in tests)
    pub fn with_rng(rng: R) -> Self {
        Self { rng, current: None }
    }

    /// Generate a password and remember it
    pub fn generate(&mut self, request: &GenerationRequest) -> PassgenResult<GeneratedPassword> {
        match generate_password(&mut self.rng, request) {
            Ok(password) => {
                log::debug!(
                    "generated {}-character password from {} classes",
                    request.length,
                    request.classes.iter().count()
                );
                self.current = Some(password.clone());
                Ok(password)
            }
            Err(e) => {
                self.current = None;
                Err(e.into())
            }
        }
    }

    /// Generate using one of the presets
    pub fn generate_preset(&mut self, preset: GenerationPreset) -> PassgenResult<GeneratedPassword> {
        self.generate(&preset.request())
    }

    /// Generate `count` passwords from the same request
    pub fn generate_many(
        &mut self,
        request: &GenerationRequest,
        count: usize,
    ) -> PassgenResult<Vec<GeneratedPassword>> {
        (0..count).map(|_| self.generate(request)).collect()
    }

    /// The most recent successful result, if the last call succeeded
    pub fn current(&self) -> Option<&GeneratedPassword> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PassgenError;
    use crate::models::{CharacterClass, ClassSelection};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded() -> PasswordGenerator<StdRng> {
        PasswordGenerator::with_rng(StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_length_and_alphabet() {
        let mut generator = seeded();
        let request = GenerationRequest::new(ClassSelection::new().with(CharacterClass::Digits), 24);

        let password = generator.generate(&request).unwrap();
        assert_eq!(password.len(), 24);
        assert!(password.as_str().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_same_seed_same_password() {
        let request = GenerationRequest::new(ClassSelection::all(), 16);
        let a = seeded().generate(&request).unwrap();
        let b = seeded().generate(&request).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_selection_clears_current() {
        let mut generator = seeded();
        generator
            .generate(&GenerationRequest::new(ClassSelection::all(), 12))
            .unwrap();
        assert!(generator.current().is_some());

        let err = generator
            .generate(&GenerationRequest::new(ClassSelection::new(), 12))
            .unwrap_err();
        assert!(matches!(
            err,
            PassgenError::Validation(ValidationError::NoCharacterClassSelected)
        ));
        assert!(generator.current().is_none());
    }

    #[test]
    fn test_length_outside_ui_range_still_runs() {
        let mut generator = seeded();
        let empty = generator
            .generate(&GenerationRequest::new(ClassSelection::all(), 0))
            .unwrap();
        assert!(empty.is_empty());

        let long = generator
            .generate(&GenerationRequest::new(ClassSelection::all(), 100))
            .unwrap();
        assert_eq!(long.len(), 100);
    }

    #[test]
    fn test_preset_and_many() {
        let mut generator = seeded();
        let weak = generator.generate_preset(GenerationPreset::Weak).unwrap();
        assert_eq!(weak.len(), 8);
        assert!(weak
            .as_str()
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));

        let batch = generator
            .generate_many(&GenerationPreset::Strong.request(), 5)
            .unwrap();
        assert_eq!(batch.len(), 5);
        assert_eq!(generator.current(), batch.last());
    }
}
