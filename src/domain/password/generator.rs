//! Random password generation under length and complexity constraints

use rand::Rng;

use crate::domain::DomainError;

pub const MIN_LENGTH: i32 = 4;
pub const MAX_LENGTH: i32 = 30;

pub const LENGTH_OUT_OF_RANGE: &str = "Длина пароля должна быть от 4 до 30 символов.";
pub const COMPLEXITY_OUT_OF_RANGE: &str = "Уровень сложности должен быть от 1 до 3.";

/// Symbols added at the highest complexity level
pub const SYMBOLS: &str = "!@#$%^&*()_-+=<>?/{}[]|";

const DIGITS: &str = "0123456789";
const ALPHANUMERIC: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const FULL: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!@#$%^&*()_-+=<>?/{}[]|";

/// Character set selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    /// Digits only
    Digits,
    /// Digits and ASCII letters of both cases
    Alphanumeric,
    /// Alphanumerics plus [`SYMBOLS`]
    Full,
}

impl Complexity {
    pub fn alphabet(&self) -> &'static str {
        match self {
            Self::Digits => DIGITS,
            Self::Alphanumeric => ALPHANUMERIC,
            Self::Full => FULL,
        }
    }
}

impl TryFrom<i32> for Complexity {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Digits),
            2 => Ok(Self::Alphanumeric),
            3 => Ok(Self::Full),
            _ => Err(DomainError::invalid_argument(COMPLEXITY_OUT_OF_RANGE)),
        }
    }
}

/// Check both parameters, length first
pub fn validate(length: i32, complexity: i32) -> Result<(usize, Complexity), DomainError> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(DomainError::invalid_argument(LENGTH_OUT_OF_RANGE));
    }

    let complexity = Complexity::try_from(complexity)?;

    Ok((length as usize, complexity))
}

/// Generate a password using the thread-local random source
pub fn generate(length: i32, complexity: i32) -> Result<String, DomainError> {
    generate_with(&mut rand::thread_rng(), length, complexity)
}

/// Generate a password drawing each character uniformly from the alphabet
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: i32,
    complexity: i32,
) -> Result<String, DomainError> {
    let (length, complexity) = validate(length, complexity)?;
    let alphabet = complexity.alphabet().as_bytes();

    Ok((0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn message(result: Result<String, DomainError>) -> String {
        match result {
            Err(DomainError::InvalidArgument { message }) => message,
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_digits_only() {
        let password = generate(8, 1).unwrap();
        assert_eq!(password.chars().count(), 8);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_alphanumeric_membership() {
        let password = generate(30, 2).unwrap();
        assert_eq!(password.chars().count(), 30);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_full_membership() {
        let password = generate(30, 3).unwrap();
        assert_eq!(password.chars().count(), 30);
        assert!(
            password
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || SYMBOLS.contains(c))
        );
    }

    #[test]
    fn test_every_valid_combination_has_exact_length() {
        for length in MIN_LENGTH..=MAX_LENGTH {
            for complexity in 1..=3 {
                let alphabet = Complexity::try_from(complexity).unwrap().alphabet();
                let password = generate(length, complexity).unwrap();

                assert_eq!(password.chars().count(), length as usize);
                assert!(password.chars().all(|c| alphabet.contains(c)));
            }
        }
    }

    #[test]
    fn test_alphabets() {
        assert_eq!(Complexity::Digits.alphabet().len(), 10);
        assert_eq!(Complexity::Alphanumeric.alphabet().len(), 62);
        assert_eq!(Complexity::Full.alphabet().len(), 62 + SYMBOLS.len());
        assert!(Complexity::Full.alphabet().ends_with(SYMBOLS));
    }

    #[test]
    fn test_length_out_of_range() {
        assert_eq!(message(generate(3, 2)), LENGTH_OUT_OF_RANGE);
        assert_eq!(message(generate(31, 2)), LENGTH_OUT_OF_RANGE);
        assert_eq!(message(generate(-1, 1)), LENGTH_OUT_OF_RANGE);
    }

    #[test]
    fn test_complexity_out_of_range() {
        assert_eq!(message(generate(8, 0)), COMPLEXITY_OUT_OF_RANGE);
        assert_eq!(message(generate(8, 4)), COMPLEXITY_OUT_OF_RANGE);
    }

    #[test]
    fn test_length_reported_before_complexity() {
        assert_eq!(message(generate(2, 9)), LENGTH_OUT_OF_RANGE);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let first = generate_with(&mut StdRng::seed_from_u64(7), 16, 3).unwrap();
        let second = generate_with(&mut StdRng::seed_from_u64(7), 16, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_boundaries_accepted() {
        assert_eq!(generate(MIN_LENGTH, 1).unwrap().len(), 4);
        assert_eq!(generate(MAX_LENGTH, 1).unwrap().len(), 30);
    }
}
