use log::debug;
use thiserror::Error;

use crate::alphabet::is_valid;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unbalanced parentheses: too many closing parentheses (at {position})")]
    UnbalancedExtraClose { position: usize },
    #[error("Unbalanced parentheses: unclosed parentheses ({unclosed} left open)")]
    UnbalancedUnclosed { unclosed: usize },
    #[error("Invalid characters in regex: {character:?} at {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("Regex cannot be empty")]
    EmptyPattern,
}

/// Checks balance, then the character set, then emptiness. The first failing
/// check wins.
pub fn validate(pattern: &str) -> Result<(), ValidationError> {
    check_balance(pattern)
        .and_then(|_| check_characters(pattern))
        .and_then(|_| if pattern.is_empty() { Err(ValidationError::EmptyPattern) } else { Ok(()) })
        .map_err(|e| {
            debug!("rejected {:?}: {}", pattern, e);
            e
        })
}

fn check_balance(pattern: &str) -> Result<(), ValidationError> {
    let mut open: usize = 0;
    for (position, c) in pattern.chars().enumerate() {
        match c {
            '(' => open += 1,
            ')' => {
                open = open.checked_sub(1)
                    .ok_or(ValidationError::UnbalancedExtraClose { position })?;
            }
            _ => {}
        }
    }
    if open > 0 {
        return Err(ValidationError::UnbalancedUnclosed { unclosed: open });
    }
    Ok(())
}

fn check_characters(pattern: &str) -> Result<(), ValidationError> {
    match pattern.chars().enumerate().find(|(_, c)| !is_valid(*c)) {
        Some((position, character)) => Err(ValidationError::InvalidCharacter { character, position }),
        None => Ok(())
    }
}


#[cfg(test)]
mod tests {
    use crate::regex::validate::{validate, ValidationError};
    use crate::regex::validate::ValidationError::*;

    #[test]
    fn accepts_well_formed_patterns() {
        for pattern in ["a", "ab", "a|b", "(ab)+", "a*b?c+", "(a|b)*abb", "a.b", "Z9"] {
            assert_eq!(validate(pattern), Ok(()), "{}", pattern);
        }
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(validate(""), Err(EmptyPattern));
    }

    #[test]
    fn rejects_unclosed() {
        assert_eq!(validate("(a"), Err(UnbalancedUnclosed { unclosed: 1 }));
        assert_eq!(validate("((a)"), Err(UnbalancedUnclosed { unclosed: 1 }));
    }

    #[test]
    fn rejects_extra_close() {
        assert_eq!(validate("a)"), Err(UnbalancedExtraClose { position: 1 }));
        assert!(matches!(validate(")("), Err(UnbalancedExtraClose { position: 0 })));
    }

    #[test]
    fn rejects_invalid_characters() {
        assert_eq!(validate("a$"), Err(InvalidCharacter { character: '$', position: 1 }));
        assert!(matches!(validate("a b"), Err(InvalidCharacter { character: ' ', .. })));
    }

    #[test]
    fn balance_is_checked_before_characters() {
        assert!(matches!(validate("$)"), Err(UnbalancedExtraClose { .. })));
        assert!(matches!(validate("($"), Err(UnbalancedUnclosed { .. })));
    }

    #[test]
    fn messages() {
        assert_eq!(ValidationError::EmptyPattern.to_string(), "Regex cannot be empty");
        assert!(validate("a)").unwrap_err().to_string()
            .starts_with("Unbalanced parentheses: too many closing parentheses"));
    }
}
