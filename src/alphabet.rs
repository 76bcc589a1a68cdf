pub const OPERATORS: &[u8] = "|*+?().".as_bytes();
pub const EPSILON: char = 'ε';

/// Input symbols are ASCII letters and digits.
pub fn is_symbol(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

pub fn is_operator(c: char) -> bool {
    c.is_ascii() && OPERATORS.contains(&(c as u8))
}

pub fn is_repetition(c: char) -> bool {
    matches!(c, '*' | '+' | '?')
}

pub fn is_valid(c: char) -> bool {
    is_symbol(c) || is_operator(c)
}
