use crate::alphabet::{is_operator, is_repetition, is_symbol};

/// Makes concatenation explicit by inserting `.` between adjacent operands,
/// and wraps every atom that is followed by a repetition operator in its own
/// group: `ab*c` becomes `a.(b)*.c`, `(ab)+` becomes `((a.b))+`.
///
/// Only a symbol or `)` strictly ends an operand in the plain juxtaposition
/// rule. This pass also lets a trailing repetition operator end one, so
/// `a*b` becomes `(a)*.b` instead of leaving `b` unjoined.
///
/// The pattern is expected to have passed validation.
pub fn insert_concat(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut output = String::with_capacity(chars.len() * 2);

    let mut i = 0;
    while i < chars.len() {
        let current = chars[i];
        match chars.get(i + 1) {
            Some(&op) if is_repetition(op) => {
                if current == ')' {
                    output.push(')');
                    wrap_last_group(&mut output);
                    output.push(op);
                } else if !is_operator(current) {
                    output.push('(');
                    output.push(current);
                    output.push(')');
                    output.push(op);
                } else {
                    // chained repetition such as the first `*` of `a**`
                    output.push(current);
                    i += 1;
                    continue;
                }
                i += 1;
            }
            _ => output.push(current)
        }

        if let Some(&next) = chars.get(i + 1) {
            if ends_operand(chars[i]) && starts_operand(next) {
                output.push('.');
            }
        }
        i += 1;
    }
    output
}

fn ends_operand(c: char) -> bool {
    !is_operator(c) || c == ')' || is_repetition(c)
}

fn starts_operand(c: char) -> bool {
    is_symbol(c) || c == '('
}

/// `output` ends with a closing parenthesis whose group was emitted earlier;
/// surround that whole group with one more pair of parentheses.
fn wrap_last_group(output: &mut String) {
    let mut depth: usize = 0;
    let mut open = None;
    for (idx, c) in output.char_indices().rev() {
        match c {
            ')' => depth += 1,
            '(' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    open = Some(idx);
                    break;
                }
            }
            _ => {}
        }
    }
    debug_assert!(open.is_some(), "no opening parenthesis for the group ending {:?}", output);
    output.insert(open.unwrap_or(0), '(');
    output.push(')');
}


#[cfg(test)]
mod tests {
    use crate::regex::concat::insert_concat;

    #[test]
    fn juxtaposed_literals() {
        assert_eq!(insert_concat("a"), "a");
        assert_eq!(insert_concat("ab"), "a.b");
        assert_eq!(insert_concat("abc"), "a.b.c");
    }

    #[test]
    fn groups() {
        assert_eq!(insert_concat("a(b)"), "a.(b)");
        assert_eq!(insert_concat("(a)(b)"), "(a).(b)");
        assert_eq!(insert_concat("(a|b)c"), "(a|b).c");
    }

    #[test]
    fn alternation_is_left_alone() {
        assert_eq!(insert_concat("a|b"), "a|b");
        assert_eq!(insert_concat("ab|cd"), "a.b|c.d");
    }

    #[test]
    fn repeated_literal_is_wrapped() {
        assert_eq!(insert_concat("a*"), "(a)*");
        assert_eq!(insert_concat("ab+"), "a.(b)+");
        assert_eq!(insert_concat("a?b"), "(a)?.b");
        assert_eq!(insert_concat("a*b*"), "(a)*.(b)*");
    }

    #[test]
    fn repeated_group_is_wrapped_once() {
        assert_eq!(insert_concat("(ab)+"), "((a.b))+");
        assert_eq!(insert_concat("(ab)*c"), "((a.b))*.c");
        assert_eq!(insert_concat("x(a|b)?"), "x.((a|b))?");
        assert_eq!(insert_concat("((a)*)+"), "((((a))*))+");
    }

    #[test]
    fn chained_repetition() {
        assert_eq!(insert_concat("a**"), "(a)**");
        assert_eq!(insert_concat("a*?b"), "(a)*?.b");
    }

    #[test]
    fn explicit_concatenation_passes_through() {
        assert_eq!(insert_concat("a.b"), "a.b");
        assert_eq!(insert_concat("a.b*"), "a.(b)*");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "no opening parenthesis")]
    fn unbalanced_group_is_caught_in_debug_builds() {
        insert_concat("a)*");
    }
}
