use crate::alphabet::is_symbol;

fn precedence(op: char) -> u8 {
    match op {
        '*' | '+' | '?' => 3,
        '.' => 2,
        '|' => 1,
        _ => 0
    }
}

/// Shunting-yard conversion of an explicit-concatenation pattern (the output
/// of [`insert_concat`](crate::regex::concat::insert_concat)) to postfix.
pub fn to_postfix(pattern: &str) -> String {
    let mut output = String::with_capacity(pattern.len());
    let mut stack: Vec<char> = vec![];

    for c in pattern.chars() {
        if is_symbol(c) {
            output.push(c);
        } else if c == '(' {
            stack.push(c);
        } else if c == ')' {
            while let Some(&top) = stack.last() {
                if top == '(' {
                    break;
                }
                output.push(top);
                stack.pop();
            }
            stack.pop();
        } else {
            while let Some(&top) = stack.last() {
                if top == '(' || precedence(top) < precedence(c) {
                    break;
                }
                output.push(top);
                stack.pop();
            }
            stack.push(c);
        }
    }

    while let Some(op) = stack.pop() {
        output.push(op);
    }
    output
}
