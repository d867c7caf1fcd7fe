// the collection of utility functions for bracket parsing and proceeding
// all positions are byte offsets into the input, so they can be used for slicing

/// Finds the closing bracket paired with the opening bracket at `bracket_start`.
/// Returns `None` if there is no '(' at `bracket_start` or it is never closed.
pub fn find_pair_to_this_bracket(input: &str, bracket_start: usize) -> Option<usize> {
    if input.as_bytes().get(bracket_start) != Some(&b'(') {
        return None;
    }
    let mut depth = 0usize;
    for (i, c) in input[bracket_start..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(bracket_start + i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Are the round brackets of `s` balanced (never closing more than was opened)?
pub fn has_balanced_brackets(s: &str) -> bool {
    let mut depth = 0i64;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

// find positions of giving char that are outside brackets only
pub fn find_char_positions_outside_brackets(s: &str, target: char) -> Vec<usize> {
    let mut depth = 0i64;
    let mut positions = Vec::new();
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ if c == target && depth == 0 => positions.push(i),
            _ => {}
        }
    }
    positions
}

/// Splits `s` at every `separator` found outside brackets.
/// Returns `None` if the brackets of `s` are unbalanced.
pub fn split_outside_brackets(s: &str, separator: char) -> Option<Vec<&str>> {
    if !has_balanced_brackets(s) {
        return None;
    }
    let mut pieces = Vec::new();
    let mut start = 0;
    for pos in find_char_positions_outside_brackets(s, separator) {
        pieces.push(&s[start..pos]);
        start = pos + separator.len_utf8();
    }
    pieces.push(&s[start..]);
    Some(pieces)
}
