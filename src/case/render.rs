//! Join token sequences into a target convention.

/// snake_case
pub fn to_snake(tokens: &[String]) -> String {
    tokens.join("_")
}

/// UPPER_CASE
pub fn to_upper(tokens: &[String]) -> String {
    tokens.join("_").to_uppercase()
}

/// camelCase
pub fn to_camel(tokens: &[String]) -> String {
    match tokens {
        [] => String::new(),
        [only] => only.clone(),
        [first, rest @ ..] => {
            let mut result = first.clone();
            for token in rest {
                result.push_str(&title(token));
            }
            result
        }
    }
}

/// PascalCase
pub fn to_pascal(tokens: &[String]) -> String {
    tokens.iter().map(|t| title(t)).collect()
}

/// lisp-case
pub fn to_lisp(tokens: &[String]) -> String {
    tokens.join("-")
}

/// Uppercase the first character of tokens at least two characters long
fn title(token: &str) -> String {
    if token.chars().nth(1).is_none() {
        return token.to_string();
    }
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
