use super::{determine_case, Convention};

/// Split a word into lowercase tokens according to the convention it is written in.
///
/// Delimited conventions keep empty tokens produced by doubled, leading or
/// trailing delimiters.
pub fn tokenize(word: &str) -> Vec<String> {
    let convention = determine_case(word);
    tracing::trace!(word, %convention, "tokenizing");

    match convention {
        Convention::Snake => split_on(word, '_'),
        Convention::Upper => split_on(&word.to_lowercase(), '_'),
        Convention::Lisp => split_on(&word.to_lowercase(), '-'),
        Convention::Camel | Convention::Pascal => split_mixed_case(word),
    }
}

fn split_on(word: &str, delimiter: char) -> Vec<String> {
    word.split(delimiter).map(str::to_string).collect()
}

/// Split camelCase and PascalCase words at capitals.
///
/// A run of capitals stays together as one acronym token, except that its last
/// capital starts a new token when a lowercase letter follows it.
fn split_mixed_case(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < 2 {
        return vec![word.to_string()];
    }

    let mut result = Vec::new();
    let mut start = 0;

    for i in 1..chars.len() {
        if !chars[i].is_uppercase() {
            continue;
        }
        let after_capital = chars[i - 1].is_uppercase();
        let ends_acronym = chars.get(i + 1).is_some_and(|next| next.is_lowercase());

        if !after_capital || ends_acronym {
            result.push(lowercase(&chars[start..i]));
            start = i;
        }
    }
    result.push(lowercase(&chars[start..]));

    result
}

fn lowercase(chars: &[char]) -> String {
    chars.iter().collect::<String>().to_lowercase()
}
