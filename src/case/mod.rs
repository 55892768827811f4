pub mod render;
pub mod tokenizer;

use std::fmt;

pub use tokenizer::tokenize;

/// Naming convention a word is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Convention {
    #[default]
    Snake,
    Upper,
    Camel,
    Pascal,
    Lisp,
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Convention::Snake => write!(f, "snake"),
            Convention::Upper => write!(f, "upper"),
            Convention::Camel => write!(f, "camel"),
            Convention::Pascal => write!(f, "pascal"),
            Convention::Lisp => write!(f, "lisp"),
        }
    }
}

/// Classify the convention of a word. First matching rule wins.
pub fn determine_case(word: &str) -> Convention {
    if word.contains('-') {
        return Convention::Lisp;
    }
    if word == word.to_lowercase() {
        return Convention::Snake;
    }
    if word == word.to_uppercase() {
        return Convention::Upper;
    }
    // Empty words were caught above as snake
    match word.chars().next() {
        Some(ch) if ch.is_lowercase() => Convention::Camel,
        _ => Convention::Pascal,
    }
}

/// Convention requested by the user. Unknown options resolve to snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Target(pub Convention);

impl Target {
    /// Resolve a user option such as `c` or `Pascal`
    pub fn from_option(option: &str) -> Self {
        let convention = match option.to_lowercase().as_str() {
            "s" | "snake" => Convention::Snake,
            "u" | "upper" => Convention::Upper,
            "c" | "camel" => Convention::Camel,
            "p" | "pascal" => Convention::Pascal,
            "l" | "lisp" => Convention::Lisp,
            _ => Convention::Snake,
        };
        Target(convention)
    }

    pub fn convention(&self) -> Convention {
        self.0
    }

    /// Render an already tokenized word
    pub fn render(&self, tokens: &[String]) -> String {
        match self.0 {
            Convention::Snake => render::to_snake(tokens),
            Convention::Upper => render::to_upper(tokens),
            Convention::Camel => render::to_camel(tokens),
            Convention::Pascal => render::to_pascal(tokens),
            Convention::Lisp => render::to_lisp(tokens),
        }
    }

    pub fn apply(&self, word: &str) -> String {
        self.render(&tokenize(word))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Change the case style of `word` to the one named by `option`
pub fn change_case(option: &str, word: &str) -> String {
    Target::from_option(option).apply(word)
}
