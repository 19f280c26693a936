use serde::{Deserialize, Serialize};

/// Target style for the case converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStyle {
    /// `HELLO WORLD`
    Uppercase,
    /// `hello world`
    Lowercase,
    /// `Hello World`
    TitleCase,
    /// `Hello world`
    SentenceCase,
    /// `HelloWorld`
    PascalCase,
    /// `helloWorld`
    CamelCase,
    /// `hello_world`
    SnakeCase,
    /// `hello-world`
    KebabCase,
}

impl CaseStyle {
    /// Every style, in the order the case converter lists them.
    pub const ALL: [Self; 8] = [
        Self::Uppercase,
        Self::Lowercase,
        Self::TitleCase,
        Self::SentenceCase,
        Self::PascalCase,
        Self::CamelCase,
        Self::SnakeCase,
        Self::KebabCase,
    ];
}
