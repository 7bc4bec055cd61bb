use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Good,
    Bad,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    Python,
    Lua,
    Java,
    TypeScript,
    Cpp,
    Rust,
    Kotlin,
}

pub const BAD_LANGUAGES: [Language; 4] = [
    Language::JavaScript,
    Language::Python,
    Language::Lua,
    Language::Java,
];

pub const GOOD_LANGUAGES: [Language; 4] = [
    Language::TypeScript,
    Language::Cpp,
    Language::Rust,
    Language::Kotlin,
];

impl Category {
    pub fn languages(self) -> &'static [Language] {
        match self {
            Category::Good => &GOOD_LANGUAGES,
            Category::Bad => &BAD_LANGUAGES,
        }
    }
}

impl Language {
    pub const ALL: [Language; 8] = [
        Language::JavaScript,
        Language::Python,
        Language::Lua,
        Language::Java,
        Language::TypeScript,
        Language::Cpp,
        Language::Rust,
        Language::Kotlin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Lua => "lua",
            Language::Java => "java",
            Language::TypeScript => "typescript",
            Language::Cpp => "cpp",
            Language::Rust => "rust",
            Language::Kotlin => "kotlin",
        }
    }

    pub fn category(self) -> Category {
        if GOOD_LANGUAGES.contains(&self) {
            Category::Good
        } else {
            Category::Bad
        }
    }

    pub fn is_good(self) -> bool {
        self.category() == Category::Good
    }

    /// Resource path of the spinning sprite sheet, rooted at the asset dir.
    pub fn sheet_path(self) -> String {
        format!("/languages/{}-sheet.png", self.name())
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
