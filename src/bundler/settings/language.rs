//! Source languages reported by the package manager.

use std::fmt;

/// Language a module is written in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Swift sources (`SwiftTarget`).
    #[default]
    Swift,
    /// C family sources (`ClangTarget`).
    Clang,
    /// Anything else, keyed by the package manager's own module type.
    Other(String),
}

impl Language {
    /// Maps a `module_type` value from `swift package describe --type json`.
    pub fn from_module_type(module_type: &str) -> Self {
        match module_type {
            "SwiftTarget" => Self::Swift,
            "ClangTarget" => Self::Clang,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Swift => f.write_str("swift"),
            Self::Clang => f.write_str("clang"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_module_types() {
        assert_eq!(Language::from_module_type("SwiftTarget"), Language::Swift);
        assert_eq!(Language::from_module_type("ClangTarget"), Language::Clang);
        assert_eq!(
            Language::from_module_type("BinaryTarget"),
            Language::Other("BinaryTarget".into())
        );
    }
}
