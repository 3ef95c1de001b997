//! Language alias resolution for fence info strings.
//!
//! Maps user-facing aliases (`js`, `py`, `shell`, …) to a canonical language
//! name plus the file extension shown in the rendered block's CSS classes.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Canonical language metadata for a resolved alias.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LanguageEntry {
    /// Canonical display name (`JavaScript`, `C#`, …).
    pub name: &'static str,
    /// File extension used for the `ext-*` wrapper class.
    pub ext: &'static str,
}

/// Sentinel entry for unknown languages.
pub const PLAIN_TEXT: LanguageEntry = LanguageEntry { name: "text", ext: "" };

/// Fixed language table: canonical name, extension, aliases.
const LANGUAGES: &[(&str, &str, &[&str])] = &[
    ("Bash", "sh", &["bash", "sh", "zsh", "shell"]),
    ("Batchfile", "bat", &["batch", "bat", "cmd"]),
    ("C", "c", &["c"]),
    ("C#", "cs", &["csharp", "c#", "cs"]),
    ("C++", "cpp", &["cpp", "c++"]),
    ("CSS", "css", &["css"]),
    ("Diff", "diff", &["diff"]),
    ("Docker", "docker", &["docker", "dockerfile"]),
    ("Fish", "fish", &["fish", "fishshell"]),
    ("Go", "go", &["go", "golang"]),
    ("HTML", "html", &["html"]),
    ("Java", "java", &["java"]),
    ("JavaScript", "js", &["javascript", "js"]),
    ("JSON", "json", &["json"]),
    ("Kotlin", "kt", &["kotlin", "kt"]),
    ("Lua", "lua", &["lua"]),
    ("Makefile", "Makefile", &["make", "makefile"]),
    ("Markdown", "md", &["markdown", "md"]),
    ("PHP", "php", &["php"]),
    ("PowerShell", "pwsh", &["powershell", "pwsh", "posh", "ps1"]),
    ("Python", "py", &["python", "py"]),
    ("Python Traceback", "py", &["pytb", "py3tb"]),
    ("Ruby", "ruby", &["ruby", "rb"]),
    ("Rust", "rust", &["rust", "rs"]),
    ("Sass", "sass", &["sass"]),
    ("SCSS", "scss", &["scss"]),
    ("TOML", "toml", &["toml"]),
    ("TypeScript", "ts", &["typescript", "ts"]),
    ("XML", "xml", &["xml"]),
    ("YAML", "yaml", &["yaml", "yml"]),
];

/// Alias lookup table, flattened from [`LANGUAGES`] once at first use.
static ALIASES: LazyLock<HashMap<&'static str, LanguageEntry>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    for (name, ext, aliases) in LANGUAGES {
        for alias in *aliases {
            table.insert(*alias, LanguageEntry { name, ext });
        }
    }
    table
});

/// Leading language tag of an info string: everything up to the first
/// space, `:`, `[` or `{`.
static LANG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^ :\[{]+)").expect("language tag pattern"));

/// Resolve the language tag of a fence info string.
///
/// The tag is looked up as written — the table itself encodes the accepted
/// (lowercase) aliases. Unknown tags and tagless info strings resolve to
/// the [`PLAIN_TEXT`] sentinel.
pub fn resolve_language(info: &str) -> LanguageEntry {
    LANG_TAG
        .captures(info)
        .and_then(|captures| captures.get(1))
        .and_then(|tag| ALIASES.get(tag.as_str()).copied())
        .unwrap_or(PLAIN_TEXT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_and_full_name_resolve_identically() {
        assert_eq!(resolve_language("js"), resolve_language("javascript"));
        assert_eq!(resolve_language("js").name, "JavaScript");
        assert_eq!(resolve_language("js").ext, "js");
    }

    #[test]
    fn test_unknown_language_is_text_sentinel() {
        assert_eq!(resolve_language("nonexistent-lang"), PLAIN_TEXT);
        assert_eq!(resolve_language("nonexistent-lang").name, "text");
        assert_eq!(resolve_language("nonexistent-lang").ext, "");
    }

    #[test]
    fn test_empty_info_is_text_sentinel() {
        assert_eq!(resolve_language(""), PLAIN_TEXT);
    }

    #[test]
    fn test_tag_stops_at_modifiers_and_ranges() {
        assert_eq!(resolve_language("js{1,3-5}").name, "JavaScript");
        assert_eq!(resolve_language("rust:no-line-numbers").name, "Rust");
        assert_eq!(resolve_language("py title").name, "Python");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // The table only encodes lowercase aliases; `JS` is not one of them.
        assert_eq!(resolve_language("JS"), PLAIN_TEXT);
    }

    #[test]
    fn test_shell_aliases() {
        assert_eq!(resolve_language("zsh").name, "Bash");
        assert_eq!(resolve_language("shell").ext, "sh");
    }
}
