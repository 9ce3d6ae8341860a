//! Language registry.
//!
//! Maps the identifiers people put after a code fence (`py`, `golang`,
//! `c++`) to grammars in a syntect [`SyntaxSet`]. Every grammar is
//! reachable by its own name and its file extensions; a curated alias
//! table covers the common spellings on top of that. Lookup is a single
//! map probe. Anything not in the map falls back to plain text.

use std::collections::HashMap;
use syntect::parsing::{SyntaxReference, SyntaxSet};

/// Curated aliases, grouped by the syntect syntax name they resolve to.
///
/// Entries whose syntax is missing from the loaded set are skipped.
pub const LANGUAGE_ALIASES: &[(&str, &[&str])] = &[
    ("Python", &["python", "py", "python3", "py3", "gyp"]),
    ("JavaScript", &["javascript", "js", "node", "nodejs", "mjs", "cjs"]),
    ("JavaScript (Babel)", &["jsx"]),
    ("TypeScript", &["typescript", "ts", "tsx"]),
    ("Rust", &["rust", "rs"]),
    ("Bourne Again Shell (bash)", &["bash", "sh", "shell", "zsh", "console", "shellscript"]),
    ("C", &["c", "h"]),
    ("C++", &["cpp", "c++", "cxx", "cc", "hpp", "hxx"]),
    ("C#", &["csharp", "cs", "c#"]),
    ("Go", &["go", "golang"]),
    ("Java", &["java"]),
    ("Ruby", &["ruby", "rb"]),
    ("PHP", &["php"]),
    ("Perl", &["perl", "pl"]),
    ("Lua", &["lua"]),
    ("R", &["r"]),
    ("Scala", &["scala"]),
    ("Haskell", &["haskell", "hs"]),
    ("OCaml", &["ocaml", "ml"]),
    ("Erlang", &["erlang", "erl"]),
    ("Clojure", &["clojure", "clj"]),
    ("SQL", &["sql", "mysql", "postgresql", "postgres", "sqlite"]),
    ("HTML", &["html", "htm", "xhtml"]),
    ("CSS", &["css"]),
    ("JSON", &["json", "jsonc"]),
    ("YAML", &["yaml", "yml"]),
    ("TOML", &["toml"]),
    ("XML", &["xml", "xsl", "xslt", "svg"]),
    ("Markdown", &["markdown", "md", "mdown"]),
    ("LaTeX", &["latex"]),
    ("TeX", &["tex"]),
    ("Makefile", &["makefile", "make", "mk"]),
    ("Dockerfile", &["dockerfile", "docker"]),
    ("Diff", &["diff", "patch"]),
    ("Git Commit", &["gitcommit"]),
    ("Git Ignore", &["gitignore"]),
    ("Lisp", &["lisp", "elisp", "emacs-lisp", "commonlisp"]),
    ("Objective-C", &["objc", "objective-c", "objectivec"]),
    ("Objective-C++", &["objcpp", "objective-c++"]),
    ("Pascal", &["pascal", "delphi"]),
    ("Groovy", &["groovy", "gradle"]),
    ("Batch File", &["batch", "bat", "cmd"]),
    ("Regular Expression", &["regex", "regexp"]),
    ("AppleScript", &["applescript"]),
    ("ActionScript", &["actionscript"]),
    ("D", &["d", "dlang"]),
    ("Graphviz (DOT)", &["dot", "graphviz"]),
    ("MATLAB", &["matlab"]),
    ("reStructuredText", &["rst", "restructuredtext"]),
    ("Textile", &["textile"]),
    ("Tcl", &["tcl"]),
    ("Plain Text", &["text", "txt", "plain", "plaintext"]),
];

/// Registry from lowercase language identifier to grammar.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    /// Identifier → index into `SyntaxSet::syntaxes()`
    index: HashMap<String, usize>,
}

impl LanguageRegistry {
    /// Build the registry for a syntax set.
    ///
    /// Priority, highest first: curated aliases, syntax names, file extensions.
    pub fn build(syntax_set: &SyntaxSet) -> Self {
        let syntaxes = syntax_set.syntaxes();
        let mut index = HashMap::new();

        for (i, syntax) in syntaxes.iter().enumerate() {
            for ext in &syntax.file_extensions {
                index.entry(ext.to_lowercase()).or_insert(i);
            }
        }

        for (i, syntax) in syntaxes.iter().enumerate() {
            index.insert(syntax.name.to_lowercase(), i);
        }

        for (name, aliases) in LANGUAGE_ALIASES {
            let Some(i) = syntaxes.iter().position(|s| s.name == *name) else {
                continue;
            };
            for alias in *aliases {
                index.insert((*alias).to_string(), i);
            }
        }

        Self { index }
    }

    /// Look up a language identifier (case-insensitive).
    ///
    /// Returns the index of the grammar in the syntax set it was built from.
    pub fn lookup(&self, language: &str) -> Option<usize> {
        let language = language.trim();
        if language.is_empty() {
            return None;
        }
        self.index.get(&language.to_lowercase()).copied()
    }

    /// Resolve a language identifier to a grammar of `syntax_set`.
    pub fn resolve<'s>(&self, syntax_set: &'s SyntaxSet, language: &str) -> Option<&'s SyntaxReference> {
        self.lookup(language)
            .and_then(|i| syntax_set.syntaxes().get(i))
    }

    /// Number of identifiers known to the registry.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// All identifiers that resolve to the grammar at `syntax_index`, sorted.
    pub fn identifiers_for(&self, syntax_index: usize) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .index
            .iter()
            .filter(|(_, &i)| i == syntax_index)
            .map(|(id, _)| id.as_str())
            .collect();
        ids.sort_unstable();
        ids
    }
}
