//! Static language catalog
//!
//! Maps a judge-service language id to its display name, a starter program,
//! and the syntax mode the editor highlights it with. The catalog is built once
//! at start-up and is read-only afterwards.

use rustc_hash::FxHashMap;
use std::fmt;

/// Language code understood by the remote judge service
pub type LanguageId = u32;

/// Language selected when nothing else is configured (Python 3)
pub const DEFAULT_LANGUAGE: LanguageId = 71;

/// Syntax highlighting mode for the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorMode {
    Python,
    JavaScript,
    Cpp,
    Java,
    C,
    Php,
    Ruby,
    Rust,
    Go,
    PlainText,
}

impl EditorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            EditorMode::Python => "python",
            EditorMode::JavaScript => "javascript",
            EditorMode::Cpp => "cpp",
            EditorMode::Java => "java",
            EditorMode::C => "c",
            EditorMode::Php => "php",
            EditorMode::Ruby => "ruby",
            EditorMode::Rust => "rust",
            EditorMode::Go => "go",
            EditorMode::PlainText => "plaintext",
        }
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    pub id: LanguageId,
    pub display_name: String,
    pub sample_code: String,
    pub editor_mode: EditorMode,
}

/// Languages offered by the selector, in display order
const BUILTIN_LANGUAGES: &[(LanguageId, &str)] = &[
    (71, "Python 3"),
    (63, "JavaScript Node"),
    (54, "C++ (GCC)"),
    (62, "Java (OpenJDK)"),
    (50, "C (GCC)"),
    (68, "PHP"),
    (72, "Ruby"),
    (73, "Rust"),
    (60, "Go"),
    (74, "TypeScript"),
];

const BUILTIN_SAMPLES: &[(LanguageId, &str)] = &[
    (71, "print(\"Hello, Judge0!\")"),
    (63, "console.log(\"Hello, Judge0!\");"),
    (
        54,
        "#include <iostream>\nint main(){ std::cout<<\"Hello C++!\"; return 0; }",
    ),
    (
        62,
        "class Main{ public static void main(String[] a){ System.out.println(\"Hello Java!\"); } }",
    ),
    (
        50,
        "#include <stdio.h>\nint main(){ printf(\"Hello C!\"); return 0; }",
    ),
    (68, "<?php echo \"Hello PHP!\"; ?>"),
    (72, "puts \"Hello Ruby!\""),
    (73, "fn main(){ println!(\"Hello Rust!\"); }"),
    (
        60,
        "package main\nimport \"fmt\"\nfunc main(){ fmt.Println(\"Hello Go!\") }",
    ),
    (74, "console.log(\"Hello TypeScript (compiled)\");"),
];

/// Default id → editor mode classification.
///
/// TypeScript (74) shares the JavaScript mode for highlighting; its execution
/// id is unaffected.
pub fn classify_mode(id: LanguageId) -> EditorMode {
    match id {
        71 => EditorMode::Python,
        63 | 74 => EditorMode::JavaScript,
        54 => EditorMode::Cpp,
        62 => EditorMode::Java,
        50 => EditorMode::C,
        68 => EditorMode::Php,
        72 => EditorMode::Ruby,
        73 => EditorMode::Rust,
        60 => EditorMode::Go,
        _ => EditorMode::PlainText,
    }
}

/// Read-only lookup table of languages
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    entries: Vec<LanguageEntry>,
    index: FxHashMap<LanguageId, usize>,
}

impl LanguageCatalog {
    /// Build a catalog from `(id, display name)` pairs, a sample table and a
    /// mode classifier. Languages without a sample get an empty one; a repeated
    /// id keeps its first entry.
    pub fn new<F>(
        languages: &[(LanguageId, &str)],
        samples: &[(LanguageId, &str)],
        classify: F,
    ) -> Self
    where
        F: Fn(LanguageId) -> EditorMode,
    {
        let samples: FxHashMap<LanguageId, &str> = samples.iter().copied().collect();

        let mut entries = Vec::with_capacity(languages.len());
        let mut index = FxHashMap::default();

        for &(id, name) in languages {
            if index.contains_key(&id) {
                continue;
            }
            index.insert(id, entries.len());
            entries.push(LanguageEntry {
                id,
                display_name: name.to_string(),
                sample_code: samples.get(&id).copied().unwrap_or_default().to_string(),
                editor_mode: classify(id),
            });
        }

        LanguageCatalog { entries, index }
    }

    /// The ten languages of the stock judge deployment
    pub fn builtin() -> Self {
        Self::new(BUILTIN_LANGUAGES, BUILTIN_SAMPLES, classify_mode)
    }

    pub fn list_entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: LanguageId) -> Option<&LanguageEntry> {
        self.index.get(&id).map(|&i| &self.entries[i])
    }

    /// Position of `id` in display order
    pub fn position(&self, id: LanguageId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Starter program for `id`, or `""` when the id is unknown
    pub fn sample_for(&self, id: LanguageId) -> &str {
        self.get(id).map(|e| e.sample_code.as_str()).unwrap_or("")
    }

    /// Editor mode for `id`, falling back to plain text
    pub fn mode_for(&self, id: LanguageId) -> EditorMode {
        self.get(id)
            .map(|e| e.editor_mode)
            .unwrap_or(EditorMode::PlainText)
    }

    /// Id of the entry after `id`, wrapping around
    pub fn next_id(&self, id: LanguageId) -> Option<LanguageId> {
        let len = self.entries.len();
        if len == 0 {
            return None;
        }
        let next = self.position(id).map(|i| (i + 1) % len).unwrap_or(0);
        Some(self.entries[next].id)
    }

    /// Id of the entry before `id`, wrapping around
    pub fn prev_id(&self, id: LanguageId) -> Option<LanguageId> {
        let len = self.entries.len();
        if len == 0 {
            return None;
        }
        let prev = self
            .position(id)
            .map(|i| (i + len - 1) % len)
            .unwrap_or(len - 1);
        Some(self.entries[prev].id)
    }
}
