// Parser types - some fields reserved for future use
#![allow(dead_code)]

mod common;
mod fallback;
mod imports;
mod source;
mod symbols;
mod usage;

pub use fallback::scan_imports_fallback;
pub use imports::collect_imports;
pub use source::{ParseAttempt, SourceParser};
pub use symbols::collect_declarations;
pub use usage::collect_usages;

use std::path::PathBuf;

/// A raw import specifier literal found in a file, before resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImport {
    /// The literal token, e.g. `./util/helper`, `@/components/Button`, `react`
    pub specifier: String,

    /// Line number (1-indexed)
    pub line: usize,
}

/// Kind of named declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// `function foo() {}`
    Function,

    /// `const foo = () => {}` / `let foo = function () {}`
    Binding,

    /// Class method definition
    Method,
}

impl DeclarationKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            DeclarationKind::Function => "function",
            DeclarationKind::Binding => "function binding",
            DeclarationKind::Method => "method",
        }
    }
}

/// A named declaration, keyed by (name, owning file).
///
/// Two files may declare the same name; those are distinct declarations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    pub name: String,
    pub file: PathBuf,
    pub kind: DeclarationKind,
    pub line: usize,
}

/// Context in which an identifier was seen used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsageContext {
    /// Callee of a direct call: `foo()`
    Call,

    /// Final property of a member-call callee: `api.client.fetchUser()`
    MemberCall,

    /// Identifier inside a markup tag or attribute position: `<Button on={x}>`
    MarkupTag,

    /// Rebound name in a named (re-)export list: `export { foo as bar }`
    ExportRebind,
}

/// Evidence that an identifier was used somewhere in the corpus.
///
/// Aggregated by name only, not scoped to the occurring file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UsageEvent {
    pub name: String,
    pub context: UsageContext,
    pub line: usize,
}
