use tree_sitter::{Parser as TsParser, Tree};

/// Outcome of parsing one file's contents
#[derive(Debug)]
pub struct ParseAttempt {
    /// The (possibly partial) syntax tree
    pub tree: Tree,

    /// Whether the tree is free of syntax errors
    pub clean: bool,
}

/// Syntax parser shared by every file in a run.
///
/// All four extensions go through the TSX dialect, which accepts typed and
/// markup syntax uniformly; the plain JavaScript grammar is a second attempt
/// for the rare constructs the TSX dialect rejects.
pub struct SourceParser {
    tsx: TsParser,
    js: TsParser,
}

impl SourceParser {
    pub fn new() -> Self {
        let mut tsx = TsParser::new();
        tsx.set_language(&tree_sitter_typescript::LANGUAGE_TSX.into())
            .expect("Failed to load TSX grammar");

        let mut js = TsParser::new();
        js.set_language(&tree_sitter_javascript::LANGUAGE.into())
            .expect("Failed to load JavaScript grammar");

        Self { tsx, js }
    }

    /// Parse file contents, preferring a clean tree from either grammar.
    ///
    /// Returns None only when tree-sitter produces no tree at all.
    pub fn parse(&mut self, contents: &str) -> Option<ParseAttempt> {
        if let Some(tree) = self.tsx.parse(contents, None) {
            if !tree.root_node().has_error() {
                return Some(ParseAttempt { tree, clean: true });
            }

            if let Some(js_tree) = self.js.parse(contents, None) {
                if !js_tree.root_node().has_error() {
                    return Some(ParseAttempt {
                        tree: js_tree,
                        clean: true,
                    });
                }
            }

            return Some(ParseAttempt { tree, clean: false });
        }

        self.js.parse(contents, None).map(|tree| ParseAttempt {
            clean: !tree.root_node().has_error(),
            tree,
        })
    }
}

impl Default for SourceParser {
    fn default() -> Self {
        Self::new()
    }
}
