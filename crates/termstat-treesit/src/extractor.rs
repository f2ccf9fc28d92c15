use crate::IdentifierExtractor;
use crate::grammar::{grammar, identifier_kinds};
use termstat_core::{Language, TermstatError};
use tracing::trace;
use tree_sitter::{Node, Parser, Point, TreeCursor};

/// Sigils some grammars keep inside identifier nodes (`@ivar`, `#private`).
const SIGILS: &[char] = &['@', '$', '#'];

/// Finds identifiers by walking a tree-sitter syntax tree.
///
/// A file that does not parse cleanly is rejected as a whole, the same way a
/// compiler would refuse it, rather than contributing a partial vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeSitterExtractor;

impl TreeSitterExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl IdentifierExtractor for TreeSitterExtractor {
    fn extract<'c>(
        &self,
        content: &'c str,
        language: Language,
    ) -> Result<Vec<&'c str>, TermstatError> {
        let Some(grammar) = grammar(language) else {
            return Err(TermstatError::Parse(format!(
                "no grammar for language {language}"
            )));
        };

        let mut parser = Parser::new();
        parser
            .set_language(&grammar)
            .map_err(|e| TermstatError::Parse(e.to_string()))?;

        let tree = parser
            .parse(content, None)
            .ok_or_else(|| TermstatError::Parse("parser produced no tree".to_string()))?;

        let root = tree.root_node();
        if root.has_error() {
            let at = first_error(root).unwrap_or(root.start_position());
            return Err(TermstatError::Parse(format!(
                "syntax error at line {} column {}",
                at.row + 1,
                at.column + 1
            )));
        }

        let kinds = identifier_kinds(language);
        let mut identifiers = Vec::new();
        walk(&mut tree.walk(), |node| {
            if !node.is_named() || !kinds.contains(&node.kind()) {
                return;
            }
            if let Some(text) = content.get(node.byte_range()) {
                let text = text.trim_start_matches(SIGILS);
                if !text.is_empty() {
                    identifiers.push(text);
                }
            }
        });

        trace!("{} identifiers in {} source", identifiers.len(), language);
        Ok(identifiers)
    }
}

/// Pre-order traversal of the subtree at the cursor's position, that node
/// included. Siblings and ancestors of the starting node are never visited.
fn walk<'t>(cursor: &mut TreeCursor<'t>, mut visit: impl FnMut(Node<'t>)) {
    let mut depth = 0usize;
    loop {
        visit(cursor.node());
        if cursor.goto_first_child() {
            depth += 1;
            continue;
        }
        loop {
            if depth == 0 {
                return;
            }
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
            depth -= 1;
        }
    }
}

/// Position of the first error or missing node, in document order.
fn first_error(root: Node<'_>) -> Option<Point> {
    let mut found = None;
    walk(&mut root.walk(), |node| {
        if found.is_none() && (node.is_error() || node.is_missing()) {
            found = Some(node.start_position());
        }
    });
    found
}
