use gocheck_core::types::Position;
use tree_sitter::{Language, Node, Parser, Tree};

pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    /// Parse Go source into a syntax tree.
    ///
    /// tree-sitter recovers from malformed input, so the tree is rejected when
    /// it contains any ERROR or MISSING node.
    pub fn parse(&mut self, source: &str) -> Result<ParsedFile, ParseError> {
        let lang: Language = tree_sitter_go::LANGUAGE.into();
        self.parser
            .set_language(&lang)
            .map_err(|e| ParseError::Language(format!("{e}")))?;
        let tree = self
            .parser
            .parse(source.as_bytes(), None)
            .ok_or(ParseError::ParseFailed)?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(first_syntax_error(root, source.as_bytes()));
        }

        Ok(ParsedFile {
            tree,
            source: source.to_string(),
        })
    }
}

impl Default for GoParser {
    fn default() -> Self {
        Self::new()
    }
}

/// A syntactically valid Go file together with its source text.
pub struct ParsedFile {
    tree: Tree,
    source: String,
}

impl ParsedFile {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn bytes(&self) -> &[u8] {
        self.source.as_bytes()
    }

    pub fn text(&self, node: Node<'_>) -> &str {
        node_text(node, self.bytes())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("language error: {0}")]
    Language(String),
    #[error("parse failed")]
    ParseFailed,
    #[error("{position}: syntax error: {detail}")]
    Syntax { position: Position, detail: String },
}

pub fn node_text<'a>(node: Node<'_>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

pub fn position_of(node: Node<'_>) -> Position {
    let point = node.start_position();
    Position::from_zero_based(point.row, point.column)
}

/// Locate the first ERROR or MISSING node in source order.
fn first_syntax_error(root: Node<'_>, source: &[u8]) -> ParseError {
    let mut cursor = root.walk();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_missing() {
            return ParseError::Syntax {
                position: position_of(node),
                detail: format!("missing `{}`", node.kind()),
            };
        }
        if node.is_error() {
            let snippet: String = node_text(node, source)
                .lines()
                .next()
                .unwrap_or("")
                .chars()
                .take(24)
                .collect();
            return ParseError::Syntax {
                position: position_of(node),
                detail: format!("unexpected `{}`", snippet.trim()),
            };
        }
        if node.has_error() {
            let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
            stack.extend(children.into_iter().rev());
        }
    }
    ParseError::Syntax {
        position: position_of(root),
        detail: "malformed source".to_string(),
    }
}
