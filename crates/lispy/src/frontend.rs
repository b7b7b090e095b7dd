//! Parser front-end
//!
//! Turns source text into a generic parse tree: every node carries a
//! classification tag, its literal text and its children. The reader
//! consumes this tree and never looks at the grammar itself.
//!
//! ```text
//! Source → [Frontend] → ParseNode → [Reader] → Value → [Evaluator] → Value
//! ```

use std::fmt;

use pest::error::LineColLocation;
use pest::iterators::Pair;
use pest::Parser;

/// Tag of the root node.
pub const ROOT_TAG: &str = ">";

#[derive(pest_derive::Parser)]
#[grammar = "grammar.pest"]
struct LispyParser;

// ═══════════════════════════════════════════════════════════════════════
// PARSE TREE
// ═══════════════════════════════════════════════════════════════════════

/// A node of the parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNode {
    /// Classification: `>`, `number`, `symbol`, `string`, `comment`,
    /// `sexpr`, `qexpr`, `char` (punctuation) or `regex` (markers)
    pub tag: String,

    /// Literal text for leaves; empty for nodes with children
    pub contents: String,

    /// Child nodes in source order
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    /// Create a leaf node.
    pub fn leaf(tag: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            contents: contents.into(),
            children: Vec::new(),
        }
    }

    /// Create an interior node.
    pub fn branch(tag: impl Into<String>, children: Vec<ParseNode>) -> Self {
        Self {
            tag: tag.into(),
            contents: String::new(),
            children,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ERROR TYPES
// ═══════════════════════════════════════════════════════════════════════

/// Error that occurred during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Human-readable error message
    pub message: String,

    /// Optional source location
    pub location: Option<SourceLocation>,
}

impl ParseError {
    /// Create a new parse error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
        }
    }

    /// Add location information to the error.
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error: {}", self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " at {}:{}:{}", loc.file, loc.line, loc.column)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Source code location for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// File name or identifier
    pub file: String,

    /// Line number (1-indexed)
    pub line: usize,

    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location.
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PARSING
// ═══════════════════════════════════════════════════════════════════════

/// Parse a whole source text into a tree rooted at a `>` node.
///
/// `origin` names the source (a path or `<stdin>`) for error locations.
pub fn parse(source: &str, origin: &str) -> Result<ParseNode, ParseError> {
    let mut pairs = LispyParser::parse(Rule::program, source).map_err(|e| {
        let (line, column) = match e.line_col {
            LineColLocation::Pos(pos) => pos,
            LineColLocation::Span(start, _) => start,
        };
        ParseError::new(e.variant.message().into_owned())
            .with_location(SourceLocation::new(origin, line, column))
    })?;

    pairs
        .next()
        .map(build_node)
        .ok_or_else(|| ParseError::new("empty parse result"))
}

fn build_node(pair: Pair<'_, Rule>) -> ParseNode {
    let tag = match pair.as_rule() {
        Rule::program => ROOT_TAG,
        Rule::number => "number",
        Rule::symbol => "symbol",
        Rule::string => "string",
        Rule::comment => "comment",
        Rule::sexpr => "sexpr",
        Rule::qexpr => "qexpr",
        Rule::lparen | Rule::rparen | Rule::lbrace | Rule::rbrace => "char",
        // EOI and silent rules
        _ => "regex",
    };

    let children: Vec<ParseNode> = pair.clone().into_inner().map(build_node).collect();
    if children.is_empty() && !matches!(pair.as_rule(), Rule::program | Rule::sexpr | Rule::qexpr) {
        ParseNode::leaf(tag, pair.as_str())
    } else {
        ParseNode::branch(tag, children)
    }
}
