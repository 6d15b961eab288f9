//! Go-specific node classification.
//!
//! Tree-sitter exposes every node as an untyped `Node` with a string kind.
//! The scanner only cares about function declarations, so nodes are folded
//! into a two-armed sum type: declarations (with their result types already
//! extracted) and everything else.

use tree_sitter::Node;

/// A syntax node as seen by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoNode {
    /// `func` declaration, method declaration or function literal.
    FunctionDeclaration(FunctionDecl),

    /// Any other node; only traversed for its children.
    Other {
        /// Tree-sitter node kind.
        kind: &'static str,
    },
}

impl GoNode {
    /// Classify a tree-sitter node.
    pub fn classify(node: Node<'_>, source: &[u8]) -> GoNode {
        let kind = match node.kind() {
            "function_declaration" => FunctionKind::Function,
            "method_declaration" => FunctionKind::Method,
            "func_literal" => FunctionKind::Literal,
            kind => return GoNode::Other { kind },
        };

        GoNode::FunctionDeclaration(FunctionDecl::from_node(node, source, kind))
    }
}

/// Kinds of Go function declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    /// `func Name(...)`
    Function,
    /// `func (recv T) Name(...)`
    Method,
    /// Anonymous `func(...) { ... }` expression.
    Literal,
}

/// Syntactic shape of one declared result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnType {
    /// `*T`
    Pointer,
    /// Anything else, including composite types that contain pointers.
    Value,
}

impl ReturnType {
    fn of(type_node: Node<'_>) -> ReturnType {
        if type_node.kind() == "pointer_type" {
            ReturnType::Pointer
        } else {
            ReturnType::Value
        }
    }
}

/// A function declaration reduced to what the matcher inspects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    /// Declaration kind.
    pub kind: FunctionKind,

    /// Declared name; `None` for function literals.
    pub name: Option<String>,

    /// Declared results in order, one entry per result value.
    pub return_types: Vec<ReturnType>,

    /// Byte offset of the `func` keyword.
    pub offset: usize,
}

impl FunctionDecl {
    fn from_node(node: Node<'_>, source: &[u8], kind: FunctionKind) -> Self {
        let name = match kind {
            FunctionKind::Literal => None,
            FunctionKind::Function | FunctionKind::Method => node
                .child_by_field_name("name")
                .and_then(|name| name.utf8_text(source).ok())
                .map(str::to_string),
        };

        let return_types = node
            .child_by_field_name("result")
            .map(result_types)
            .unwrap_or_default();

        Self {
            kind,
            name,
            return_types,
            offset: node.start_byte(),
        }
    }
}

/// Expand a `result` field into per-value descriptors.
///
/// `func f() *T` has a bare type as its result; `func f() (a, b *T, err error)`
/// has a parameter list where one declaration may name several values.
fn result_types(result: Node<'_>) -> Vec<ReturnType> {
    if result.kind() != "parameter_list" {
        return vec![ReturnType::of(result)];
    }

    let mut types = Vec::new();
    let mut cursor = result.walk();
    for decl in result.named_children(&mut cursor) {
        if !matches!(
            decl.kind(),
            "parameter_declaration" | "variadic_parameter_declaration"
        ) {
            continue;
        }
        let Some(type_node) = decl.child_by_field_name("type") else {
            continue;
        };

        let mut names = decl.walk();
        let count = decl.children_by_field_name("name", &mut names).count().max(1);
        types.extend(std::iter::repeat(ReturnType::of(type_node)).take(count));
    }
    types
}
