//! Syntax tree traversal and the pointer-return matcher.
//!
//! [`Visitor`] walks a parsed file depth-first in pre-order and lazily
//! yields a [`Match`] for every function declaration whose results include
//! a pointer. Declarations nested inside other declarations (function
//! literals) are checked by the same rule.

use crate::syntax::{FunctionDecl, FunctionKind, GoNode, ParsedFile, Position, ReturnType};
use tree_sitter::Node;

/// Enclosing name used for function literals outside any named declaration.
const GLOBAL_SCOPE: &str = "glob";

/// A function declaration that returns at least one pointer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Match {
    /// Position of the `func` keyword.
    pub position: Position,
    /// Function name; closures are named `<enclosing>.func<N>`.
    pub function_name: String,
}

/// Whether a declaration returns a pointer.
///
/// True iff at least one declared result is syntactically `*T`. A function
/// without results never matches.
pub fn returns_pointer(decl: &FunctionDecl) -> bool {
    decl.return_types.contains(&ReturnType::Pointer)
}

struct Frame<'t> {
    node: Node<'t>,
    scope: usize,
}

/// Naming scope opened by each declaration, used to number closures.
struct Scope {
    name: String,
    literal: bool,
    closures: usize,
}

/// Lazy pre-order traversal producing matches in source order.
pub struct Visitor<'t> {
    file: &'t ParsedFile,
    stack: Vec<Frame<'t>>,
    scopes: Vec<Scope>,
}

impl<'t> Visitor<'t> {
    /// Start a traversal at the root of `file`.
    pub fn new(file: &'t ParsedFile) -> Self {
        Self {
            file,
            stack: vec![Frame {
                node: file.root(),
                scope: 0,
            }],
            scopes: vec![Scope {
                name: GLOBAL_SCOPE.to_string(),
                literal: false,
                closures: 0,
            }],
        }
    }

    /// Go toolchain naming: `F.func1` for a closure in `F`, `F.func1.1`
    /// for a closure inside that closure.
    fn closure_name(&mut self, scope: usize) -> String {
        let parent = &mut self.scopes[scope];
        parent.closures += 1;
        if parent.literal {
            format!("{}.{}", parent.name, parent.closures)
        } else {
            format!("{}.func{}", parent.name, parent.closures)
        }
    }

    fn open_scope(&mut self, name: String, literal: bool) -> usize {
        self.scopes.push(Scope {
            name,
            literal,
            closures: 0,
        });
        self.scopes.len() - 1
    }

    /// Push children so that the leftmost child is popped first.
    fn push_children(&mut self, node: Node<'t>, scope: usize) {
        let start = self.stack.len();
        let mut cursor = node.walk();
        self.stack
            .extend(node.children(&mut cursor).map(|child| Frame { node: child, scope }));
        self.stack[start..].reverse();
    }
}

impl Iterator for Visitor<'_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        while let Some(Frame { node, scope }) = self.stack.pop() {
            match GoNode::classify(node, self.file.source()) {
                GoNode::FunctionDeclaration(decl) => {
                    let name = match &decl.name {
                        Some(name) => name.clone(),
                        None => self.closure_name(scope),
                    };

                    let found = returns_pointer(&decl).then(|| Match {
                        position: self.file.resolve(decl.offset),
                        function_name: name.clone(),
                    });

                    let inner = self.open_scope(name, decl.kind == FunctionKind::Literal);
                    self.push_children(node, inner);

                    if found.is_some() {
                        return found;
                    }
                }
                GoNode::Other { .. } => self.push_children(node, scope),
            }
        }
        None
    }
}
