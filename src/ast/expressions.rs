use la_arena::Idx;

use crate::Position;

use super::ast::{SymbolId, Type, TypeAnnotation};

pub type ExprId<'src> = Idx<Expr<'src>>;

/// An expression node. `inferred_type` stays `None` until the type checker
/// has visited the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr<'src> {
    pub kind: ExprKind<'src>,
    pub position: Position,
    pub inferred_type: Option<Type>,
}

impl<'src> Expr<'src> {
    pub fn new(kind: ExprKind<'src>, position: Position) -> Self {
        Expr {
            kind,
            position,
            inferred_type: None,
        }
    }

    /// The `index`th argument of a call or item of a block.
    pub fn child(&self, index: usize) -> Option<ExprId<'src>> {
        match &self.kind {
            ExprKind::FunctionCall(call) => call.arguments.get(index).copied(),
            ExprKind::Block(block) => block.items.get(index).copied(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind<'src> {
    Unit,
    Integer(i32),
    Variable(Variable<'src>),
    BinaryOp(BinaryOp<'src>),
    FunctionCall(FunctionCall<'src>),
    VariableDefinition(VariableDefinition<'src>),
    Block(Block<'src>),
}

/// A use of a variable or parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable<'src> {
    pub name: &'src str,
    pub symbol: SymbolId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOpKind {
    Assign,
    Add,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryOp<'src> {
    pub kind: BinaryOpKind,
    pub lhs: ExprId<'src>,
    pub rhs: ExprId<'src>,
}

/// `f(a, b)`, or `a.f(b)` which is the same call with `a` as first argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall<'src> {
    pub function: &'src str,
    pub symbol: SymbolId,
    pub arguments: Box<[ExprId<'src>]>,
}

/// `val <name>: [<type>] = <value>` or the `var` equivalent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDefinition<'src> {
    pub name: &'src str,
    pub symbol: SymbolId,
    pub mutable: bool,
    pub type_annotation: Option<TypeAnnotation>,
    pub value: ExprId<'src>,
}

/// A sequence of expressions; never empty (`{}` holds a single `Unit`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'src> {
    pub items: Box<[ExprId<'src>]>,
}

impl<'src> Block<'src> {
    pub fn last(&self) -> ExprId<'src> {
        self.items[self.items.len() - 1]
    }
}
