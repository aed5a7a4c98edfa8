use std::fmt::Display;

use la_arena::Arena;

use crate::Position;

use super::expressions::{Expr, ExprId};

/// Types of the language. There are no user defined types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Unit,
    Int,
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Unit => write!(f, "Unit"),
            Type::Int => write!(f, "Int"),
        }
    }
}

/// A type written out in the source, with the position of the type keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeAnnotation {
    pub ty: Type,
    pub position: Position,
}

/// Identifies one declaration (function, parameter or variable) once names
/// have been resolved. `SymbolId::UNRESOLVED` marks a name the namer has not
/// visited yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SymbolId(pub u32);

impl SymbolId {
    pub const UNRESOLVED: SymbolId = SymbolId(0);

    pub fn is_resolved(self) -> bool {
        self != Self::UNRESOLVED
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter<'src> {
    pub name: &'src str,
    pub symbol: SymbolId,
    pub mutable: bool,
    pub type_annotation: TypeAnnotation,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function<'src> {
    pub name: &'src str,
    pub symbol: SymbolId,
    pub parameters: Box<[Parameter<'src>]>,
    /// `None` when the declaration has no `: <type>`; such functions return `Unit`.
    pub return_type: Option<TypeAnnotation>,
    pub body: ExprId<'src>,
    pub position: Position,
}

impl Function<'_> {
    pub fn declared_return_type(&self) -> Type {
        self.return_type
            .map_or(Type::Unit, |annotation| annotation.ty)
    }
}

/// One translation unit. Every expression lives in `exprs` and is released
/// together with the program; names borrow from the source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program<'src> {
    pub functions: Vec<Function<'src>>,
    pub exprs: Arena<Expr<'src>>,
}

impl<'src> Program<'src> {
    pub fn expr(&self, id: ExprId<'src>) -> &Expr<'src> {
        &self.exprs[id]
    }

    pub fn expr_mut(&mut self, id: ExprId<'src>) -> &mut Expr<'src> {
        &mut self.exprs[id]
    }

    pub fn function(&self, name: &str) -> Option<&Function<'src>> {
        self.functions.iter().find(|function| function.name == name)
    }
}
