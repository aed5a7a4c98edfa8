use la_arena::{Arena, Idx};

use crate::ast::ast::SymbolId;

pub type ScopeId<'src> = Idx<Scope<'src>>;

/// Functions and variables live in separate namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Function,
    Variable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol<'src> {
    pub kind: SymbolKind,
    pub id: SymbolId,
    pub name: &'src str,
}

/// One lexical scope. Symbols are only ever appended, so a later entry with
/// the same name shadows an earlier one.
#[derive(Debug, Default)]
pub struct Scope<'src> {
    pub parent: Option<ScopeId<'src>>,
    pub symbols: Vec<Symbol<'src>>,
}

impl<'src> Scope<'src> {
    pub fn lookup_single(&self, name: &str, kind: SymbolKind) -> Option<SymbolId> {
        self.symbols
            .iter()
            .rev()
            .find(|symbol| symbol.kind == kind && symbol.name == name)
            .map(|symbol| symbol.id)
    }
}

/// Every scope of one translation unit. Dropped as a whole once names are
/// resolved.
#[derive(Debug, Default)]
pub struct ScopeTree<'src> {
    scopes: Arena<Scope<'src>>,
}

impl<'src> ScopeTree<'src> {
    pub fn new() -> Self {
        ScopeTree {
            scopes: Arena::new(),
        }
    }

    pub fn root(&mut self) -> ScopeId<'src> {
        self.scopes.alloc(Scope::default())
    }

    /// Creates an empty scope whose lookups fall back to `parent`.
    pub fn fork(&mut self, parent: ScopeId<'src>) -> ScopeId<'src> {
        self.scopes.alloc(Scope {
            parent: Some(parent),
            symbols: Vec::new(),
        })
    }

    pub fn insert(&mut self, scope: ScopeId<'src>, symbol: Symbol<'src>) {
        self.scopes[scope].symbols.push(symbol);
    }

    /// Looks in `scope` only.
    pub fn lookup_single(
        &self,
        scope: ScopeId<'src>,
        name: &str,
        kind: SymbolKind,
    ) -> Option<SymbolId> {
        self.scopes[scope].lookup_single(name, kind)
    }

    /// Looks in `scope`, then in each enclosing scope.
    pub fn lookup(&self, scope: ScopeId<'src>, name: &str, kind: SymbolKind) -> Option<SymbolId> {
        let mut current = Some(scope);

        while let Some(id) = current {
            let scope = &self.scopes[id];
            if let Some(symbol) = scope.lookup_single(name, kind) {
                return Some(symbol);
            }
            current = scope.parent;
        }

        None
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}
