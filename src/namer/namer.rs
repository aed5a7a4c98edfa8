//! Name resolution.
//!
//! Walks a parsed `Program` and gives every declaration (function, parameter,
//! variable definition) a fresh `SymbolId`. Every use of a name is then
//! rewritten to carry the id of the declaration it refers to.
//!
//! Scopes are nested as follows:
//!
//! - one global scope holding every function, filled before any body is
//!   visited so that functions may call functions declared after them
//! - per function, a parameter scope forked from the global scope and a body
//!   scope forked from the parameter scope
//! - per block, one child scope shared by all expressions of the block

use tracing::trace;

use crate::{
    ast::{
        ast::{Program, SymbolId},
        expressions::{ExprId, ExprKind},
    },
    errors::errors::{Error, NameError},
    MK_ERROR,
};

use super::scope::{ScopeId, ScopeTree, Symbol, SymbolKind};

/// Number of entries a table indexed by `SymbolId` needs, i.e. the first id
/// that was not handed out. Id 0 is never handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolCount(pub u32);

impl SymbolCount {
    pub fn table_size(self) -> usize {
        self.0 as usize
    }
}

pub struct Namer<'src> {
    scopes: ScopeTree<'src>,
    next_symbol: u32,
}

impl<'src> Namer<'src> {
    pub fn new() -> Self {
        Namer {
            scopes: ScopeTree::new(),
            next_symbol: SymbolId::UNRESOLVED.0 + 1,
        }
    }

    pub fn symbol_count(&self) -> SymbolCount {
        SymbolCount(self.next_symbol)
    }

    /// Declares `name` in `scope` under a new id.
    fn bind(&mut self, scope: ScopeId<'src>, name: &'src str, kind: SymbolKind) -> SymbolId {
        let id = SymbolId(self.next_symbol);
        self.next_symbol += 1;

        self.scopes.insert(scope, Symbol { kind, id, name });
        trace!(name, symbol = %id, ?kind, "bound symbol");

        id
    }

    pub fn resolve_program(&mut self, program: &mut Program<'src>) -> Result<(), Error> {
        let global = self.scopes.root();

        for function in program.functions.iter_mut() {
            if self
                .scopes
                .lookup_single(global, function.name, SymbolKind::Function)
                .is_some()
            {
                return Err(MK_ERROR!(
                    NameError::FunctionAlreadyDeclared {
                        function: function.name.to_string()
                    },
                    function.position
                ));
            }

            function.symbol = self.bind(global, function.name, SymbolKind::Function);
        }

        for index in 0..program.functions.len() {
            let parameter_scope = self.scopes.fork(global);

            for parameter in program.functions[index].parameters.iter_mut() {
                if self
                    .scopes
                    .lookup_single(parameter_scope, parameter.name, SymbolKind::Variable)
                    .is_some()
                {
                    return Err(MK_ERROR!(
                        NameError::ParameterAlreadyDeclared {
                            parameter: parameter.name.to_string()
                        },
                        parameter.position
                    ));
                }

                parameter.symbol = self.bind(parameter_scope, parameter.name, SymbolKind::Variable);
            }

            let body_scope = self.scopes.fork(parameter_scope);
            let body = program.functions[index].body;
            self.resolve_expr(program, body_scope, body)?;

            trace!(
                function = program.functions[index].name,
                scopes = self.scopes.len(),
                "resolved function"
            );
        }

        Ok(())
    }

    fn resolve_expr(
        &mut self,
        program: &mut Program<'src>,
        scope: ScopeId<'src>,
        id: ExprId<'src>,
    ) -> Result<(), Error> {
        let position = program.expr(id).position;

        match &program.expr(id).kind {
            ExprKind::Unit | ExprKind::Integer(_) => {}
            ExprKind::Variable(variable) => {
                let name = variable.name;
                let Some(symbol) = self.scopes.lookup(scope, name, SymbolKind::Variable) else {
                    return Err(MK_ERROR!(
                        NameError::VariableNotDeclared {
                            variable: name.to_string()
                        },
                        position
                    ));
                };

                if let ExprKind::Variable(variable) = &mut program.expr_mut(id).kind {
                    variable.symbol = symbol;
                }
            }
            ExprKind::BinaryOp(_) => self.resolve_binary_chain(program, scope, id)?,
            ExprKind::FunctionCall(call) => {
                let function = call.function;
                let Some(symbol) = self.scopes.lookup(scope, function, SymbolKind::Function)
                else {
                    return Err(MK_ERROR!(
                        NameError::FunctionNotDeclared {
                            function: function.to_string()
                        },
                        position
                    ));
                };

                if let ExprKind::FunctionCall(call) = &mut program.expr_mut(id).kind {
                    call.symbol = symbol;
                }

                self.resolve_children(program, scope, id)?;
            }
            ExprKind::VariableDefinition(definition) => {
                let (name, value) = (definition.name, definition.value);

                // `val x: Int = x + 1` reads the outer `x`
                self.resolve_expr(program, scope, value)?;

                let symbol = self.bind(scope, name, SymbolKind::Variable);
                if let ExprKind::VariableDefinition(definition) = &mut program.expr_mut(id).kind {
                    definition.symbol = symbol;
                }
            }
            ExprKind::Block(_) => {
                let block_scope = self.scopes.fork(scope);
                self.resolve_children(program, block_scope, id)?;
            }
        }

        Ok(())
    }

    /// Resolves the arguments of a call or the items of a block, in order.
    fn resolve_children(
        &mut self,
        program: &mut Program<'src>,
        scope: ScopeId<'src>,
        id: ExprId<'src>,
    ) -> Result<(), Error> {
        let mut index = 0;
        while let Some(child) = program.expr(id).child(index) {
            self.resolve_expr(program, scope, child)?;
            index += 1;
        }

        Ok(())
    }

    /// `a + b + c` nests to the left, so the chain is walked in a loop rather
    /// than one call per operator. Operands are still visited left to right.
    fn resolve_binary_chain(
        &mut self,
        program: &mut Program<'src>,
        scope: ScopeId<'src>,
        id: ExprId<'src>,
    ) -> Result<(), Error> {
        let mut right_operands = vec![];
        let mut current = id;

        while let ExprKind::BinaryOp(binary) = &program.expr(current).kind {
            right_operands.push(binary.rhs);
            current = binary.lhs;
        }

        self.resolve_expr(program, scope, current)?;

        for operand in right_operands.into_iter().rev() {
            self.resolve_expr(program, scope, operand)?;
        }

        Ok(())
    }
}

impl Default for Namer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves every name in `program`, stopping at the first unbound or
/// duplicate name.
///
/// # Returns
///
/// The number of symbols handed out plus one, suitable for sizing a table
/// indexed by `SymbolId`.
pub fn resolve_names(program: &mut Program) -> Result<SymbolCount, Error> {
    let mut namer = Namer::new();
    namer.resolve_program(program)?;

    Ok(namer.symbol_count())
}
