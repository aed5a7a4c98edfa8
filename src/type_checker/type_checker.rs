use tracing::trace;

use crate::{
    ast::{
        ast::{Function, Program, SymbolId, Type},
        expressions::{BinaryOpKind, ExprId, ExprKind},
    },
    errors::errors::{Error, TypeError},
    namer::namer::SymbolCount,
    Position, MK_ERROR,
};

/// What is known about one symbol. Functions additionally carry the types of
/// their parameters; `ty` is then the return type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lookup {
    pub ty: Option<Type>,
    pub parameters: Option<Box<[Type]>>,
}

/// Per-symbol type table, indexed by `SymbolId`.
#[derive(Debug)]
pub struct TypeChecker {
    lookups: Vec<Lookup>,
}

impl TypeChecker {
    pub fn new(symbol_count: SymbolCount) -> Self {
        TypeChecker {
            lookups: vec![Lookup::default(); symbol_count.table_size()],
        }
    }

    pub fn get_lookup(&self, symbol: SymbolId) -> Option<&Lookup> {
        if !symbol.is_resolved() {
            return None;
        }

        self.lookups.get(symbol.index())
    }

    fn lookup_mut(&mut self, symbol: SymbolId) -> Option<&mut Lookup> {
        if !symbol.is_resolved() {
            return None;
        }

        if symbol.index() >= self.lookups.len() {
            self.lookups.resize_with(symbol.index() + 1, Lookup::default);
        }

        self.lookups.get_mut(symbol.index())
    }

    fn record(&mut self, symbol: SymbolId, ty: Type) {
        if let Some(lookup) = self.lookup_mut(symbol) {
            lookup.ty = Some(ty);
        }
    }

    /// Records the prototype of `function` and the types of its parameters.
    pub fn declare_function(&mut self, function: &Function) {
        let parameters: Box<[Type]> = function
            .parameters
            .iter()
            .map(|parameter| parameter.type_annotation.ty)
            .collect();

        for parameter in function.parameters.iter() {
            self.record(parameter.symbol, parameter.type_annotation.ty);
        }

        if let Some(lookup) = self.lookup_mut(function.symbol) {
            lookup.ty = Some(function.declared_return_type());
            lookup.parameters = Some(parameters);
        }
    }

    /// Infers the body of the function at `index` and compares it with the
    /// declared return type.
    pub fn check_function(&mut self, program: &mut Program, index: usize) -> Result<(), Error> {
        let body = program.functions[index].body;
        let received = self.infer(program, body)?;

        let function = &program.functions[index];
        let declared = function.declared_return_type();
        if received != declared {
            return Err(MK_ERROR!(
                TypeError::ReturnTypeMatchError {
                    function: function.name.to_string(),
                    declared,
                    received,
                },
                program.expr(body).position
            ));
        }

        trace!(function = function.name, return_type = %declared, "checked function");

        Ok(())
    }

    /// Infers the type of `id` and every expression below it, storing the
    /// result on each node.
    fn infer<'src>(&mut self, program: &mut Program<'src>, id: ExprId<'src>) -> Result<Type, Error> {
        let position = program.expr(id).position;

        let ty = match &program.expr(id).kind {
            ExprKind::Unit => Type::Unit,
            ExprKind::Integer(_) => Type::Int,
            ExprKind::Variable(variable) => {
                self.symbol_type(variable.symbol, variable.name, position)?
            }
            ExprKind::BinaryOp(_) => self.infer_binary_chain(program, id)?,
            ExprKind::FunctionCall(call) => {
                let (symbol, function) = (call.symbol, call.function);
                let received = call.arguments.len();

                let Some((return_type, expected)) = self.get_lookup(symbol).and_then(|lookup| {
                    Some((lookup.ty?, lookup.parameters.as_ref()?.len()))
                }) else {
                    return Err(MK_ERROR!(
                        TypeError::UnresolvedSymbol {
                            name: function.to_string()
                        },
                        position
                    ));
                };

                if received > expected {
                    return Err(MK_ERROR!(
                        TypeError::UnexpectedArguments { expected, received },
                        position
                    ));
                }
                if received < expected {
                    return Err(MK_ERROR!(
                        TypeError::MissingArguments { expected, received },
                        position
                    ));
                }

                let mut index = 0;
                while let Some(argument) = program.expr(id).child(index) {
                    let received = self.infer(program, argument)?;
                    let expected = self.parameter_type(symbol, index).unwrap_or(received);
                    if received != expected {
                        return Err(MK_ERROR!(
                            TypeError::ArgumentTypeMatchError { expected, received },
                            program.expr(argument).position
                        ));
                    }
                    index += 1;
                }

                return_type
            }
            ExprKind::VariableDefinition(definition) => {
                let (symbol, annotation, value) =
                    (definition.symbol, definition.type_annotation, definition.value);
                let received = self.infer(program, value)?;

                if let Some(annotation) = annotation {
                    if annotation.ty != received {
                        return Err(MK_ERROR!(
                            TypeError::TypeMatchError {
                                expected: annotation.ty,
                                received
                            },
                            program.expr(value).position
                        ));
                    }
                }

                self.record(symbol, received);

                Type::Unit
            }
            ExprKind::Block(_) => {
                let mut last = Type::Unit;
                let mut index = 0;
                while let Some(item) = program.expr(id).child(index) {
                    last = self.infer(program, item)?;
                    index += 1;
                }

                last
            }
        };

        program.expr_mut(id).inferred_type = Some(ty);

        Ok(ty)
    }

    /// Checks a chain of binary operators nested to the left, such as
    /// `a + b + c`, in a loop rather than one call per operator.
    ///
    /// The left spine is collected first, outermost operator first. An
    /// assignment whose target is not a variable is reported before any of its
    /// operands are looked at. Operands are then inferred left to right.
    fn infer_binary_chain<'src>(
        &mut self,
        program: &mut Program<'src>,
        id: ExprId<'src>,
    ) -> Result<Type, Error> {
        let mut spine = vec![];
        let mut current = id;

        while let ExprKind::BinaryOp(binary) = &program.expr(current).kind {
            let (kind, lhs, rhs) = (binary.kind, binary.lhs, binary.rhs);

            if kind == BinaryOpKind::Assign
                && !matches!(program.expr(lhs).kind, ExprKind::Variable(_))
            {
                return Err(MK_ERROR!(
                    TypeError::InvalidAssignmentTarget,
                    program.expr(current).position
                ));
            }

            spine.push((current, kind, rhs));
            current = lhs;
        }

        let mut left = current;
        let mut left_type = self.infer(program, current)?;

        for (operator, kind, right) in spine.into_iter().rev() {
            let ty = match kind {
                BinaryOpKind::Add => {
                    if left_type != Type::Int {
                        return Err(MK_ERROR!(
                            TypeError::OperandTypeMatchError {
                                received: left_type
                            },
                            program.expr(left).position
                        ));
                    }

                    let received = self.infer(program, right)?;
                    if received != Type::Int {
                        return Err(MK_ERROR!(
                            TypeError::OperandTypeMatchError { received },
                            program.expr(right).position
                        ));
                    }

                    Type::Int
                }
                BinaryOpKind::Assign => {
                    let received = self.infer(program, right)?;
                    if received != left_type {
                        return Err(MK_ERROR!(
                            TypeError::TypeMatchError {
                                expected: left_type,
                                received
                            },
                            program.expr(right).position
                        ));
                    }

                    left_type
                }
            };

            program.expr_mut(operator).inferred_type = Some(ty);
            left = operator;
            left_type = ty;
        }

        Ok(left_type)
    }

    fn parameter_type(&self, symbol: SymbolId, index: usize) -> Option<Type> {
        self.get_lookup(symbol)?.parameters.as_ref()?.get(index).copied()
    }

    fn symbol_type(&self, symbol: SymbolId, name: &str, position: Position) -> Result<Type, Error> {
        match self.get_lookup(symbol).and_then(|lookup| lookup.ty) {
            Some(ty) => Ok(ty),
            None => Err(MK_ERROR!(
                TypeError::UnresolvedSymbol {
                    name: name.to_string()
                },
                position
            )),
        }
    }
}

/// Checks a name-resolved program and annotates every expression with its
/// type.
///
/// All prototypes are recorded before any body is looked at, so calls to
/// functions declared later type check. The table is rebuilt on every call,
/// so checking an already checked program yields the same types again.
pub fn type_check(program: &mut Program, symbol_count: SymbolCount) -> Result<(), Error> {
    let mut checker = TypeChecker::new(symbol_count);

    for function in program.functions.iter() {
        checker.declare_function(function);
    }

    for index in 0..program.functions.len() {
        checker.check_function(program, index)?;
    }

    Ok(())
}
