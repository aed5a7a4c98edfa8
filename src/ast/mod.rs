/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program, functions, parameters, types and symbol ids
/// - expressions: The arena-allocated expression nodes
pub mod ast;
pub mod expressions;
