/// Name resolution module
/// Binds every use of a name to the declaration it refers to
///
/// Submodules:
/// - namer: The resolution pass over a `Program`
/// - scope: Lexical scopes and symbol lookup
pub mod namer;
pub mod scope;
