/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` trait, the `Program` root and the `Stmt`/`Expr` enums
/// - expressions: Payloads of the expression variants
/// - statements: Payloads of the statement variants
pub mod ast;
pub mod expressions;
pub mod statements;
