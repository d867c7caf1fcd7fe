//!
/// ___________________________________________________________________________________________________________________________
/// operand stack of the calculator
pub mod poly_stack;
/// ___________________________________________________________________________________________________________________________
/// command keywords, their arguments and the error messages of the calculator
pub mod command;
/// ___________________________________________________________________________________________________________________________
/// line-oriented stack calculator: reads a script, executes commands, prints results and error lines
pub mod calc;
