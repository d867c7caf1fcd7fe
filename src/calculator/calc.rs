//! # Stack calculator
//!
//! Reads a script line by line. Each line is one of
//! - empty or starting with `#`: ignored
//! - starting with an ASCII letter: a command (see [`Keyword`](super::command::Keyword))
//! - anything else: a polynomial literal pushed on the stack
//!
//! Commands that produce output (`IS_COEFF`, `IS_ZERO`, `IS_EQ`, `DEG`, `DEG_BY`, `PRINT`)
//! write one line to the output stream. A failed line writes `ERROR <line> <message>` to
//! the error stream and leaves the stack as it was.
//!
//! # Example
//! ```
//! use RustedPoly::calculator::calc::Calculator;
//! let script = "2\n(1,1)\nADD\nPRINT\nPOP\nPOP\n";
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! Calculator::default().run(script.as_bytes(), &mut out, &mut err).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "(2,0)+(1,1)\n");
//! assert_eq!(String::from_utf8(err).unwrap(), "ERROR 6 STACK UNDERFLOW\n");
//! ```

use crate::calculator::command::{Command, CommandError, parse_command};
use crate::calculator::poly_stack::PolyStack;
use crate::symbolic::parse_poly::PolyParser;
use crate::symbolic::poly_engine::Poly;
use log::{debug, info, trace};
use std::io::{self, BufRead, Write};

fn flag(b: bool) -> String {
    if b { "1".to_string() } else { "0".to_string() }
}

#[derive(Debug, Default, Clone)]
pub struct Calculator {
    stack: PolyStack,
    parser: PolyParser,
}

impl Calculator {
    pub fn new(parser: PolyParser) -> Self {
        Calculator {
            stack: PolyStack::new(),
            parser,
        }
    }

    pub fn stack(&self) -> &PolyStack {
        &self.stack
    }

    /// Processes one line of the script. Returns the text the line prints, if any.
    pub fn process_line(
        &mut self,
        line: &str,
        line_number: usize,
    ) -> Result<Option<String>, CommandError> {
        let Some(first) = line.chars().next() else {
            return Ok(None);
        };
        if first == '#' {
            return Ok(None);
        }
        if first.is_ascii_alphabetic() {
            let command = parse_command(line)?;
            trace!("line {}: {:?}", line_number, command);
            return self.execute(command);
        }
        let p = self.parser.parse(line, line_number)?;
        self.stack.push(p);
        Ok(None)
    }

    /// Executes a command against the stack. On error the stack is not modified.
    pub fn execute(&mut self, command: Command) -> Result<Option<String>, CommandError> {
        let stack = &mut self.stack;
        let output = match command {
            Command::Zero => {
                stack.push(Poly::zero());
                None
            }
            Command::IsCoeff => Some(flag(Self::top(stack)?.is_coeff())),
            Command::IsZero => Some(flag(Self::top(stack)?.is_zero())),
            Command::Clone => {
                let p = Self::top(stack)?.clone();
                stack.push(p);
                None
            }
            Command::Add => {
                let (p, q) = stack.pop_two().ok_or(CommandError::StackUnderflow)?;
                stack.push(p.add(&q));
                None
            }
            Command::Mul => {
                let (p, q) = stack.pop_two().ok_or(CommandError::StackUnderflow)?;
                stack.push(p.mul(&q));
                None
            }
            Command::Sub => {
                let (p, q) = stack.pop_two().ok_or(CommandError::StackUnderflow)?;
                stack.push(p.sub(&q));
                None
            }
            Command::Neg => {
                let p = stack.pop().ok_or(CommandError::StackUnderflow)?;
                stack.push(p.neg());
                None
            }
            Command::IsEq => {
                let (p, q) = stack.top_two().ok_or(CommandError::StackUnderflow)?;
                Some(flag(p.is_eq(q)))
            }
            Command::Deg => Some(Self::top(stack)?.deg().to_string()),
            Command::DegBy(idx) => {
                // any index past the depth of the polynomial gives the same answer
                let idx = usize::try_from(idx).unwrap_or(usize::MAX);
                Some(Self::top(stack)?.deg_by(idx).to_string())
            }
            Command::At(x) => {
                let p = stack.pop().ok_or(CommandError::StackUnderflow)?;
                stack.push(p.at(x));
                None
            }
            Command::Print => Some(Self::top(stack)?.to_string()),
            Command::Pop => {
                stack.pop().ok_or(CommandError::StackUnderflow)?;
                None
            }
            Command::Compose(k) => {
                // needs p and k replacements
                let k = usize::try_from(k)
                    .ok()
                    .filter(|k| *k < stack.len())
                    .ok_or(CommandError::StackUnderflow)?;
                let p = stack.pop().ok_or(CommandError::StackUnderflow)?;
                let qs = stack.pop_many(k).ok_or(CommandError::StackUnderflow)?;
                stack.push(p.compose(&qs));
                None
            }
        };
        Ok(output)
    }

    fn top(stack: &PolyStack) -> Result<&Poly, CommandError> {
        stack.top().ok_or(CommandError::StackUnderflow)
    }

    /// Runs a whole script. Results go to `out`, error lines go to `err`.
    /// Only I/O failures are returned as errors.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        input: R,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<()> {
        let mut errors = 0usize;
        for (idx, bytes) in input.split(b'\n').enumerate() {
            let bytes = bytes?;
            let line_number = idx + 1;
            let text = String::from_utf8_lossy(&bytes);
            let line = text.strip_suffix('\r').unwrap_or(&*text);
            match self.process_line(line, line_number) {
                Ok(Some(output)) => writeln!(out, "{}", output)?,
                Ok(None) => {}
                Err(e) => {
                    errors += 1;
                    if let CommandError::WrongPoly(parse_error) = &e {
                        debug!("{}", parse_error);
                    }
                    writeln!(err, "ERROR {} {}", line_number, e)?;
                }
            }
        }
        out.flush()?;
        info!(
            "script finished: {} error(s), {} polynomial(s) left on the stack",
            errors,
            self.stack.len()
        );
        Ok(())
    }
}
