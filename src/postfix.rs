//! Infix-to-postfix conversion
//!
//! A shunting-yard pass over the expanded pattern. Precedence is the
//! declaration order of [`Op`]; every operator associates to the left, so
//! equal precedence pops from the stack first. Escaped symbols leave this
//! stage as literal operands and the escape prefix itself is dropped, so
//! the postfix stream needs no escape bookkeeping downstream.

use std::fmt;

use smallvec::SmallVec;

use crate::alphabet::{Alphabet, Op};
use crate::error::CompileError;

/// One element of the postfix stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<S> {
    /// A literal operand
    Literal(S),
    /// An operator together with the symbol that denoted it
    Operator(Op, S),
}

impl<S: fmt::Display> fmt::Display for Token<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(symbol) => write!(f, "{}", symbol),
            Token::Operator(_, symbol) => write!(f, "{}", symbol),
        }
    }
}

/// Convert an expanded infix pattern to a postfix token stream
///
/// Expects class brackets to be gone (the expander runs first); a class
/// bracket, a close-group without its opener, or an opener left on the
/// stack at the end is reported as [`CompileError::PostfixFailure`].
pub fn to_postfix<S: Clone + PartialEq>(
    pattern: &[S],
    alphabet: &Alphabet<S>,
) -> Result<Vec<Token<S>>, CompileError> {
    let mut output = Vec::with_capacity(pattern.len());
    let mut stack: SmallVec<[(Op, S); 16]> = SmallVec::new();
    let mut escaped = false;

    for symbol in pattern {
        if escaped {
            output.push(Token::Literal(symbol.clone()));
            escaped = false;
            continue;
        }
        match alphabet.role_of(symbol) {
            Some(Op::Escape) => escaped = true,
            Some(Op::OpenGroup) => stack.push((Op::OpenGroup, symbol.clone())),
            Some(Op::CloseGroup) => loop {
                match stack.pop() {
                    Some((Op::OpenGroup, _)) => break,
                    Some((op, sym)) => output.push(Token::Operator(op, sym)),
                    None => return Err(CompileError::PostfixFailure),
                }
            },
            Some(op @ (Op::Or | Op::Concat | Op::Any | Op::OneOrMore)) => {
                while let Some(&(top, _)) = stack.last() {
                    if top == Op::OpenGroup || top < op {
                        break;
                    }
                    if let Some((popped, sym)) = stack.pop() {
                        output.push(Token::Operator(popped, sym));
                    }
                }
                stack.push((op, symbol.clone()));
            }
            Some(Op::OpenMatch) | Some(Op::CloseMatch) => {
                return Err(CompileError::PostfixFailure)
            }
            None => output.push(Token::Literal(symbol.clone())),
        }
    }

    while let Some((op, sym)) = stack.pop() {
        if op == Op::OpenGroup {
            return Err(CompileError::PostfixFailure);
        }
        output.push(Token::Operator(op, sym));
    }

    Ok(output)
}
