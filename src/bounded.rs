//! Fixed-capacity compilation for bounded patterns
//!
//! A secondary mode for callers that can bound their pattern length up
//! front, such as embedded or build-time use. The bound is a const
//! parameter; compilation rejects longer patterns and otherwise shares
//! every code path with [`Regex`], so the two modes cannot drift apart.

use crate::alphabet::Alphabet;
use crate::engine::Regex;
use crate::error::CompileError;

/// A compiled regular expression with a maximum pattern length of `N`
#[derive(Debug, Clone)]
pub struct BoundedRegex<S, const N: usize> {
    inner: Regex<S>,
}

impl<S: Clone + PartialEq, const N: usize> BoundedRegex<S, N> {
    /// The maximum pattern length this variant accepts
    pub const CAPACITY: usize = N;

    /// Compile a pattern of at most `N` symbols
    ///
    /// A longer pattern overflows the fixed capacity and is reported as
    /// [`CompileError::ConstructionFailure`].
    pub fn compile(pattern: &[S], alphabet: Alphabet<S>) -> Result<Self, CompileError> {
        if pattern.len() > N {
            return Err(CompileError::ConstructionFailure);
        }
        Regex::compile(pattern, alphabet).map(|inner| BoundedRegex { inner })
    }

    /// Test whether the input belongs to the pattern's language
    pub fn matches(&self, input: &[S]) -> bool {
        self.inner.matches(input)
    }

    /// Give up the capacity bound and keep the compiled regex
    pub fn into_inner(self) -> Regex<S> {
        self.inner
    }
}
