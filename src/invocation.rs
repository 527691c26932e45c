// ABOUTME: Ordered token sequence for one external tabcmd call.
// ABOUTME: Guarantees non-emptiness; tokens are stringified at insertion.

use nonempty::NonEmpty;

/// One external command invocation: an ordered, non-empty token list.
///
/// Built fresh per call and consumed by [`crate::session::Session::execute`];
/// never retained between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    tokens: NonEmpty<String>,
}

impl Invocation {
    /// Start an invocation with its first token.
    pub fn new(first: impl ToString) -> Self {
        Self {
            tokens: NonEmpty::new(first.to_string()),
        }
    }

    /// Append a token. Accepts anything stringifiable (paths, flags, numbers).
    pub fn arg(mut self, token: impl ToString) -> Self {
        self.tokens.push(token.to_string());
        self
    }

    /// Append several tokens in order.
    pub fn args<I, T>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        for token in tokens {
            self.tokens.push(token.to_string());
        }
        self
    }

    /// The first token: the program after normalization.
    pub fn program(&self) -> &str {
        &self.tokens.head
    }

    /// Every token after the first.
    pub fn arguments(&self) -> &[String] {
        &self.tokens.tail
    }

    /// All tokens in order.
    pub fn tokens(&self) -> Vec<&str> {
        self.tokens.iter().map(String::as_str).collect()
    }

    /// Tokens for logging, with the value following `-p` masked.
    pub fn redacted(&self) -> Vec<&str> {
        let mut out = Vec::with_capacity(self.tokens.len());
        let mut mask_next = false;
        for token in self.tokens.iter() {
            if mask_next {
                out.push("***");
                mask_next = false;
            } else {
                out.push(token.as_str());
                mask_next = token == "-p";
            }
        }
        out
    }

    /// Put `program` in front unless it is already the first token.
    pub(crate) fn ensure_program(self, program: &str) -> Self {
        if self.tokens.head == program {
            return self;
        }
        let mut tail = Vec::with_capacity(self.tokens.len());
        tail.push(self.tokens.head);
        tail.extend(self.tokens.tail);
        Self {
            tokens: NonEmpty {
                head: program.to_string(),
                tail,
            },
        }
    }

    /// Append `token` at the very end.
    pub(crate) fn push_last(mut self, token: &str) -> Self {
        self.tokens.push(token.to_string());
        self
    }
}
