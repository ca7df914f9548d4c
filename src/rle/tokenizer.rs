use std::iter::FusedIterator;
use std::str::Chars;

/// One expanded RLE symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// `b`
    Dead,
    /// `o`
    Live,
    /// `$`
    RowEnd,
}

impl Token {
    /// Maps a (lower-case) RLE symbol to its token, `None` for anything else.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'b' => Some(Self::Dead),
            'o' => Some(Self::Live),
            '$' => Some(Self::RowEnd),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Dead => 'b',
            Self::Live => 'o',
            Self::RowEnd => '$',
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum State {
    /// Reading the decimal prefix of the next run; `None` until a digit is seen.
    AccumulatingDigits { run: Option<usize> },
    /// Repeating `token` for the `remaining` copies of the current run.
    Emitting { token: Token, remaining: usize },
}

impl State {
    const START: Self = Self::AccumulatingDigits { run: None };

    /// Transition on one input character. Total over `char`: digits extend the
    /// run, any other symbol closes it. Unknown symbols close it as dead cells.
    fn step(run: Option<usize>, c: char) -> Self {
        match c.to_digit(10) {
            Some(d) => Self::AccumulatingDigits {
                run: Some(run.unwrap_or(0).saturating_mul(10).saturating_add(d as usize)),
            },
            None => Self::Emitting {
                token: Token::from_symbol(c).unwrap_or(Token::Dead),
                remaining: run.unwrap_or(1),
            },
        }
    }
}

/// Lazy expansion of a run-length encoded body into single tokens.
///
/// The input must already have the `!` terminator stripped. Digits that are
/// not followed by a symbol are dropped, and an explicit count of `0` emits
/// nothing.
#[derive(Clone, Debug)]
pub struct RunTokens<'a> {
    chars: Chars<'a>,
    state: State,
}

/// Expands `rle` into its token sequence. See [`RunTokens`].
pub fn run_length_decode(rle: &str) -> RunTokens<'_> {
    RunTokens {
        chars: rle.chars(),
        state: State::START,
    }
}

impl RunTokens<'_> {
    /// Drops the tokens left in the current run and returns how many there were.
    ///
    /// Lets callers consume a whole run at once instead of token by token.
    pub fn skip_run(&mut self) -> usize {
        match self.state {
            State::Emitting { remaining, .. } => {
                self.state = State::START;
                remaining
            }
            State::AccumulatingDigits { .. } => 0,
        }
    }
}

impl Iterator for RunTokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            match self.state {
                State::Emitting { remaining: 0, .. } => self.state = State::START,
                State::Emitting { token, remaining } => {
                    self.state = State::Emitting {
                        token,
                        remaining: remaining - 1,
                    };
                    return Some(token);
                }
                State::AccumulatingDigits { run } => {
                    let c = self.chars.next()?;
                    self.state = State::step(run, c);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            State::Emitting { remaining, .. } => (remaining, None),
            State::AccumulatingDigits { .. } => (0, None),
        }
    }
}

impl FusedIterator for RunTokens<'_> {}
