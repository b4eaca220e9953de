//! Deterministic scanner for numbers embedded in free-form text.
//!
//! The scanner walks the input once, left to right, through explicit states:
//!
//! ```text
//! PreNumber ──digit──▶ Integer ──'.'+digit──▶ Fraction
//!     │                  │  ▲                    │
//!     └──'.'+digit───────┼──┼───────────────────▶│
//!                        │  └─','+digit (thousands, if enabled)
//!                        └──other──▶ PostNumber ◀──other──┘
//! ```
//!
//! Everything seen in `PreNumber` (currency symbols, codes, words) is skipped.
//! Only ASCII digits, `.` and `,` are inspected, which are never part of a
//! multi-byte UTF-8 sequence, so byte offsets are always char boundaries.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    PreNumber,
    Integer,
    Fraction,
    PostNumber,
}

/// How commas inside the integer part are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// `1,299` is one number (commas between digits are dropped).
    Thousands,
    /// A comma ends the number.
    None,
}

/// One numeric run found in the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRun {
    pub value: f64,
    /// Byte offset of the first character of the run.
    pub start: usize,
    /// Byte offset one past the last character of the run.
    pub end: usize,
}

/// Iterator over the numeric runs of a string, in order of appearance.
#[derive(Debug, Clone)]
pub struct NumberScanner<'a> {
    input: &'a str,
    pos: usize,
    grouping: Grouping,
}

impl<'a> NumberScanner<'a> {
    pub fn new(input: &'a str, grouping: Grouping) -> Self {
        Self {
            input,
            pos: 0,
            grouping,
        }
    }

    fn follows_word_char(&self, idx: usize) -> bool {
        self.input[..idx]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric() || c == '.')
    }
}

impl Iterator for NumberScanner<'_> {
    type Item = NumericRun;

    fn next(&mut self) -> Option<NumericRun> {
        let bytes = self.input.as_bytes();
        let mut state = State::PreNumber;
        let mut digits = String::new();
        let mut start = self.pos;
        let mut i = self.pos;

        while let Some(&b) = bytes.get(i) {
            let next_is_digit = bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
            state = match state {
                State::PreNumber if b.is_ascii_digit() => {
                    start = i;
                    digits.push(char::from(b));
                    State::Integer
                }
                // ".99" counts, "Rs.499" and the tail of "1.2.3" do not.
                State::PreNumber if b == b'.' && next_is_digit && !self.follows_word_char(i) => {
                    start = i;
                    digits.push_str("0.");
                    State::Fraction
                }
                State::PreNumber => State::PreNumber,
                State::Integer if b.is_ascii_digit() => {
                    digits.push(char::from(b));
                    State::Integer
                }
                State::Integer if b == b',' && self.grouping == Grouping::Thousands && next_is_digit => {
                    State::Integer
                }
                State::Integer if b == b'.' && next_is_digit => {
                    digits.push('.');
                    State::Fraction
                }
                State::Fraction if b.is_ascii_digit() => {
                    digits.push(char::from(b));
                    State::Fraction
                }
                State::Integer | State::Fraction | State::PostNumber => State::PostNumber,
            };
            if state == State::PostNumber {
                break;
            }
            i += 1;
        }

        self.pos = i;
        if digits.is_empty() {
            return None;
        }

        let value = digits.parse::<f64>().ok()?;
        Some(NumericRun {
            value,
            start,
            end: i,
        })
    }
}

/// First numeric run in `input`, if any.
pub fn first_number(input: &str, grouping: Grouping) -> Option<NumericRun> {
    NumberScanner::new(input, grouping).next()
}
