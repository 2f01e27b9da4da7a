use std::fmt;

/// The two selected fields of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub line: usize,
    pub first: String,
    pub second: String,
}

impl Record {
    pub fn new(line: usize, first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            line,
            first: first.into(),
            second: second.into(),
        }
    }

    /// Field equality only; the source line number is not part of the value.
    pub fn same_values(&self, other: &Record) -> bool {
        self.first == other.first && self.second == other.second
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// 1-based token positions that make up a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPair {
    pub first: usize,
    pub second: usize,
}

impl FieldPair {
    pub const fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// Minimum token count a line needs for both positions to exist.
    pub fn required_tokens(&self) -> usize {
        self.first.max(self.second)
    }
}

impl Default for FieldPair {
    fn default() -> Self {
        Self::new(3, 8)
    }
}

impl fmt::Display for FieldPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.first, self.second)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    pub source: String,
    pub records: Vec<Record>,
}

impl RecordSet {
    pub fn new(source: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            source: source.into(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// 1-based index of the pair within the compared prefix.
    pub index: usize,
    pub work: Record,
    pub reference: Record,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Same { compared: usize },
    Different(Mismatch),
}

pub const SAME_MESSAGE: &str = "Values are the same!";
pub const DIFFERENT_MESSAGE: &str = "Values are different!";

/// Exit status for a mismatch, the unsigned form of `-1`.
pub const MISMATCH_EXIT_CODE: i32 = 255;

impl Verdict {
    pub fn is_same(&self) -> bool {
        matches!(self, Verdict::Same { .. })
    }

    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Same { .. } => SAME_MESSAGE,
            Verdict::Different(_) => DIFFERENT_MESSAGE,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Verdict::Same { .. } => 0,
            Verdict::Different(_) => MISMATCH_EXIT_CODE,
        }
    }
}
