pub mod checker;
pub mod comparator;
pub mod parser;

pub use crate::domain::model::{FieldPair, Mismatch, Record, RecordSet, Verdict};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
