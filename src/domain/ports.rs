use crate::domain::model::FieldPair;
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

pub trait ConfigProvider {
    fn work_path(&self) -> &Path;
    fn reference_path(&self) -> &Path;
    fn fields(&self) -> FieldPair;
}
