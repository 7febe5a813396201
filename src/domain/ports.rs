use crate::utils::error::Result;

pub trait Storage {
    fn read_to_string(&self, path: &str) -> Result<String>;
    fn write_string(&self, path: &str, contents: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn root(&self) -> &str;
    fn files(&self) -> &[String];
    fn dry_run(&self) -> bool;
}
