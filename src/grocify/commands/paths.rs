use crate::commands::{CmdResult, GrocifyPaths};
use crate::error::Result;

pub fn run(paths: &GrocifyPaths) -> Result<CmdResult> {
    Ok(CmdResult::default().with_paths(paths.clone()))
}
