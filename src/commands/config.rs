use anyhow::{Result, bail};
use log::debug;
use std::path::PathBuf;

use crate::runtime::Runtime;

pub struct Config<R: Runtime> {
    pub runtime: R,
    pub root: PathBuf,
    pub verbose: bool,
}

impl<R: Runtime> Config<R> {
    pub fn new(runtime: R, root: PathBuf, verbose: bool) -> Result<Self> {
        if !runtime.exists(&root) {
            bail!("Root directory {} does not exist", root.display());
        }
        if !runtime.is_dir(&root) {
            bail!("Root {} is not a directory", root.display());
        }
        debug!("Using cache root: {:?}", root);

        Ok(Self {
            runtime,
            root,
            verbose,
        })
    }
}
