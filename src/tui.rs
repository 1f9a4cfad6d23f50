use std::path::PathBuf;

use anyhow::Result;

use crate::model::GalleryConfig;

#[derive(Clone, Debug, Default)]
pub struct TuiRunOptions {
    pub config: GalleryConfig,
    pub log_file: Option<PathBuf>,
}

pub fn run(config: GalleryConfig) -> Result<()> {
    crate::tui_shell::run(TuiRunOptions {
        config,
        log_file: None,
    })
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run(opts)
}
