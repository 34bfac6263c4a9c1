use std::path::PathBuf;

use anyhow::Context as _;

use crate::clock::{Clock, ZonedClock};

/// Everything `generate` needs from its surroundings.
pub(crate) struct Context {
    pub out_dir: PathBuf,
    pub clock: Box<dyn Clock>,
}

impl Context {
    pub fn new(out_dir: PathBuf, clock: Box<dyn Clock>) -> Self {
        Self { out_dir, clock }
    }

    /// Current working directory, dated in the default zone.
    pub fn from_env() -> anyhow::Result<Self> {
        let out_dir =
            std::env::current_dir().context("Could not get current working directory")?;
        Ok(Self::new(out_dir, Box::new(ZonedClock::default())))
    }
}
