use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::PathBuf,
};

use log::{debug, info, warn};

use crate::{context::Context, error::ScaffoldError, metadata::PostMetadata};

pub(crate) mod utils;

/// Creates `<date>-<slug>.md` in `ctx.out_dir` and returns its path.
///
/// The file is opened with `create_new`, so an existing post is never
/// truncated or appended to. Validation happens before the clock is read
/// or anything touches the disk.
pub(crate) fn generate<S: AsRef<str>>(
    ctx: &Context,
    words: &[S],
) -> Result<PathBuf, ScaffoldError> {
    if words.is_empty() {
        return Err(ScaffoldError::Validation);
    }

    let today = ctx.clock.today();
    debug!("today is {today}");

    let metadata = PostMetadata::new(words, today)?;
    let path = ctx.out_dir.join(metadata.file_name());
    debug!("writing {path:?}");

    let fd = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|e| {
            let err = utils::classify_io_error(&path, e);
            if let ScaffoldError::FileExists(_) = err {
                warn!("{path:?} already exists, refusing to overwrite");
            }
            err
        })?;

    let mut writer = BufWriter::new(fd);
    writer
        .write_all(metadata.render().as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| utils::classify_io_error(&path, e))?;

    info!("created {path:?}");
    Ok(path)
}
