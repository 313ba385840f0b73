// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::{BufWriter, Write};
use std::path::Path;

use crate::Error;

/// Writes a file through a temporary sibling and renames it on success.
///
/// The destination is never left partially written. On failure the temporary
/// file is removed and an existing destination stays as it was.
pub fn write_atomically<F>(destination: &Path, f: F) -> Result<(), Error>
where
    F: FnOnce(&mut dyn Write) -> Result<(), Error>,
{
    let write_err = |source: std::io::Error| Error::Write {
        path: destination.to_path_buf(),
        source,
    };

    let dir = match destination.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".svg2png")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(write_err)?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        f(&mut writer)?;
        writer.flush().map_err(write_err)?;
    }

    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(destination).map_err(|e| write_err(e.error))?;

    log::debug!("Saved '{}'.", destination.display());
    Ok(())
}
