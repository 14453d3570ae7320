//! Atomic file writing.
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::debug;

use crate::error::Error;

/// Temporary sibling of `dst`: `.<filename>.tmp`, in the same directory so that renaming is atomic.
fn tmp_path(dst: &Path) -> Result<PathBuf, Error> {
    let filename = dst
        .file_name()
        .ok_or_else(|| Error::Custom(format!("invalid destination file: {:?}", dst)))?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(filename);
    tmp_name.push(".tmp");
    Ok(dst.with_file_name(tmp_name))
}

/// Write `text` followed by a newline to `dst`.
///
/// Content goes to a temporary file that is then renamed to `dst`,
/// so that `dst` never holds a partially written file.
pub fn write_atomic(text: &str, dst: &Path) -> Result<(), Error> {
    let tmp = tmp_path(dst)?;
    debug!("writing {:?} through {:?}", dst, tmp);

    let written = File::create(&tmp).and_then(|mut f| {
        f.write_all(text.as_bytes())?;
        f.write_all(b"\n")?;
        f.sync_all()
    });

    if let Err(e) = written {
        // do not leave the temporary file behind
        let _ = std::fs::remove_file(&tmp);
        return Err(Error::Io(e));
    }

    std::fs::rename(&tmp, dst)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{tmp_path, write_atomic};

    #[test]
    fn tmp_is_sibling() {
        let tmp = tmp_path(Path::new("out/file.txt")).unwrap();
        assert_eq!(tmp, Path::new("out/.file.txt.tmp"));
        assert!(tmp_path(Path::new("/")).is_err());
    }

    #[test]
    fn write() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("file.txt");
        write_atomic("<Sentence id='1'>\n</Sentence>\n\n", &dst).unwrap();
        assert_eq!(
            std::fs::read_to_string(&dst).unwrap(),
            "<Sentence id='1'>\n</Sentence>\n\n\n"
        );

        // only the destination file remains
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("file.txt");
        write_atomic("first", &dst).unwrap();
        write_atomic("second", &dst).unwrap();
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "second\n");
    }
}
