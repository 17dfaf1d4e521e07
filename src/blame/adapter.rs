// Version-control adapter: shells out to `git blame` and decodes its output.
use std::path::Path;
use std::process::Command;
use thiserror::Error;

/// Text encodings the adapter can decode blame output with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Latin1,
}

impl Encoding {
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Latin1 => "Latin-1",
        }
    }
}

/// Per-file errors reported by a blame source
#[derive(Error, Debug)]
pub enum BlameSourceError {
    #[error("file is not tracked by version control")]
    NotTracked,

    #[error("file is binary")]
    BinaryFile,

    #[error("blame output is not valid {}", encoding.name())]
    Decode { encoding: Encoding },

    #[error("failed to run version-control tool: {0}")]
    Io(#[from] std::io::Error),
}

/// Source of per-line blame metadata for tracked files
///
/// Implementations return the raw line-porcelain blob for one file, decoded
/// with the requested encoding, or a tagged failure for that file.
pub trait BlameSource {
    fn line_metadata(
        &self,
        file: &Path,
        repo_dir: &Path,
        encoding: Encoding,
    ) -> std::result::Result<String, BlameSourceError>;
}

/// Adapter that spawns the `git` CLI
pub struct GitCli;

impl BlameSource for GitCli {
    fn line_metadata(
        &self,
        file: &Path,
        repo_dir: &Path,
        encoding: Encoding,
    ) -> std::result::Result<String, BlameSourceError> {
        let output = Command::new("git")
            .args(["blame", "--line-porcelain", "--"])
            .arg(file)
            .current_dir(repo_dir)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.contains("no such path")
                || stderr.contains("not a git repository")
                || stderr.contains("outside repository")
            {
                return Err(BlameSourceError::NotTracked);
            }
            if stderr.contains("binary file") {
                return Err(BlameSourceError::BinaryFile);
            }
            return Err(BlameSourceError::Io(std::io::Error::other(
                stderr.into_owned(),
            )));
        }

        decode(&output.stdout, encoding)
    }
}

/// Decode raw bytes with the requested encoding
fn decode(bytes: &[u8], encoding: Encoding) -> std::result::Result<String, BlameSourceError> {
    match encoding {
        Encoding::Utf8 => std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| BlameSourceError::Decode { encoding }),
        // Every byte value is a valid Latin-1 code point, so the fallback
        // decode cannot fail
        Encoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_decode_rejects_invalid_bytes() {
        let err = decode(&[0x66, 0xe9, 0x6f], Encoding::Utf8).unwrap_err();
        match err {
            BlameSourceError::Decode { encoding } => assert_eq!(encoding, Encoding::Utf8),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn latin1_decode_accepts_any_bytes() {
        let text = decode(&[0x66, 0xe9, 0x6f], Encoding::Latin1).unwrap();
        assert_eq!(text, "f\u{e9}o");
    }

    #[test]
    fn utf8_decode_round_trips_valid_text() {
        let text = decode("author alice\n\tcafé\n".as_bytes(), Encoding::Utf8).unwrap();
        assert_eq!(text, "author alice\n\tcafé\n");
    }
}
