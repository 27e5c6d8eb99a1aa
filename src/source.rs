//! Input acquisition.
//!
//! The engine works on whole strings, so every source is read completely
//! before it is checked.

use crate::error::{TypographyError, TypographyResult};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// A readable, named source of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// A file on disk
    File(PathBuf),

    /// Standard input
    Stdin,
}

impl TextSource {
    /// Builds the list of sources to check.
    ///
    /// Every path must name an existing regular file; the first one that
    /// does not is reported before anything is read. With no paths, the
    /// only source is standard input.
    pub fn collect<P: AsRef<Path>>(paths: &[P]) -> TypographyResult<Vec<TextSource>> {
        if paths.is_empty() {
            return Ok(vec![Self::Stdin]);
        }

        paths
            .iter()
            .map(|p| {
                let path = p.as_ref();
                if path.is_file() {
                    Ok(Self::File(path.to_path_buf()))
                } else {
                    Err(TypographyError::NotAFile {
                        path: path.to_path_buf(),
                    })
                }
            })
            .collect()
    }

    /// Name used when reporting on this source.
    pub fn name(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "<stdin>".to_string(),
        }
    }

    /// Reads the entire source into a string.
    pub fn read_to_string(&self) -> TypographyResult<String> {
        match self {
            Self::File(path) => std::fs::read_to_string(path).map_err(|source| TypographyError::Io {
                path: path.clone(),
                source,
            }),
            Self::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|source| TypographyError::Io {
                        path: PathBuf::from("<stdin>"),
                        source,
                    })?;
                Ok(text)
            }
        }
    }
}
