use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

pub const PLAIN_FILE: &str = "Version.txt";
pub const LITERAL_FILE: &str = "Version.inc";
pub const POSTFIX_FILE: &str = "VersionPostfix.inc";

/// the two output files and the optional postfix input, all in one directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFiles {
    pub plain: PathBuf,   // raw version code
    pub literal: PathBuf, // quoted code + postfix
    pub postfix: PathBuf, // optional postfix input
}

impl VersionFiles {
    pub fn in_dir(dir: &Path) -> Self {
        VersionFiles {
            plain: dir.join(PLAIN_FILE),
            literal: dir.join(LITERAL_FILE),
            postfix: dir.join(POSTFIX_FILE),
        }
    }
}

/// single quoted literal for inclusion in source files
///
/// the postfix is not escaped, a `'` inside it breaks the literal
pub fn literal(code: &str, postfix: &str) -> String {
    format!("'{}{}'", code, postfix)
}

/// truncate and write both output files, plain file first
pub fn write_outputs(files: &VersionFiles, code: &str, postfix: &str) -> Result<()> {
    fs::write(&files.plain, code).with_context(|| format!("failed to write {:?}", files.plain))?;
    debug!("wrote {:?}", files.plain);

    fs::write(&files.literal, literal(code, postfix))
        .with_context(|| format!("failed to write {:?}", files.literal))?;
    debug!("wrote {:?}", files.literal);
    Ok(())
}
