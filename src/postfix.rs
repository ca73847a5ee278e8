use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

/// read the whole postfix file, or "" if it is missing, unreadable or empty
///
/// contents are returned untouched, trailing newlines included
pub fn read_postfix(path: &Path) -> String {
    let mut postfix = String::new();
    match File::open(path) {
        Ok(mut f) => {
            if let Err(e) = f.read_to_string(&mut postfix) {
                debug!("could not read {:?}: {}, using empty postfix", path, e);
                postfix.clear();
            }
        }
        Err(e) => match e.kind() {
            std::io::ErrorKind::NotFound => {
                debug!("{:?} not found, using empty postfix", path);
            }
            _ => debug!("could not open {:?}: {}, using empty postfix", path, e),
        },
    }
    postfix
}
