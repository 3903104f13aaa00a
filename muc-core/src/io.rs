use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::{fs, io};

/// Reads a whole text file into memory.
pub fn read_text<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Writes `text` to `filename`, creating parent folders when needed.
///
/// Example:
/// `out/novel.html` creates `out/` first if it does not exist.
pub fn write_text<P: AsRef<Path>>(filename: P, text: &str) -> io::Result<()> {
	let path = filename.as_ref();
	if let Some(parent) = path.parent() {
		if !parent.as_os_str().is_empty() {
			fs::create_dir_all(parent)?;
		}
	}
	let mut file = File::create(path)?;
	file.write_all(text.as_bytes())?;
	file.flush()
}
