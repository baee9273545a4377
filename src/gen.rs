use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{FileWriteError, Stage};

/// end of database marker - readers stop on this student number
pub const SENTINEL: &str = "9999";
pub const RECORD_WIDTH: usize = 4;
pub const DEFAULT_RECORD_COUNT: usize = 20;
pub const DEFAULT_DB_FILE: &str = "database.txt";

/// largest count where every sequential id still fits the record width
/// and cannot collide with the sentinel
pub const MAX_RECORD_COUNT: usize = 9999;

/// Record for base 1 position `i` of a file holding `count` records.
///
/// The last position is always the sentinel no matter what `i` would format as.
pub fn record(i: usize, count: usize) -> String {
	if i == count {
		SENTINEL.to_string()
	} else {
		format!("{:0width$}", i, width = RECORD_WIDTH)
	}
}

/// Rejects counts that would drop the sentinel (0) or need ids wider than
/// 4 digits / repeat 9999 (above MAX_RECORD_COUNT).
pub fn check_count(count: usize) -> io::Result<()> {
	if count == 0 || count > MAX_RECORD_COUNT {
		return Err(io::Error::new(
			io::ErrorKind::InvalidInput,
			format!("records must be between 1 and {}, got {}", MAX_RECORD_COUNT, count),
		));
	}
	Ok(())
}

/// Writes `count` newline terminated records, sentinel last.  Returns bytes written.
pub fn write_records<W: Write>(w: &mut W, count: usize) -> io::Result<usize> {
	check_count(count)?;
	let mut bytes = 0usize;
	for i in 1..=count {
		let rec = record(i, count);
		w.write_all(rec.as_bytes())?;
		w.write_all(b"\n")?;
		bytes += rec.len() + 1;
	}
	Ok(bytes)
}

/// Create or truncate `path` and fill it with `count` records.
///
/// The file handle lives inside the BufWriter and is released when it drops,
/// on the error paths too.  Flush is done explicitly so a failed flush is
/// reported instead of being lost in drop.
pub fn generate_records<P: AsRef<Path>>(path: P, count: usize) -> Result<usize, FileWriteError> {
	let path = path.as_ref();
	// before File::create so a bad count leaves any existing file alone
	check_count(count).map_err(|e| FileWriteError::new(path, Stage::Check, e))?;
	let file = File::create(path).map_err(|e| FileWriteError::new(path, Stage::Create, e))?;
	let mut writer = BufWriter::new(file);
	let bytes = write_records(&mut writer, count).map_err(|e| FileWriteError::new(path, Stage::Write, e))?;
	writer.flush().map_err(|e| FileWriteError::new(path, Stage::Flush, e))?;
	Ok(bytes)
}

/// Writes the standard 20 record student database to `path`.
pub fn generate<P: AsRef<Path>>(path: P) -> Result<(), FileWriteError> {
	generate_records(path, DEFAULT_RECORD_COUNT).map(|_| ())
}

pub fn write_records_stdout(count: usize) -> io::Result<usize> {
	let stdout = io::stdout();
	let mut buffered = BufWriter::new(stdout.lock());
	let bytes = write_records(&mut buffered, count)?;
	buffered.flush()?;
	Ok(bytes)
}
