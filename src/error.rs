use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which part of writing the database file failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
	Check,
	Create,
	Write,
	Flush,
}

impl fmt::Display for Stage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Stage::Check => write!(f, "check record count for"),
			Stage::Create => write!(f, "create"),
			Stage::Write => write!(f, "write"),
			Stage::Flush => write!(f, "flush"),
		}
	}
}

/// Any failure to open, write or close the output file.
#[derive(Debug, Error)]
#[error("failed to {stage} \"{}\": {source}", path.display())]
pub struct FileWriteError {
	pub path: PathBuf,
	pub stage: Stage,
	#[source]
	pub source: std::io::Error,
}

impl FileWriteError {
	pub fn new(path: impl Into<PathBuf>, stage: Stage, source: std::io::Error) -> FileWriteError {
		FileWriteError {
			path: path.into(),
			stage,
			source,
		}
	}
}
