use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading one of the prediction output files.
///
/// Implementors carry whatever parsing options their format needs (for example a column
/// schema) and turn a buffered stream into a fully constructed, immutable value.
pub trait PredictionFile {
    /// The value produced from a complete file.
    type Output;

    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads and parses the whole stream.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(&self, reader: &mut impl BufRead) -> Result<Self::Output, Self::Error>;

    /// Opens `path` and reads it with [`PredictionFile::read_from`].
    ///
    /// The file handle is released as soon as parsing completes.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(&self, path: P) -> Result<Self::Output, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        self.read_from(&mut reader)
    }
}
