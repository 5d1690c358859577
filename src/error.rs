use std::fmt::Display;

use crate::huffman::CodingError;

#[derive(Debug)]
pub enum Error {
    UnableToReadInputFile(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToWriteCodingResult(std::io::Error),
    AlphabetFileRequiredForDecoding,
    CodingFailed(CodingError),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnableToReadInputFile(path, error) => {
                write!(f, "Unable to read input file '{}': {}", path, error)
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToWriteCodingResult(error) => {
                write!(f, "Failed to write coding result: {}", error)
            }
            Self::AlphabetFileRequiredForDecoding => {
                write!(
                    f,
                    "Decoding requires an alphabet file to rebuild the Huffman tree from"
                )
            }
            Self::CodingFailed(error) => {
                write!(f, "Coding failed: {}", error)
            }
        }
    }
}

impl std::error::Error for Error {}
