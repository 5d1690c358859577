use std::fmt::Display;

use super::Symbol;

#[derive(Debug, PartialEq, Eq)]
pub enum CodingError {
    EmptyAlphabet,
    UnknownSymbol(Symbol),
    UnexpectedMarker(char),
    DescentBelowLeaf,
    IncompleteCode,
}

impl Display for CodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAlphabet => {
                write!(f, "Can not build a Huffman tree over an empty alphabet")
            }
            Self::UnknownSymbol(symbol) => {
                write!(f, "Symbol '{}' could not be found in the Huffman tree", symbol)
            }
            Self::UnexpectedMarker(marker) => {
                write!(f, "Found marker '{}' which is neither 'L' nor 'R'", marker)
            }
            Self::DescentBelowLeaf => {
                write!(f, "Code descends below a leaf of the Huffman tree")
            }
            Self::IncompleteCode => {
                write!(f, "Code ended before reaching a leaf")
            }
        }
    }
}

impl std::error::Error for CodingError {}
