use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

pub use cli::{CLIParser, CodingMode};
use error::Error;
use huffman::{HuffmanCoder, HuffmanTree};

mod cli;
mod error;
pub mod huffman;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    output_file: PathBuf,
    mode: CodingMode,
    alphabet_file: Option<PathBuf>,
}

fn read_input_file(file_path: &Path) -> Result<String> {
    fs::read_to_string(file_path)
        .map_err(|e| Error::UnableToReadInputFile(file_path.to_str().unwrap().to_owned(), e))
}

fn write_output_file(file_path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(file_path.to_str().unwrap().to_owned(), e)
        })?;
    file.write_all(content.as_bytes())
        .map_err(Error::FailedToWriteCodingResult)
}

fn build_tree(text: &str) -> Result<HuffmanTree> {
    let tree = HuffmanTree::from_text(text).map_err(Error::CodingFailed)?;
    log::debug!(
        "built Huffman tree with {} leaves, accumulated count {}",
        tree.leaf_count(),
        tree.frequency()
    );
    Ok(tree)
}

fn render_tree(input_file: &Path) -> Result<String> {
    let text = read_input_file(input_file)?;
    let tree = build_tree(&text)?;
    Ok(format!("Huffman tree:\n{}", tree))
}

fn render_codes(input_file: &Path) -> Result<String> {
    let text = read_input_file(input_file)?;
    let tree = build_tree(&text)?;
    let coder = HuffmanCoder::new(&tree);
    Ok(format!("Huffman tree codes:\n{}", coder))
}

fn encode_file(input_file: &Path) -> Result<String> {
    let text = read_input_file(input_file)?;
    let tree = build_tree(&text)?;
    let coder = HuffmanCoder::new(&tree);
    let code = coder.encode_sequence(&text).map_err(Error::CodingFailed)?;
    log::info!(
        "encoded {} symbols into {} markers",
        text.chars().count(),
        code.len()
    );
    Ok(code)
}

fn decode_file(input_file: &Path, alphabet_file: Option<&Path>) -> Result<String> {
    let alphabet_file = alphabet_file.ok_or(Error::AlphabetFileRequiredForDecoding)?;
    let alphabet_text = read_input_file(alphabet_file)?;
    let code = read_input_file(input_file)?;
    let tree = build_tree(&alphabet_text)?;
    let coder = HuffmanCoder::new(&tree);
    let text = coder.decode_sequence(&code).map_err(Error::CodingFailed)?;
    log::info!(
        "decoded {} markers into {} symbols",
        code.len(),
        text.chars().count()
    );
    Ok(text)
}

pub fn run_coding_tool(arguments: &Arguments) -> Result<()> {
    let output = match arguments.mode {
        CodingMode::Tree => render_tree(&arguments.input_file)?,
        CodingMode::Codes => render_codes(&arguments.input_file)?,
        CodingMode::Encode => encode_file(&arguments.input_file)?,
        CodingMode::Decode => {
            decode_file(&arguments.input_file, arguments.alphabet_file.as_deref())?
        }
    };
    write_output_file(&arguments.output_file, &output)
}
