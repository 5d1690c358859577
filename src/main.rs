use std::env::args_os;

use huffman_text_coder::{run_coding_tool, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match run_coding_tool(&arguments) {
        Ok(_) => println!("Coding successful"),
        Err(e) => eprintln!("Coding failed because of: {}", e),
    }
}
