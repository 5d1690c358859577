use crate::Arguments;
use clap::{
    arg, builder::PossibleValue, crate_authors, crate_description, crate_name, crate_version,
    value_parser, Arg, ArgMatches, Command, ValueEnum,
};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CodingMode {
    Encode,
    Decode,
    Tree,
    Codes,
}

impl ValueEnum for CodingMode {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Encode, Self::Decode, Self::Tree, Self::Codes]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Encode => Some(PossibleValue::new("encode")),
            Self::Decode => Some(PossibleValue::new("decode")),
            Self::Tree => Some(PossibleValue::new("tree")),
            Self::Codes => Some(PossibleValue::new("codes")),
        }
    }
}

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_output_file_argument(command);
        let command = Self::register_mode_argument(command);
        Self::register_alphabet_file_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_output_file_argument(command: Command) -> Command {
        command.arg(Self::create_output_file_argument())
    }

    fn register_mode_argument(command: Command) -> Command {
        command.arg(Self::create_mode_argument())
    }

    fn register_alphabet_file_argument(command: Command) -> Command {
        command.arg(Self::create_alphabet_file_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to input text file")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_output_file_argument() -> Arg {
        Arg::new("output_file")
            .help("Path to output file")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_mode_argument() -> Arg {
        arg!(mode: -m --mode <MODE> "Coding operation to perform")
            .default_value("encode")
            .value_parser(value_parser!(CodingMode))
    }

    fn create_alphabet_file_argument() -> Arg {
        arg!(alphabet_file: -a --alphabet <FILE> "Text file the decoding tree is built from")
            .required(false)
            .value_parser(value_parser!(PathBuf))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            output_file: Self::extract_output_file_argument(matches),
            mode: Self::extract_mode_argument(matches),
            alphabet_file: Self::extract_alphabet_file_argument(matches),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }

    fn extract_output_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_file")
            .expect("Required argument output_file not provided")
            .clone()
    }

    fn extract_mode_argument(matches: &ArgMatches) -> CodingMode {
        matches
            .get_one::<CodingMode>("mode")
            .expect("Coding mode must be provided, but was unset.")
            .to_owned()
    }

    fn extract_alphabet_file_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("alphabet_file").cloned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Command};

    use super::{CLIParser, CodingMode};

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_input_file_argument() {
        let input_file_name = "testfile.txt";
        let command = Command::new("test");
        let command = CLIParser::register_input_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, input_file_name]);
        let input_file = CLIParser::extract_input_file_argument(&matches);
        assert_eq!(input_file.file_name().unwrap(), input_file_name);
    }

    #[test]
    fn parse_output_file_argument() {
        let output_file_name = "testfile.txt";
        let command = Command::new("test");
        let command = CLIParser::register_output_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, output_file_name]);
        let output_file = CLIParser::extract_output_file_argument(&matches);
        assert_eq!(output_file.file_name().unwrap(), output_file_name);
    }

    #[test]
    fn parse_mode_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_mode_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--mode", "decode"]);
        let mode = CLIParser::extract_mode_argument(&matches);
        assert_eq!(mode, CodingMode::Decode);
    }

    #[test]
    fn parse_mode_default_value() {
        let command = Command::new("test");
        let command = CLIParser::register_mode_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT]);
        let mode = CLIParser::extract_mode_argument(&matches);
        assert_eq!(mode, CodingMode::Encode);
    }

    #[test]
    fn parse_mode_illegal_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_mode_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--mode", "pack"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::InvalidValue);
        } else {
            panic!("Illegal value for mode not detected");
        }
    }

    #[test]
    fn parse_alphabet_file_argument() {
        let alphabet_file_name = "alphabet.txt";
        let command = Command::new("test");
        let command = CLIParser::register_alphabet_file_argument(command);
        let matches =
            command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--alphabet", alphabet_file_name]);
        let alphabet_file = CLIParser::extract_alphabet_file_argument(&matches);
        assert_eq!(
            alphabet_file.unwrap().file_name().unwrap(),
            alphabet_file_name
        );
    }

    #[test]
    fn parse_alphabet_file_argument_is_optional() {
        let command = Command::new("test");
        let command = CLIParser::register_alphabet_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT]);
        let alphabet_file = CLIParser::extract_alphabet_file_argument(&matches);
        assert!(alphabet_file.is_none());
    }

    #[test]
    fn parse_required_arguments_only() {
        let input_file_name = "inputfile.txt";
        let input_file_path = format!("/input_directory/{}", input_file_name);
        let output_file_name = "outputfile.txt";
        let output_file_path = format!("/output_directory/{}", output_file_name);
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![
            PROGRAM_NAME_ARGUMENT,
            &input_file_path,
            &output_file_path,
        ]);
        assert_eq!(
            arguments.input_file.file_name().unwrap(),
            input_file_name,
            "input file does not match"
        );
        assert_eq!(
            arguments.output_file.file_name().unwrap(),
            output_file_name,
            "output file does not match"
        );
        assert_eq!(
            arguments.mode,
            CodingMode::Encode,
            "mode does not match the default"
        );
        assert!(
            arguments.alphabet_file.is_none(),
            "alphabet file should default to none"
        );
    }
}
