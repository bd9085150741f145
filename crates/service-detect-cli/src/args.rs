use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use service_detect_core::DEFAULT_OUTPUT_FILE;

#[derive(Parser)]
#[command(name = "service-detect")]
#[command(about = "Detect service from CLI argument and write to output.txt")]
#[command(version)]
#[command(override_usage = "service-detect [OPTIONS] <ID_STRING>\n       service-detect --completions <SHELL>")]
pub struct Cli {
    /// The ID string to detect (e.g., 105-904-7569, 1079429, F107ZKKK)
    #[arg(
        required_unless_present = "completions",
        value_parser = clap::value_parser!(OsString)
    )]
    pub id_string: Option<OsString>,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["service-detect", "1079429"]).unwrap();
        assert_eq!(cli.id_string, Some(OsString::from("1079429")));
        assert_eq!(cli.output, PathBuf::from("output.txt"));
        assert!(!cli.debug);
        assert!(!cli.verbose);
        assert!(cli.completions.is_none());
    }

    #[test]
    fn test_short_flags() {
        let cli =
            Cli::try_parse_from(["service-detect", "-d", "-o", "out.txt", "F107ZKKK"]).unwrap();
        assert!(cli.debug);
        assert_eq!(cli.output, PathBuf::from("out.txt"));
    }

    #[test]
    fn test_empty_id_is_accepted() {
        let cli = Cli::try_parse_from(["service-detect", ""]).unwrap();
        assert_eq!(cli.id_string, Some(OsString::new()));
    }

    #[test]
    fn test_missing_id_is_rejected() {
        assert!(Cli::try_parse_from(["service-detect"]).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_id_is_accepted() {
        use std::os::unix::ffi::OsStrExt;

        let id = std::ffi::OsStr::from_bytes(b"A\xff");
        let cli = Cli::try_parse_from([OsString::from("service-detect"), id.to_os_string()])
            .unwrap();
        assert_eq!(cli.id_string.as_deref(), Some(id));
    }

    #[test]
    fn test_usage_shows_required_id() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("service-detect [OPTIONS] <ID_STRING>"), "{}", help);
    }

    #[test]
    fn test_completions_without_id() {
        let cli = Cli::try_parse_from(["service-detect", "--completions", "zsh"]).unwrap();
        assert!(matches!(cli.completions, Some(Shell::Zsh)));
        assert!(cli.id_string.is_none());
    }
}
