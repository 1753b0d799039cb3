use clap::Parser;
use std::path::PathBuf;

/// Interactive scaffolder for TypeScript packages
#[derive(Parser, Debug)]
#[command(
    name = "vladmake",
    about = "Interactive scaffolder for TypeScript packages",
    version,
    author,
    long_about = "vladmake asks for a package name, description, keywords, author and license, \
                  writes package.json and readme.md, installs the development tooling and \
                  copies the bundled templates into the working directory.\n\n\
                  Examples:\n  \
                  vladmake\n  \
                  vladmake --dir ./my-lib\n  \
                  vladmake --installer pnpm\n  \
                  vladmake --skip-install --templates ~/my-templates"
)]
pub struct CliArgs {
    #[arg(
        long,
        value_name = "PATH",
        help = "Directory to scaffold (defaults to current directory)"
    )]
    pub dir: Option<PathBuf>,

    #[arg(
        long,
        value_name = "PATH",
        help = "Template directory to copy (overrides VLADMAKE_TEMPLATES_DIR)"
    )]
    pub templates: Option<PathBuf>,

    #[arg(
        long,
        value_name = "PROGRAM",
        help = "Dependency installer program (overrides VLADMAKE_INSTALLER)"
    )]
    pub installer: Option<String>,

    #[arg(long, help = "Do not install development dependencies")]
    pub skip_install: bool,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["vladmake"]);
        assert!(args.dir.is_none());
        assert!(args.templates.is_none());
        assert!(args.installer.is_none());
        assert!(!args.skip_install);
        assert!(args.log_level.is_none());
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_all_options() {
        let args = CliArgs::parse_from([
            "vladmake",
            "--dir",
            "/tmp/proj",
            "--templates",
            "/opt/templates",
            "--installer",
            "pnpm",
            "--skip-install",
        ]);

        assert_eq!(args.dir, Some(PathBuf::from("/tmp/proj")));
        assert_eq!(args.templates, Some(PathBuf::from("/opt/templates")));
        assert_eq!(args.installer, Some("pnpm".to_string()));
        assert!(args.skip_install);
    }

    #[test]
    fn test_verbose_flag() {
        let args = CliArgs::parse_from(["vladmake", "-v"]);
        assert!(args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_quiet_flag() {
        let args = CliArgs::parse_from(["vladmake", "-q"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(CliArgs::try_parse_from(["vladmake", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_log_level_flag() {
        let args = CliArgs::parse_from(["vladmake", "--log-level", "debug"]);
        assert_eq!(args.log_level, Some("debug".to_string()));
    }
}
