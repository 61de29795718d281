use apk_graph::application::dto::OutputFormat;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Analyze the dependency graph of an Alpine Linux package index
#[derive(Parser, Debug)]
#[command(name = "apk-graph")]
#[command(version)]
#[command(
    about = "Analyze the dependency graph of an Alpine Linux package index (APKINDEX)",
    long_about = None
)]
pub struct Args {
    /// Path to the APKINDEX file, or `-` for stdin (default: ./APKINDEX)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub index: Option<PathBuf>,

    /// Output format: json or text
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Config file path (default: ./apk-graph.config.yml if present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Size impact, bus factor and depth of a package
    Stats {
        /// Package name (default: configured package, busybox, or the first record)
        package: Option<String>,
    },

    /// Packages with the most direct dependents
    Critical {
        /// Number of packages to list
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Dependency cycles
    Cycles,

    /// Packages no other package depends on
    Leaves,

    /// Shortest dependency chain from one package to another
    Path {
        from: String,
        to: String,
    },

    /// Subgraph around a package
    Subgraph {
        /// Package name (default: configured package, busybox, or the first record)
        package: Option<String>,

        /// Maximum number of dependency hops to follow
        #[arg(short, long, conflicts_with = "transitive")]
        depth: Option<usize>,

        /// Full forward and reverse closure instead of a depth-bounded walk
        #[arg(short, long)]
        transitive: bool,
    },

    /// Search package names and descriptions
    Search {
        /// Case-insensitive text, at least 2 characters
        query: String,
    },

    /// Summary of the whole index
    Overview {
        /// Number of critical packages to list
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Full metadata and stats of a package
    Details {
        package: String,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("apk-graph").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args = parse(&["critical", "--limit", "5", "-f", "text", "-i", "idx", "-vv"]);

        assert_eq!(args.command, Command::Critical { limit: Some(5) });
        assert_eq!(args.format, Some(OutputFormat::Text));
        assert_eq!(args.index, Some(PathBuf::from("idx")));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_parse_subgraph() {
        let args = parse(&["subgraph", "curl", "--depth", "3"]);
        assert_eq!(
            args.command,
            Command::Subgraph {
                package: Some("curl".to_string()),
                depth: Some(3),
                transitive: false
            }
        );

        let args = parse(&["subgraph", "--transitive"]);
        assert_eq!(
            args.command,
            Command::Subgraph {
                package: None,
                depth: None,
                transitive: true
            }
        );
    }

    #[test]
    fn test_depth_conflicts_with_transitive() {
        let result = Args::try_parse_from(["apk-graph", "subgraph", "-d", "2", "-t"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_path_requires_two_names() {
        assert!(Args::try_parse_from(["apk-graph", "path", "curl"]).is_err());
        let args = parse(&["path", "curl", "musl"]);
        assert_eq!(
            args.command,
            Command::Path {
                from: "curl".to_string(),
                to: "musl".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_format_rejected() {
        assert!(Args::try_parse_from(["apk-graph", "-f", "yaml", "leaves"]).is_err());
    }

    #[test]
    fn test_stdin_index() {
        let args = parse(&["-i", "-", "leaves"]);
        assert_eq!(args.index, Some(PathBuf::from("-")));
    }
}
