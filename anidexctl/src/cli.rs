use anidex_core::{SortField, SortOrder};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "anidexctl",
    version,
    about = "Browse the top anime listing and search it from the terminal"
)]
pub struct Cli {
    /// API root URL (overrides ANIDEX_API_BASE)
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Entries per page, 1 to 25 (overrides ANIDEX_PAGE_LIMIT)
    #[arg(long, global = true)]
    pub limit: Option<u32>,

    /// HTTP timeout in seconds (overrides ANIDEX_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show one page of the top-ranked listing
    Top {
        #[command(flatten)]
        listing: ListingArgs,
    },
    /// Search titles on a listing page, falling back to a remote search
    Search {
        /// Title fragment to look for (case-insensitive)
        query: String,

        #[command(flatten)]
        listing: ListingArgs,
    },
}

impl Command {
    pub fn listing(&self) -> &ListingArgs {
        match self {
            Command::Top { listing } | Command::Search { listing, .. } => {
                listing
            }
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ListingArgs {
    /// Listing page to load (starts at 1)
    #[arg(
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub page: u32,

    /// Sort the page by `year` or `score`
    #[arg(long)]
    pub sort: Option<SortField>,

    /// Sort direction, `asc` or `desc`
    #[arg(long, default_value_t = SortOrder::Ascending)]
    pub order: SortOrder,

    /// Print the shown entries as a JSON array
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_sorted_search() {
        let cli = Cli::try_parse_from([
            "anidexctl", "--limit", "10", "search", "frieren", "--sort",
            "rating", "--order", "desc", "--page", "3",
        ])
        .unwrap();

        assert_eq!(cli.limit, Some(10));
        match cli.command {
            Command::Search { query, listing } => {
                assert_eq!(query, "frieren");
                assert_eq!(listing.page, 3);
                assert_eq!(listing.sort, Some(SortField::Score));
                assert_eq!(listing.order, SortOrder::Descending);
                assert!(!listing.json);
            }
            other => panic!("expected search, got {other:?}"),
        }
    }

    #[test]
    fn top_defaults() {
        let cli = Cli::try_parse_from(["anidexctl", "top"]).unwrap();
        let listing = cli.command.listing();

        assert_eq!(listing.page, 1);
        assert_eq!(listing.sort, None);
        assert_eq!(listing.order, SortOrder::Ascending);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(
            Cli::try_parse_from(["anidexctl", "top", "--page", "0"]).is_err()
        );
        assert!(
            Cli::try_parse_from(["anidexctl", "top", "--sort", "popularity"])
                .is_err()
        );
        assert!(
            Cli::try_parse_from([
                "anidexctl", "top", "--sort", "year", "--order", "sideways"
            ])
            .is_err()
        );
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "anidexctl", "top", "--api-base", "http://127.0.0.1:9/v4",
            "--timeout-secs", "3",
        ])
        .unwrap();

        assert_eq!(cli.api_base.as_deref(), Some("http://127.0.0.1:9/v4"));
        assert_eq!(cli.timeout_secs, Some(3));
    }
}
