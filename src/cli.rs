use std::path::PathBuf;

use clap::Parser;

use marketplace_sort::view::catalog::ViewKind;

#[derive(Parser, Debug)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_BUILD_DATE"), ")"), about)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// List view to query
    #[arg(value_enum)]
    pub view: ViewKind,

    /// Click the sort arrow of a column, applied in order
    #[arg(short, long = "toggle", value_name = "COLUMN,DIR")]
    pub toggles: Vec<String>,

    /// Allow only one sorted column, overrides the view config
    #[arg(short, long)]
    pub single: bool,

    /// Fetch the page after sorting and print it
    #[arg(short, long)]
    pub fetch: bool,

    /// Page number, zero based
    #[arg(short, long, default_value_t = 0)]
    pub page: u32,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_toggles() {
        let args = Args::try_parse_from([
            "marketplace-sort",
            "projects",
            "-t",
            "status,desc",
            "--toggle",
            "title,asc",
            "--single",
            "--page",
            "3",
        ])
        .unwrap();
        assert_eq!(args.view, ViewKind::Projects);
        assert_eq!(args.toggles, vec!["status,desc".to_owned(), "title,asc".to_owned()]);
        assert!(args.single);
        assert!(!args.fetch);
        assert_eq!(args.page, 3);
        assert_eq!(args.config, None);

        assert!(Args::try_parse_from(["marketplace-sort", "portfolios"]).is_err());
    }
}
