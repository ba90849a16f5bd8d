// ABOUTME: CLI binary that searches a storefront for a keyword and prints the results.
// ABOUTME: One argument prints the total result count; two arguments list the products on a page.

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use digests_listing::options::DEFAULT_BASE_URL;
use digests_listing::{ResultSession, SearchClient, SearchQuery};
use tracing_subscriber::EnvFilter;

const NO_PRODUCTS: &str =
    "No products found. Either keyword has no results OR page number is to large";

#[derive(Parser, Debug)]
#[command(name = "listing")]
#[command(about = "Search a storefront and print product results")]
struct Args {
    /// Storefront base URL
    #[arg(long = "base-url", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long = "timeout", default_value_t = 10)]
    timeout: u64,

    /// Parse a saved results page instead of fetching one
    #[arg(long = "html")]
    html: Option<PathBuf>,

    /// <keyword> [<page number>]
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Validates the page argument, returning the message to print on failure.
fn parse_page(raw: &str) -> Result<u32, &'static str> {
    match raw.parse::<i32>() {
        Ok(page) if page > 0 => Ok(page as u32),
        Ok(_) => Err("ERROR: Page number must be an integer larger than zero."),
        Err(_) => Err("NumberFormatException: Possible Error - Second argument Page number \
                       must be an integer larger than zero."),
    }
}

/// Fetches (or loads) the page for `query`, printing why when that fails.
fn retrieve(args: &Args, query: &SearchQuery) -> Option<ResultSession> {
    let result = match &args.html {
        Some(path) => File::open(path)
            .and_then(ResultSession::from_reader)
            .map_err(|e| format!("IOError: could not read {:?}: {}", path, e)),
        None => SearchClient::builder()
            .base_url(args.base_url.as_str())
            .timeout(Duration::from_secs(args.timeout))
            .build()
            .and_then(|client| client.search(query))
            .map_err(|e| e.describe().to_string()),
    };

    match result {
        Ok(session) => Some(session),
        Err(message) => {
            println!("\n{}", message);
            println!("\nERROR: failed to retrieve search results.");
            None
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match args.args.as_slice() {
        [keyword] => {
            println!("keyword: {}", keyword);
            let Some(mut session) = retrieve(&args, &SearchQuery::new(keyword.as_str())) else {
                return ExitCode::from(1);
            };
            println!(
                "Searching \"{}\" resulted in {} products.",
                keyword,
                session.count()
            );
        }
        [keyword, page] => {
            let page = match parse_page(page) {
                Ok(page) => page,
                Err(message) => {
                    println!("{}", message);
                    return ExitCode::from(1);
                }
            };
            let query = SearchQuery::new(keyword.as_str()).page(page);
            let Some(mut session) = retrieve(&args, &query) else {
                return ExitCode::from(1);
            };
            println!(
                "********** All Product Results on page number {} **********",
                page
            );
            let listing = session.products_text();
            if listing.is_empty() {
                println!("{}", NO_PRODUCTS);
            } else {
                println!("{}", listing);
            }
        }
        _ => {
            println!(
                "ERROR: incorrect number of input arguments\n\
                 Format: listing <keyword> [<page number>]"
            );
            return ExitCode::from(1);
        }
    }

    ExitCode::SUCCESS
}
