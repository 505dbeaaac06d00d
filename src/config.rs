//! Server configuration from command-line flags and environment variables.

use clap::Parser;

use crate::query::DEFAULT_PAGE_LIMIT;
use crate::store::StoreOptions;
use crate::validate::NameRules;

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_LOG_FILTER: &str = "flavor_api=info";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "flavor-api", version, about = "In-memory flavor catalogue over HTTP")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "FLAVOR_API_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,

    /// Page size used when a list request gives `page` without `limit`.
    #[arg(
        long,
        env = "FLAVOR_API_DEFAULT_LIMIT",
        default_value_t = DEFAULT_PAGE_LIMIT,
        value_parser = parse_limit
    )]
    pub default_limit: usize,

    /// Accept multi-word names such as "bourbon vanilla".
    #[arg(long, env = "FLAVOR_API_ALLOW_SPACED_NAMES", default_value_t = false)]
    pub allow_spaced_names: bool,

    /// Tracing filter directive, e.g. `flavor_api=debug`.
    #[arg(long, env = "FLAVOR_API_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log: String,
}

impl Config {
    pub fn store_options(&self) -> StoreOptions {
        let name_rules = if self.allow_spaced_names {
            NameRules::with_word_spaces()
        } else {
            NameRules::default()
        };
        StoreOptions {
            name_rules,
            default_limit: self.default_limit,
        }
    }
}

fn parse_limit(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("default limit must be a positive integer, got {:?}", raw)),
    }
}
