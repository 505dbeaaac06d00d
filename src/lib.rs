mod config;
mod error;
mod flavor;
pub mod http;
mod logging;
mod query;
mod store;
mod validate;

pub use config::{Config, DEFAULT_ADDR, DEFAULT_LOG_FILTER};
pub use error::StoreError;
pub use flavor::{FlavorInput, FlavorRecord};
pub use logging::init_tracing;
pub use query::{ListQuery, PageRequest, DEFAULT_PAGE_LIMIT};
pub use store::{FlavorStore, StoreOptions};
pub use validate::{is_valid_name, NameRules, MAX_NAME_LEN};
