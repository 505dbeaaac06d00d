use clap::Parser;
use flavor_api::{http, init_tracing, Config, FlavorStore};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let config = Config::parse();
    init_tracing(&config.log);

    let store = FlavorStore::with_options(config.store_options());
    http::serve(store, &config.addr).await
}
