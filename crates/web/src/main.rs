use std::process;

use database::DatabaseConfig;
use preparedness::seed;
use web::{start_web_server, WebConfig, WebState};

#[tokio::main]
async fn main() {
    env_logger::init();

    // database
    let storage = match database::connect(DatabaseConfig::from_env()).await {
        Ok(storage) => storage,
        Err(why) => {
            log::error!("{}", why);
            process::exit(1);
        }
    };
    if let Err(why) = seed::initialize_all(storage.as_ref()).await {
        log::error!("could not initialize reference data: {}", why);
        process::exit(1);
    }

    // web server
    if let Err(why) = start_web_server(WebConfig::from_env(), WebState { storage }).await {
        log::error!("web server stopped: {}", why);
        process::exit(1);
    }
}
