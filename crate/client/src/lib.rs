pub use config::{ClientConf, SONIC_CLI_CONF_ENV};
pub use error::RestClientError;
pub use rest_client::RestClient;
pub use result::{RestClientResult, RestClientResultHelper};

mod config;
mod error;
mod rest_client;
mod result;
