pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{localize_for_country, DeAddressDecorator};
pub use domain::model::Address;
pub use domain::ports::AddressView;
pub use utils::error::{AddressError, Result};
