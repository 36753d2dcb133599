//! Pizza Co. Common Library
//!
//! ターミナル・デスクトップ・Web(WASM)で共有されるカタログ、注文台帳、営業時間判定、画面モデル

pub mod error;
pub mod catalog;
pub mod filter;
pub mod ledger;
pub mod availability;
pub mod storefront;
#[cfg(feature = "config")]
pub mod config;

pub use error::{Error, Result};
pub use catalog::{PizzaRecord, CATALOG, find, find_ignore_case, image_url};
pub use filter::filter_catalog;
pub use ledger::{Confirm, MutationOutcome, OrderLedger, OrderLine};
pub use availability::{is_open, OPEN_HOUR, CLOSE_HOUR};
pub use storefront::{FooterState, MenuState, Storefront};
#[cfg(feature = "config")]
pub use config::Config;
