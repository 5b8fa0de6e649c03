pub mod constants;
mod allowed_headers;
mod allowed_methods;
mod builder;
mod context;
mod cors;
mod exposed_headers;
mod header_writer;
mod headers;
#[cfg(feature = "http")]
mod http_adapter;
mod max_age;
mod options;
mod origin;
#[cfg(feature = "serde")]
mod settings;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use builder::CorsBuilder;
pub use context::{Completed, HttpContext};
pub use cors::Cors;
pub use exposed_headers::ExposedHeaders;
pub use headers::Headers;
pub use max_age::MaxAge;
pub use options::{CorsOptions, ValidationError};
pub use origin::{Origin, OriginList};
#[cfg(feature = "serde")]
pub use settings::CorsSettings;
