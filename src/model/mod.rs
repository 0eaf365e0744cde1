//! Data structures representing IRMF documents

mod config;
mod document;
mod options;

pub use config::ParserConfig;
pub use document::{Document, FORMAT_VERSION, Header, KNOWN_KEYS, MAX_MATERIALS};
pub use options::{
    Encoding, MAX_COLOR_OVERRIDES, Options, RESOLUTIONS, Rgba, RuntimeUniforms,
};
