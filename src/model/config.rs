//! Parser configuration

/// Configuration for parsing IRMF documents
///
/// The default configuration is tolerant: hand-written headers with trailing
/// commas or unquoted keys are repaired, and `gzip` / `gzip+base64` bodies
/// are decoded.
///
/// # Example
///
/// ```
/// use libirmf::ParserConfig;
///
/// // Reject anything that is not already strict JSON
/// let config = ParserConfig::strict();
/// assert!(!config.header_repair());
/// assert!(config.body_decoding());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    header_repair: bool,
    body_decoding: bool,
}

impl ParserConfig {
    /// Create the default, tolerant configuration
    pub fn new() -> Self {
        Self {
            header_repair: true,
            body_decoding: true,
        }
    }

    /// Create a configuration that parses headers as strict JSON
    pub fn strict() -> Self {
        Self::new().with_header_repair(false)
    }

    /// Enable or disable the trailing-comma and unquoted-key repair pass
    pub fn with_header_repair(mut self, enabled: bool) -> Self {
        self.header_repair = enabled;
        self
    }

    /// Enable or disable decoding of encoded shader bodies
    ///
    /// When disabled, a document declaring an encoding fails with a body
    /// decoding error instead of being decompressed.
    pub fn with_body_decoding(mut self, enabled: bool) -> Self {
        self.body_decoding = enabled;
        self
    }

    /// Whether the header repair pass runs
    pub fn header_repair(&self) -> bool {
        self.header_repair
    }

    /// Whether encoded bodies are decoded
    pub fn body_decoding(&self) -> bool {
        self.body_decoding
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}
