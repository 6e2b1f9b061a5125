//! Scan configuration types

use std::collections::HashMap;
use crate::image_pipeline::symbols::types::SymbolType;

/// Largest frame dimension a JPEG header can declare.
pub const JPEG_MAX_DIMENSION: usize = u16::MAX as usize;

/// Which symbologies are reported.
///
/// A default applies to every type, including ones only known to a backend,
/// and individual types can be switched on or off on top of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbologySet {
    default_enabled: bool,
    overrides: HashMap<SymbolType, bool>,
}

impl SymbologySet {
    pub fn all() -> Self {
        Self {
            default_enabled: true,
            overrides: HashMap::new(),
        }
    }

    pub fn none() -> Self {
        Self {
            default_enabled: false,
            overrides: HashMap::new(),
        }
    }

    pub fn enable(mut self, symbol_type: SymbolType) -> Self {
        self.overrides.insert(symbol_type, true);
        self
    }

    pub fn disable(mut self, symbol_type: SymbolType) -> Self {
        self.overrides.insert(symbol_type, false);
        self
    }

    pub fn is_enabled(&self, symbol_type: &SymbolType) -> bool {
        self.overrides
            .get(symbol_type)
            .copied()
            .unwrap_or(self.default_enabled)
    }
}

impl Default for SymbologySet {
    fn default() -> Self {
        Self::all()
    }
}

/// Configuration for a JPEG scan
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Symbologies to report
    pub symbologies: SymbologySet,
    /// Whether to validate image dimensions before conversion
    pub validate_dimensions: bool,
    /// Upper bound on width and height when validating
    pub max_dimension: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            symbologies: SymbologySet::all(),
            validate_dimensions: true,
            max_dimension: Some(JPEG_MAX_DIMENSION),
        }
    }
}

impl ScanConfig {
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }
}

/// Builder for ScanConfig
#[derive(Default)]
pub struct ScanConfigBuilder {
    symbologies: Option<SymbologySet>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl ScanConfigBuilder {
    pub fn symbologies(mut self, symbologies: SymbologySet) -> Self {
        self.symbologies = Some(symbologies);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> ScanConfig {
        let default = ScanConfig::default();
        ScanConfig {
            symbologies: self.symbologies.unwrap_or(default.symbologies),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
