use crate::error::ConvertError;

/// Default output width in characters
pub const DEFAULT_WIDTH: u32 = 80;

/// Default pixel edge of the square cell allocated per character when
/// re-rendering ASCII text as a raster image
pub const DEFAULT_GLYPH_SIZE: u32 = 10;

/// Configuration for ASCII art conversion
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Output width in characters, default 80
    pub width: u32,
    /// Glyph cell size in pixels for raster export, default 10
    pub glyph_size: u32,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            glyph_size: DEFAULT_GLYPH_SIZE,
        }
    }
}

impl ConvertConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.width == 0 {
            return Err(ConvertError::InvalidConfig(
                "width must be at least 1".to_string(),
            ));
        }
        if self.glyph_size == 0 {
            return Err(ConvertError::InvalidConfig(
                "glyph_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
