use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Sample plane length {actual} does not match image area {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Image width {width} is not a multiple of the engine block size {block_size}")]
    BlockAlignment { width: usize, block_size: usize },

    #[error("Failed to allocate {0} bytes for sample planes")]
    AllocationError(usize),

    #[error("Artifact removal engine error: {0}")]
    EngineError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_alignment_message() {
        let error = ConversionError::BlockAlignment { width: 17, block_size: 16 };
        assert_eq!(
            error.to_string(),
            "Image width 17 is not a multiple of the engine block size 16"
        );
    }

    #[test]
    fn test_invalid_dimensions_message() {
        let error = ConversionError::InvalidDimensions(0, 4);
        assert_eq!(error.to_string(), "Invalid image dimensions: width=0, height=4");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: ConversionError = io.into();
        assert!(matches!(error, ConversionError::IoError(_)));
    }
}
