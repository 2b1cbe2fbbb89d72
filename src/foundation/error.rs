/// Convenience result type used across rasterkit.
pub type RasterResult<T> = Result<T, RasterError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum RasterError {
    /// Missing or unrecognized argument (component name, flip direction, seed count, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Pixel constructed with a negative color channel.
    #[error("invalid pixel: {0}")]
    InvalidPixel(String),

    /// Kernel coefficients that are empty, ragged, or even-sized.
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Color matrix coefficients that are not exactly 3x3.
    #[error("invalid color matrix: {0}")]
    InvalidMatrix(String),

    /// Name lookup miss in the image store.
    #[error("image not found: {0}")]
    ImageNotFound(String),

    /// Operation name that is not in the registry.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Malformed input bytes at the load boundary.
    #[error("decode error: {0}")]
    Decode(String),

    /// Failure while serializing a grid at the save boundary.
    #[error("encode error: {0}")]
    Encode(String),

    /// Kernel offset or grid coordinate outside its extent.
    #[error("out of bounds: {0}")]
    OutOfBounds(String),

    /// Grid without pixel storage.
    #[error("uninitialized image: {0}")]
    UninitializedImage(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RasterError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_pixel(msg: impl Into<String>) -> Self {
        Self::InvalidPixel(msg.into())
    }

    pub fn invalid_kernel(msg: impl Into<String>) -> Self {
        Self::InvalidKernel(msg.into())
    }

    pub fn invalid_matrix(msg: impl Into<String>) -> Self {
        Self::InvalidMatrix(msg.into())
    }

    pub fn image_not_found(name: impl Into<String>) -> Self {
        Self::ImageNotFound(name.into())
    }

    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand(name.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn out_of_bounds(msg: impl Into<String>) -> Self {
        Self::OutOfBounds(msg.into())
    }

    pub fn uninitialized(msg: impl Into<String>) -> Self {
        Self::UninitializedImage(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
