use thiserror::Error;

/// Failures of point indexing, vector construction and named lookups.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorError {
    #[error("index {0} out of range, a point only has indices 0 and 1")]
    IndexOutOfRange(usize),

    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    #[error("invalid construction: either an end point or an angle with a length is required")]
    InvalidConstruction,

    #[error("type mismatch: `{name}` is not a {expected}")]
    TypeMismatch { name: String, expected: &'static str },

    #[error("unknown item: `{0}`")]
    UnknownItem(String),
}

/// Failures of the raster plot.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid axis limits: ({0}, {1})")]
    InvalidLimits(f64, f64),

    #[error("cannot allocate a {0}x{1} canvas")]
    Canvas(u32, u32),

    #[error("png encoding failed")]
    Encode(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Failures of the preview window.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("cannot create window")]
    Window(#[from] winit::error::OsError),

    #[error("pixel buffer failure")]
    Pixels(#[from] pixels::Error),

    #[error("cannot resize surface")]
    Texture(#[from] pixels::TextureError),

    #[error("pixel buffer size {0} does not match plot size {1}")]
    FrameSize(usize, usize),
}
