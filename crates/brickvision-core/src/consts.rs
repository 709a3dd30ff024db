/// Minimum pixel count (h*w) at which callers should prefer the
/// rayon-parallel region aggregation.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Default box blur radius applied before thresholding (radius 3 = 7x7 window).
pub const DEFAULT_BLUR_RADIUS: u32 = 3;

/// Default intensity threshold separating objects from the background.
pub const DEFAULT_THRESHOLD: u8 = 65;

/// Label reserved for the background region.
pub const BACKGROUND_LABEL: usize = 0;

/// Images larger than this in both dimensions are scaled down before analysis.
pub const WORKING_MAX_WIDTH: u32 = 640;

/// See [`WORKING_MAX_WIDTH`].
pub const WORKING_MAX_HEIGHT: u32 = 480;

/// Default side length (pixels) of the square marker drawn at a centroid.
pub const DEFAULT_MARKER_SIZE: u32 = 5;

/// Marker color for region centroids (RGB).
pub const MARKER_COLOR: [u8; 3] = [255, 0, 0];

/// Cross color for region centroids (RGB).
pub const CROSS_COLOR: [u8; 3] = [0, 255, 0];

/// Default median filter radius before edge detection (radius 1 = 3x3 window).
pub const DEFAULT_MEDIAN_RADIUS: u32 = 1;

/// Default low hysteresis threshold for Canny edge detection.
pub const DEFAULT_CANNY_LOW: f32 = 240.0;

/// Default high hysteresis threshold for Canny edge detection.
pub const DEFAULT_CANNY_HIGH: f32 = 255.0;

/// Default erosion radius applied to the edge mask (0 disables).
pub const DEFAULT_ERODE_RADIUS: u8 = 0;

/// Default dilation radius applied to the edge mask (0 disables).
pub const DEFAULT_DILATE_RADIUS: u8 = 1;
