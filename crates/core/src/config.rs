//! Default locations and file names.

/// Pair list read when no `--pairs` is given.
pub const DEFAULT_PAIRS_FILE: &str = "fonts.txt";

/// Font cache directory.
pub const DEFAULT_FONTS_DIR: &str = "fonts";

/// Where previews and the comparison sheet are written.
pub const DEFAULT_OUTPUT_DIR: &str = "font_previews";

/// File name of the comparison sheet inside the output directory.
pub const COMPARISON_FILENAME: &str = "font_comparison.png";

/// Extension of every generated image.
pub const PREVIEW_EXTENSION: &str = "png";

/// Header logo picked up from the working directory, in order of preference.
pub const LOGO_FILENAMES: [&str; 2] = ["logo.jpg", "logo.png"];

/// Format of the "Generated on" footer stamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
