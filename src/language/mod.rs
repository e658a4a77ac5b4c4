//! Language taxonomy: name normalization, colors, and the helper's
//! extension registry.

mod colors;
mod normalize;
mod registry;

use indexmap::IndexMap;

pub use colors::{
    ColorSource, ColorTable, FALLBACK_COLOR, LINGUIST_LANGUAGES_URL, color_for,
    parse_linguist_colors,
};
pub use normalize::{normalize, normalize_stats};
pub use registry::{CommentSyntax, Language, LanguageRegistry};

/// Language name to an aggregated magnitude (bytes or code lines).
pub type LanguageTotals = IndexMap<String, u64>;
