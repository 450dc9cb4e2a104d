//! Benchmark name decoding.
//!
//! Benchmark identifiers encode what they measure:
//!
//! ```text
//! BM_SIMD_float256_add_1024
//! BM_Plain_int128_with_int32_t_mul_64
//!    ^^^^^ ^^^^^^^^^^^^^^^^^^^ ^^^ ^^
//!    |     data type           op  size
//!    category
//! ```
//!
//! Decoding tries each [`Grammar`] in priority order and falls back to an
//! all-`Unknown` result, so it never fails.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::record::Category;

/// Sentinel used for every field of an undecodable name.
pub const UNKNOWN: &str = "Unknown";

/// Suffix of fixed-width integer type tags such as `int32_t`.
const TYPE_TAG_SUFFIX: &str = "_t";

/// `BM_<cat>_<base>[_with_<secondary>]_<op>[_<op2>]_<size>`
static FULL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^BM_(SIMD|Plain)_([^_]+)(?:_with_([^_]+(?:_t)?))?((?:_[^_]+){1,2})_(\d+)")
        .expect("full grammar regex is valid")
});

/// `BM_<cat>_<type>_<op>_<size>`
static SIMPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^BM_(SIMD|Plain)_([^_]+)_([^_]+)_(\d+)").expect("simple grammar regex is valid")
});

/// Fields recovered from a benchmark identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedName {
    /// Implementation variant.
    pub category: Category,
    /// Operand type, including any `_with_<secondary>` clause.
    pub data_type: String,
    /// Operation name.
    pub operation: String,
    /// Problem size as written.
    pub size: String,
}

impl DecodedName {
    /// The terminal fallback: every field `Unknown`.
    pub fn unknown() -> Self {
        Self {
            category: Category::Unknown,
            data_type: UNKNOWN.into(),
            operation: UNKNOWN.into(),
            size: UNKNOWN.into(),
        }
    }

    /// Whether this is the terminal fallback.
    pub fn is_unknown(&self) -> bool {
        self.category == Category::Unknown
    }
}

/// A naming grammar, in the order [`decode_name`] tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// Category, base type, optional secondary type, one or two operation
    /// segments and a size.
    Full,
    /// Strict four-field form: category, type, operation, size.
    Simple,
}

impl Grammar {
    /// Grammars in priority order.
    pub const PRIORITY: [Self; 2] = [Self::Full, Self::Simple];

    /// Attempt to decode `name` with this grammar alone.
    pub fn try_decode(self, name: &str) -> Option<DecodedName> {
        match self {
            Self::Full => decode_full(name),
            Self::Simple => decode_simple(name),
        }
    }
}

/// Decode a benchmark identifier, falling back to [`DecodedName::unknown`].
pub fn decode_name(name: &str) -> DecodedName {
    Grammar::PRIORITY
        .iter()
        .find_map(|grammar| grammar.try_decode(name))
        .unwrap_or_else(DecodedName::unknown)
}

fn decode_full(name: &str) -> Option<DecodedName> {
    let caps = FULL.captures(name)?;

    let base_type = &caps[2];
    let data_type = match caps.get(3) {
        Some(with_type) => format!("{base_type}_with_{}", with_type.as_str()),
        None => base_type.to_string(),
    };

    let operation_part = caps[4].trim_matches('_');
    let operation = if operation_part.ends_with(TYPE_TAG_SUFFIX) {
        // The segment carries a type tag; the operation is its last token.
        operation_part
            .rsplit('_')
            .next()
            .unwrap_or(operation_part)
            .to_string()
    } else {
        operation_part.to_string()
    };

    Some(DecodedName {
        category: Category::from_marker(&caps[1]),
        data_type,
        operation,
        size: caps[5].to_string(),
    })
}

fn decode_simple(name: &str) -> Option<DecodedName> {
    let caps = SIMPLE.captures(name)?;
    Some(DecodedName {
        category: Category::from_marker(&caps[1]),
        data_type: caps[2].to_string(),
        operation: caps[3].to_string(),
        size: caps[4].to_string(),
    })
}
