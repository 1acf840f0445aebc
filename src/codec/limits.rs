/// Upper bounds applied to lengths and counts read off the wire.
///
/// A corrupt length field is rejected against these before anything is
/// allocated.
#[derive(Copy, Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Limits {
    /// Largest accepted string payload, in bytes.
    pub max_string_len: u32,
    /// Largest accepted element count for a sequence.
    pub max_seq_len: u32,
    /// Deepest accepted nesting of a shape descriptor.
    pub max_depth: u32,
}

impl Limits {
    pub const DEFAULT_MAX_STRING_LEN: u32 = 16 * 1024 * 1024;
    pub const DEFAULT_MAX_SEQ_LEN: u32 = 16 * 1024 * 1024;
    pub const DEFAULT_MAX_DEPTH: u32 = 32;
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_string_len: Self::DEFAULT_MAX_STRING_LEN,
            max_seq_len: Self::DEFAULT_MAX_SEQ_LEN,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
