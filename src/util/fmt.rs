use std::fmt::{self, Debug, Formatter};

/// Wraps a pre-rendered string so that it is written verbatim in Debug output, without the quotes
/// and escapes that `String`'s Debug would add.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
