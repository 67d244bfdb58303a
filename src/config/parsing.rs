// src/config/parsing.rs

use crate::errors::Error;
use byte_unit::Byte;
use std::str::FromStr;

/// Parses a human-readable byte size (e.g. `"1M"`, `"512k"`) into a `u64`.
/// `None` input yields `None`, preserving "no override" semantics for
/// optional CLI flags.
pub(super) fn parse_byte_size(input: Option<&str>) -> Result<Option<u64>, Error> {
    input
        .map(|s| {
            Byte::from_str(s)
                .map(|b| b.as_u64())
                .map_err(|e| Error::InvalidOptions(format!("invalid size '{s}': {e}")))
        })
        .transpose()
}
