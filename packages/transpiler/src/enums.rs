//! Enum and flag decoding
//!
//! Turns numeric enum values and bit masks back into member names, for
//! diagnostics and generated comments. Tables are ordered `(name, value)`
//! slices supplied by the caller; their order decides which alias is reported
//! when several names share a value.

use bitflags::Flags;
use ts::TypeFlags;

/// Returned by [`enum_name`] when no entry matches.
pub const UNKNOWN_ENUM_NAME: &str = "unknown";

/// Name of the first entry whose value equals `value`.
pub fn enum_name<'n>(value: i64, table: &[(&'n str, i64)]) -> &'n str {
    table
        .iter()
        .find(|(_, v)| *v == value)
        .map(|(name, _)| *name)
        .unwrap_or(UNKNOWN_ENUM_NAME)
}

/// Names of the entries that share at least one bit with `mask` and are not
/// numerically larger than it, in table order.
///
/// The magnitude check drops composite aliases (e.g. `STRING_LIKE`) that
/// overlap the mask but cover bits it does not set.
pub fn enum_names<'n>(mask: i64, table: &[(&'n str, i64)]) -> Vec<&'n str> {
    table
        .iter()
        .filter(|(_, value)| mask & *value != 0 && *value <= mask)
        .map(|(name, _)| *name)
        .collect()
}

/// Decoder table for a `bitflags` type, in declaration order.
pub fn flag_table<F>() -> Vec<(&'static str, i64)>
where
    F: Flags + 'static,
    F::Bits: Into<i64>,
{
    F::FLAGS
        .iter()
        .map(|flag| (flag.name(), flag.value().bits().into()))
        .collect()
}

/// `STRING | OBJECT`-style rendering of type flags, for log output.
pub fn describe_type_flags(flags: TypeFlags) -> String {
    let table = flag_table::<TypeFlags>();
    let names = enum_names(i64::from(flags.bits()), &table);
    if names.is_empty() {
        return "NONE".to_string();
    }
    names.join(" | ")
}
