//! World-mode switch parsing.
//!
//! The device configures world mode as `"<on>"` or `"<on>;<gid1>"`. With a
//! group id present the switch only applies to SIMs reporting that GID1.

/// Whether world mode is on for a SIM reporting `gid1`.
///
/// Empty or malformed configuration reads as off. Fields are compared as
/// written, so stray whitespace never matches.
pub fn is_world_mode(config: &str, gid1: &str) -> bool {
    let mut fields: Vec<&str> = config.split(';').collect();
    // "true;" means no group id.
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }

    let on = match fields.as_slice() {
        [flag] => flag.eq_ignore_ascii_case("true"),
        [flag, gid] => flag.eq_ignore_ascii_case("true") && gid.eq_ignore_ascii_case(gid1),
        _ => false,
    };
    tracing::debug!(config, gid1, on, "world mode");
    on
}
