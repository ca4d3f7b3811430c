//! Serializers for generated palettes.
//!
//! - [`tailwind`]: Tailwind CSS v4 `@theme` blocks.
//! - [`nativewind`]: NativeWind CSS variables plus a TypeScript color table.
//! - [`table`]: plain light/dark tables for programmatic use.
//!
//! Every `render_*` function is pure over already-generated
//! [`ThemeColors`](crate::ThemeColors); the `generate_*` wrappers run the
//! generator first.

pub mod nativewind;
pub mod table;
pub mod tailwind;

use std::fmt::Write;

/// Appends one `{indent}{prefix}{key}: {value};` line per entry.
fn push_declarations<'a, I>(out: &mut String, indent: &str, prefix: &str, entries: I)
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    for (key, value) in entries {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}{}{}: {};", indent, prefix, key, value);
    }
}
