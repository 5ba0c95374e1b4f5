//! Byte-exact printing of lossless semantic trees.
//!
//! `print(parse(S)) == S`: the printer is a pure function of the tree, a
//! pre-order walk emitting prefix spaces, literal tokens and padded
//! children exactly as the mapper consumed them. Marker-driven punctuation
//! (trailing semicolons, omitted parentheses, trailing commas, omitted
//! braces) is honored here; nothing is normalized or reformatted.
//!
//! The base grammar lives in [`TreePrinter`]'s default methods; the
//! scripting dialect overrides just the closure form in [`GroovyPrinter`].
//! [`print`] picks the printer from the unit's dialect.

mod groovy;
mod printer;

pub use groovy::GroovyPrinter;
pub use printer::{JavaPrinter, TreePrinter};

use lst_tree::{CompilationUnit, Dialect};

/// Print a compilation unit back to source text.
pub fn print(unit: &CompilationUnit) -> String {
    let mut out = String::new();
    match unit.dialect {
        Dialect::Java => JavaPrinter.print_unit(unit, &mut out),
        Dialect::Groovy => GroovyPrinter.print_unit(unit, &mut out),
    }
    out
}
