//! Scripting-dialect printer overrides.
//!
//! A single replaced method: closures print as `{ params -> body }` instead
//! of the shared grammar's `(params) -> body`. Everything else falls through
//! to the default methods, including omitted-parentheses argument lists,
//! which are marker-driven in the base container printing.

use crate::printer::TreePrinter;
use lst_tree::Lambda;

pub struct GroovyPrinter;

impl TreePrinter for GroovyPrinter {
    fn print_lambda(&self, lambda: &Lambda, out: &mut String) {
        lambda.prefix.print_into(out);
        out.push('{');
        for (i, param) in lambda.params.params.iter().enumerate() {
            self.print_statement(&param.elem, out);
            param.after.print_into(out);
            if i + 1 < lambda.params.params.len() {
                out.push(',');
            }
        }
        // `{ it }` has no declared parameters and no arrow; an explicit
        // empty parameter list (`{ -> ... }`) carries an Empty param.
        if !lambda.params.params.is_empty() {
            lambda.arrow.print_into(out);
            out.push_str("->");
        }
        self.print_statement(&lambda.body, out);
        out.push('}');
    }
}
