//! Template interpolation
//!
//! Long-form templates carry `{0}`, `{1}`, ... slots. Rendering replaces
//! each slot with the stringified argument at that position; the result is
//! the human-readable message, so no percent-encoding is applied here.

use minerr_core::ErrorArg;

/// Replaces `{i}` slots with the stringified arguments.
///
/// Slots without a matching argument are left intact, so a template can be
/// rendered with fewer arguments than it declares.
pub fn interpolate(template: &str, args: &[ErrorArg]) -> String {
    let mut rendered = template.to_string();
    for (position, arg) in args.iter().enumerate() {
        let slot = format!("{{{}}}", position);
        rendered = rendered.replace(&slot, arg.stringify());
    }
    rendered
}
