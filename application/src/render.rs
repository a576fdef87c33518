//! Plain text rendering of a promotions [`Selection`].

use std::fmt;

use service::{
    domain::Promotion,
    read::{promotion::Highlight, Selection},
};

/// Renders the provided [`Selection`] as plain text, the primary
/// [`Promotion`] first.
#[must_use]
pub fn selection(selection: &Selection) -> String {
    let Some(primary) = &selection.primary else {
        return "No promotions to display.\n".to_owned();
    };

    let mut out = String::new();
    // Writing into a `String` never fails.
    _ = highlight(&mut out, primary, true);
    if !selection.secondary.is_empty() {
        out.push_str("\nAlso available:\n");
        for h in &selection.secondary {
            _ = highlight(&mut out, h, false);
        }
    }
    out
}

/// Writes the provided [`Highlight`] into the `out`put.
fn highlight(
    out: &mut impl fmt::Write,
    highlight: &Highlight,
    is_primary: bool,
) -> fmt::Result {
    let Highlight {
        promotion:
            Promotion {
                title,
                description,
                discount,
                button_text,
                ..
            },
        time_left,
    } = highlight;

    let marker = if is_primary { '*' } else { '-' };
    write!(out, "{marker} {title} ({discount})")?;
    if let Some(left) = time_left {
        write!(out, ", {left}")?;
    }
    writeln!(out)?;
    if is_primary {
        writeln!(out, "  {description}")?;
        writeln!(out, "  [{button_text}]")?;
    }
    Ok(())
}
