use std::io::{self, Write};

pub const ARRAY_NAME: &str = "add_edit_badge_dialog_outline_colors";
pub const CLOSING_TAG: &str = "</array>";

/// Builds the resource `<array>`, one `<item>` line per color in input order.
pub fn render(colors: &[String]) -> String {
    let mut text = format!("<array name=\"{}\">\n", ARRAY_NAME);
    for color in colors {
        text.push_str(&format!("    <item>{}</item>\n", color));
    }
    text.push_str(CLOSING_TAG);
    text.push('\n');
    text
}

pub fn render_to<W: Write>(out: &mut W, colors: &[String]) -> io::Result<()> {
    out.write_all(render(colors).as_bytes())
}
