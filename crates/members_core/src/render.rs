use std::fmt::Write;

use url::Url;

use crate::query::resolve_profile_url;
use crate::MemberRecord;

/// Header cells of the rendered table, in column order.
pub const TABLE_COLUMNS: [&str; 7] = [
    "Name",
    "Gender",
    "Party",
    "Constituency",
    "Province",
    "Image",
    "MP URL",
];

/// Renders the records as an HTML `<table>`, one row per record in input order.
///
/// Every interpolated value goes through [`escape_html`]. Profile links are
/// resolved against `base_url`. The output ends at `</table>` with no
/// trailing newline.
pub fn render_table(records: &[MemberRecord], base_url: &Url) -> String {
    let mut html = String::from("<table>\n<thead>\n<tr>\n");
    for column in TABLE_COLUMNS {
        let _ = writeln!(html, "<th>{column}</th>");
    }
    html.push_str("</tr>\n</thead>\n");

    html.push_str("<tbody>\n");
    for record in records {
        render_row(&mut html, record, base_url);
    }
    html.push_str("</tbody>\n");

    html.push_str("</table>");
    html
}

fn render_row(html: &mut String, record: &MemberRecord, base_url: &Url) {
    let name = escape_html(&record.name);
    let profile_url = resolve_profile_url(base_url, &record.profile_url);

    html.push_str("<tr>\n");
    let _ = writeln!(html, "\t<td>{name}</td>");
    let _ = writeln!(html, "\t<td>{}</td>", record.gender.label());
    let _ = writeln!(html, "\t<td>{}</td>", escape_html(&record.party));
    let _ = writeln!(html, "\t<td>{}</td>", escape_html(&record.constituency));
    let _ = writeln!(html, "\t<td>{}</td>", escape_html(&record.province));
    let _ = writeln!(
        html,
        "\t<td><img src='{}' alt='{name}'></td>",
        escape_html(&record.image_url)
    );
    let _ = writeln!(
        html,
        "\t<td><a href='{}'>Link</a></td>",
        escape_html(&profile_url)
    );
    html.push_str("</tr>\n");
}

/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
