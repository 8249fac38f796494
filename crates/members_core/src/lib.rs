//! Members core: record model, query URLs and table rendering. No IO.
mod query;
mod record;
mod render;

pub use query::{build_query_url, resolve_profile_url};
pub use record::{Gender, MemberRecord};
pub use render::{escape_html, render_table, TABLE_COLUMNS};
