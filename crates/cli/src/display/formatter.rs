use serde::Serialize;

/// One line of the `roots` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootRow {
    pub name: String,
    pub path: String,
    pub exists: bool,
    pub active: bool,
}

/// Render roots as an aligned table; the active root is starred.
pub fn format_roots(rows: &[RootRow]) -> String {
    if rows.is_empty() {
        return "No roots configured\n".to_string();
    }

    let width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for row in rows {
        let marker = if row.active { '*' } else { ' ' };
        let status = if row.exists { "" } else { "  (missing)" };
        out.push_str(&format!(
            "{marker} {:<width$}  {}{}\n",
            row.name, row.path, status
        ));
    }
    out
}
