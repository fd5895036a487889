//! Plain-text table rendering for resource lists.

use crate::config::ResourceDescriptor;
use crate::error::AppError;
use crate::model::Resource;
use serde_json::Value;
use unicode_width::UnicodeWidthStr;

/// Render the descriptor's table columns (id first, then every non-sensitive
/// field marked for tables) as an aligned plain-text table.
pub fn render_table<R: Resource>(
    descriptor: &ResourceDescriptor,
    rows: &[R],
) -> Result<String, AppError> {
    let mut headers = vec!["ID".to_string()];
    headers.extend(descriptor.table_fields().map(|f| f.label.to_string()));

    let mut body = Vec::with_capacity(rows.len());
    for row in rows {
        let value = serde_json::to_value(row).map_err(|e| AppError::Decode(e.to_string()))?;
        let mut cells = vec![cell_text(value.get("id"))];
        for field in descriptor.table_fields() {
            cells.push(cell_text(value.get(field.name)));
        }
        body.push(cells);
    }
    Ok(render(&headers, &body))
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
    }
}

fn render(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(cell);
        if i + 1 < cells.len() {
            let pad = widths[i].saturating_sub(cell.width());
            out.push_str(&" ".repeat(pad));
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Registry, ResourceKind};
    use crate::model::{Skill, SkillDomain};
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn skill_table_shows_name_and_category() {
        let registry = Registry::portfolio();
        let descriptor = registry.descriptor(ResourceKind::Skill).unwrap();
        let now = Utc::now();
        let rows = vec![Skill {
            id: Uuid::nil(),
            name: "TypeScript".to_string(),
            category: SkillDomain::Frontend,
            created_at: now,
            updated_at: now,
        }];

        let rendered = render_table(descriptor, &rows).unwrap();
        let mut lines = rendered.lines();
        let header = lines.next().unwrap();
        assert!(header.contains("Name"));
        assert!(header.contains("Category"));
        let rule = lines.next().unwrap();
        assert!(rule.starts_with('-'));
        let row = lines.next().unwrap();
        assert!(row.contains("TypeScript"));
        assert!(row.contains("FRONTEND"));
    }

    #[test]
    fn list_cells_join_with_commas() {
        assert_eq!(
            cell_text(Some(&serde_json::json!(["React", "Vue"]))),
            "React, Vue"
        );
        assert_eq!(cell_text(None), "");
    }
}
