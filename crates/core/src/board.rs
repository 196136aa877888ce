//! Column grouping and pure board-shape helpers.
//!
//! The board is a mapping from [`ColumnKey`] to an ordered list of
//! projects. Order within a column is drag position — authoritative
//! client state, not derivable from any project field. Everything in
//! this module is pure; the store layers caching and gateway
//! reconciliation on top.

use std::collections::BTreeMap;

use crate::models::ProjectRecord;
use crate::status::ColumnKey;

/// Column key → ordered projects. Every key is always present.
pub type Columns = BTreeMap<ColumnKey, Vec<ProjectRecord>>;

/// Empty board with every column present.
pub fn empty_columns() -> Columns {
    ColumnKey::ALL.into_iter().map(|k| (k, Vec::new())).collect()
}

/// Re-insert any missing column keys as empty lists.
///
/// Used after raw overrides and snapshot rehydration so the board
/// always renders all three columns.
pub fn ensure_all_columns(columns: &mut Columns) {
    for key in ColumnKey::ALL {
        columns.entry(key).or_default();
    }
}

/// Partition `records` into board columns by status.
///
/// Archived records are dropped; relative input order is preserved
/// within each column. Cannot fail for well-formed input.
pub fn group_by_status(records: Vec<ProjectRecord>) -> Columns {
    let mut columns = empty_columns();
    for record in records {
        if let Some(key) = record.status.column() {
            columns.entry(key).or_default().push(record);
        }
    }
    columns
}

/// Append `record` to the end of `column`, creating the column if a
/// raw override dropped it.
pub fn append_to_column(columns: &mut Columns, column: ColumnKey, record: ProjectRecord) {
    columns.entry(column).or_default().push(record);
}

/// Remove every occurrence of `id`, returning how many were removed.
pub fn remove_everywhere(columns: &mut Columns, id: &str) -> usize {
    let mut removed = 0;
    for list in columns.values_mut() {
        let before = list.len();
        list.retain(|p| p.id != id);
        removed += before - list.len();
    }
    removed
}

/// Replace a project in place wherever it currently sits, keeping its
/// position. Returns `true` if at least one occurrence was replaced.
pub fn replace_in_place(columns: &mut Columns, record: &ProjectRecord) -> bool {
    let mut replaced = false;
    for list in columns.values_mut() {
        for slot in list.iter_mut() {
            if slot.id == record.id {
                *slot = record.clone();
                replaced = true;
            }
        }
    }
    replaced
}

/// The column currently holding `id`, if any.
pub fn column_of(columns: &Columns, id: &str) -> Option<ColumnKey> {
    columns
        .iter()
        .find(|(_, list)| list.iter().any(|p| p.id == id))
        .map(|(key, _)| *key)
}

/// Total number of projects on the board.
pub fn project_count(columns: &Columns) -> usize {
    columns.values().map(Vec::len).sum()
}

/// `true` when no column holds any project.
pub fn board_is_empty(columns: &Columns) -> bool {
    columns.values().all(Vec::is_empty)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::ProjectStatus;
    use crate::types::Timestamp;

    fn record(id: &str, status: ProjectStatus) -> ProjectRecord {
        let at: Timestamp = "2026-01-05T10:00:00Z".parse().unwrap();
        ProjectRecord {
            id: id.to_string(),
            title: format!("Project {id}"),
            description: None,
            url: None,
            status,
            technologies: Vec::new(),
            tags: Vec::new(),
            tasks: Vec::new(),
            created_at: at,
            updated_at: at,
        }
    }

    // -- group_by_status ------------------------------------------------------

    #[test]
    fn grouping_partitions_by_status() {
        let columns = group_by_status(vec![
            record("a", ProjectStatus::Planning),
            record("b", ProjectStatus::InProgress),
            record("c", ProjectStatus::Completed),
            record("d", ProjectStatus::OnHold),
        ]);

        let ids = |key: ColumnKey| -> Vec<&str> {
            columns[&key].iter().map(|p| p.id.as_str()).collect()
        };
        assert_eq!(ids(ColumnKey::Ideas), vec!["a", "d"]);
        assert_eq!(ids(ColumnKey::InProgress), vec!["b"]);
        assert_eq!(ids(ColumnKey::Completed), vec!["c"]);
    }

    #[test]
    fn grouping_drops_archived() {
        let columns = group_by_status(vec![
            record("a", ProjectStatus::Planning),
            record("x", ProjectStatus::Archived),
        ]);
        assert_eq!(project_count(&columns), 1);
        assert_eq!(column_of(&columns, "x"), None);
    }

    #[test]
    fn grouping_conserves_non_archived_count() {
        let records = vec![
            record("a", ProjectStatus::Planning),
            record("b", ProjectStatus::Archived),
            record("c", ProjectStatus::InProgress),
            record("d", ProjectStatus::Archived),
            record("e", ProjectStatus::OnHold),
        ];
        let archived = records
            .iter()
            .filter(|r| r.status == ProjectStatus::Archived)
            .count();
        let total = records.len();

        let columns = group_by_status(records);
        assert_eq!(project_count(&columns) + archived, total);
    }

    #[test]
    fn grouping_preserves_input_order_within_column() {
        let columns = group_by_status(vec![
            record("first", ProjectStatus::OnHold),
            record("second", ProjectStatus::Planning),
            record("third", ProjectStatus::OnHold),
        ]);
        let ids: Vec<&str> = columns[&ColumnKey::Ideas]
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn grouping_always_emits_all_columns() {
        let columns = group_by_status(Vec::new());
        assert_eq!(columns.len(), ColumnKey::ALL.len());
        assert!(board_is_empty(&columns));
    }

    // -- column helpers -------------------------------------------------------

    #[test]
    fn remove_everywhere_counts_occurrences() {
        let mut columns = empty_columns();
        append_to_column(&mut columns, ColumnKey::Ideas, record("a", ProjectStatus::Planning));
        // Simulate a duplicated project spanning two columns.
        append_to_column(
            &mut columns,
            ColumnKey::Completed,
            record("a", ProjectStatus::Completed),
        );

        assert_eq!(remove_everywhere(&mut columns, "a"), 2);
        assert!(board_is_empty(&columns));
        assert_eq!(remove_everywhere(&mut columns, "a"), 0);
    }

    #[test]
    fn replace_in_place_keeps_position() {
        let mut columns = group_by_status(vec![
            record("a", ProjectStatus::Planning),
            record("b", ProjectStatus::Planning),
        ]);

        let mut updated = record("a", ProjectStatus::Planning);
        updated.title = "Renamed".to_string();
        assert!(replace_in_place(&mut columns, &updated));

        let ideas = &columns[&ColumnKey::Ideas];
        assert_eq!(ideas[0].title, "Renamed");
        assert_eq!(ideas[1].id, "b");
    }

    #[test]
    fn replace_in_place_reports_missing_project() {
        let mut columns = empty_columns();
        assert!(!replace_in_place(&mut columns, &record("ghost", ProjectStatus::Planning)));
    }

    #[test]
    fn column_of_finds_holding_column() {
        let columns = group_by_status(vec![record("a", ProjectStatus::InProgress)]);
        assert_eq!(column_of(&columns, "a"), Some(ColumnKey::InProgress));
        assert_eq!(column_of(&columns, "b"), None);
    }

    #[test]
    fn ensure_all_columns_reinserts_missing_keys() {
        let mut columns = Columns::new();
        columns.insert(ColumnKey::Ideas, vec![record("a", ProjectStatus::Planning)]);

        ensure_all_columns(&mut columns);
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[&ColumnKey::Ideas].len(), 1);
        assert!(columns[&ColumnKey::Completed].is_empty());
    }
}
