use super::aggregate::CommitCounts;
use std::collections::HashMap;

/// One rendered week: exactly 7 day values, index 0 = the week's first day in
/// scan order.
pub type Column = Vec<u32>;

/// Lay the day-offset table into week columns.
///
/// Offsets are walked in ascending order; `offset / 7` selects the week and
/// `offset % 7` the slot within it. A column opens on slot 0 and commits to
/// the grid on slot 6, padded with zeros if the trailing week is partial. A
/// column that never reaches slot 6 is dropped, which loses the earliest
/// partial week; the renderer fills the gap with empty cells.
pub fn build_columns(table: &CommitCounts) -> HashMap<i64, Column> {
    let mut columns = HashMap::new();
    let mut col = Column::new();

    for (&offset, &count) in table {
        let week = offset / 7;
        let day_in_week = offset % 7;

        if day_in_week == 0 {
            col = Column::new();
        }

        col.push(count);

        if day_in_week == 6 {
            col.resize(7, 0);
            columns.insert(week, std::mem::take(&mut col));
        }
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::aggregate::seed_table;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_column_has_seven_days() {
        let mut table = seed_table();
        table.insert(4, 2);
        table.insert(50, 1);

        let columns = build_columns(&table);
        assert!(!columns.is_empty());
        assert!(columns.values().all(|col| col.len() == 7));
    }

    #[test]
    fn counts_land_in_their_slots() {
        let mut table = seed_table();
        table.insert(4, 2);
        table.insert(50, 1);

        let columns = build_columns(&table);
        // Week 0 starts at offset 1, so offset 4 sits at slot 3; later weeks
        // open on a slot-0 offset and line up directly.
        assert_eq!(columns[&0][3], 2);
        assert_eq!(columns[&7][1], 1);
    }

    #[test]
    fn first_week_column_is_padded() {
        // Offsets start at 1, so week 0 only ever sees slots 1..=6 and gets a
        // zero backfilled at slot 6... the pad keeps the length invariant.
        let table = seed_table();
        let columns = build_columns(&table);
        assert_eq!(columns[&0].len(), 7);
    }

    #[test]
    fn trailing_partial_week_is_dropped() {
        // 183 = 26 * 7 + 1, so week 26 ends mid-column and never commits.
        let table = seed_table();
        let columns = build_columns(&table);
        assert!(columns.contains_key(&25));
        assert!(!columns.contains_key(&26));
    }

    #[test]
    fn overflow_offsets_extend_the_grid() {
        // Alignment can push offsets past 183; they land in week 26 and close
        // it once slot 6 exists.
        let mut table = seed_table();
        for offset in 184..=188 {
            table.insert(offset, 1);
        }

        let columns = build_columns(&table);
        assert!(columns.contains_key(&26));
        assert_eq!(columns[&26].len(), 7);
    }
}
