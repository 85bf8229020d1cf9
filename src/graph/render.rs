use super::aggregate::{calc_offset, CommitCounts};
use super::grid::build_columns;
use super::{DAYS_IN_WINDOW, WEEKS_IN_WINDOW};
use chrono::{DateTime, Datelike, Duration, Local};
use console::style;

/// Visual intensity class for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    Empty,
    Low,
    Medium,
    High,
}

impl Intensity {
    pub fn bucket(count: u32) -> Self {
        match count {
            0 => Intensity::Empty,
            1..=4 => Intensity::Low,
            5..=9 => Intensity::Medium,
            _ => Intensity::High,
        }
    }
}

fn format_cell(count: u32, today: bool) -> String {
    // Width narrows as digits grow so the grid stays aligned.
    let text = if count == 0 {
        "  - ".to_string()
    } else if count >= 100 {
        format!("{count} ")
    } else if count >= 10 {
        format!(" {count} ")
    } else {
        format!("  {count} ")
    };

    let styled = if today {
        style(text).white().on_magenta().bold()
    } else {
        match Intensity::bucket(count) {
            Intensity::Empty => style(text).dim(),
            Intensity::Low => style(text).black().on_white(),
            Intensity::Medium => style(text).black().on_yellow(),
            Intensity::High => style(text).black().on_green(),
        }
    };

    styled.to_string()
}

fn day_label(day: i64) -> &'static str {
    match day {
        1 => " Mon ",
        3 => " Wed ",
        5 => " Fri ",
        _ => "     ",
    }
}

/// One 4-wide slot per week column; the month abbreviation is printed in the
/// first week whose month differs from the previous one.
fn month_header(now: DateTime<Local>) -> String {
    let today = now.date_naive();
    let mut week = today - Duration::days(DAYS_IN_WINDOW);
    let mut month = week.month();
    let mut line = String::from("        ");

    loop {
        if week.month() != month {
            line.push_str(&format!("{} ", week.format("%b")));
            month = week.month();
        } else {
            line.push_str("    ");
        }

        week = week + Duration::days(7);
        if week > today {
            break;
        }
    }

    line
}

/// Render the full graph: month header, then one row per weekday (top row =
/// day index 6). Columns run from week 26 on the left down to week 0, the
/// current week, on the right; the week-0 cell on today's weekday row gets
/// the highlight style.
pub fn render_graph(table: &CommitCounts, now: DateTime<Local>) -> String {
    let columns = build_columns(table);
    let today_row = calc_offset(now.weekday()) - 1;

    let mut out = String::new();
    out.push_str(&month_header(now));
    out.push('\n');

    for day in (0..7).rev() {
        out.push_str(day_label(day));

        for week in (0..=WEEKS_IN_WINDOW).rev() {
            let count = columns
                .get(&week)
                .and_then(|col| col.get(day as usize))
                .copied()
                .unwrap_or(0);

            let today = week == 0 && day == today_row;
            out.push_str(&format_cell(count, today));
        }

        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::aggregate::seed_table;
    use chrono::TimeZone;
    use console::strip_ansi_codes;
    use pretty_assertions::assert_eq;

    fn wednesday_noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).single().unwrap()
    }

    #[test]
    fn buckets_split_at_five_and_ten() {
        assert_eq!(Intensity::bucket(0), Intensity::Empty);
        assert_eq!(Intensity::bucket(1), Intensity::Low);
        assert_eq!(Intensity::bucket(4), Intensity::Low);
        assert_eq!(Intensity::bucket(5), Intensity::Medium);
        assert_eq!(Intensity::bucket(9), Intensity::Medium);
        assert_eq!(Intensity::bucket(10), Intensity::High);
        assert_eq!(Intensity::bucket(250), Intensity::High);
    }

    #[test]
    fn cell_widths_narrow_with_digit_count() {
        assert_eq!(strip_ansi_codes(&format_cell(0, false)), "  - ");
        assert_eq!(strip_ansi_codes(&format_cell(7, false)), "  7 ");
        assert_eq!(strip_ansi_codes(&format_cell(42, false)), " 42 ");
        assert_eq!(strip_ansi_codes(&format_cell(123, false)), "123 ");
    }

    #[test]
    fn day_labels_mark_mon_wed_fri() {
        assert_eq!(day_label(1), " Mon ");
        assert_eq!(day_label(3), " Wed ");
        assert_eq!(day_label(5), " Fri ");
        assert_eq!(day_label(0), "     ");
        assert_eq!(day_label(6), "     ");
    }

    #[test]
    fn header_names_the_months_in_the_window() {
        let header = month_header(wednesday_noon());
        assert!(header.starts_with("        "));
        for month in ["Aug", "Sep", "Oct", "Nov", "Dec", "Jan"] {
            assert!(header.contains(month), "missing {month} in {header:?}");
        }
    }

    #[test]
    fn graph_has_a_header_and_seven_rows() {
        let out = render_graph(&seed_table(), wednesday_noon());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(strip_ansi_codes(lines[2]).starts_with(" Fri "));
        assert!(strip_ansi_codes(lines[6]).starts_with(" Mon "));
    }

    #[test]
    fn rows_hold_twenty_seven_week_cells() {
        let out = render_graph(&seed_table(), wednesday_noon());
        for line in out.lines().skip(1) {
            let plain = strip_ansi_codes(line).to_string();
            assert_eq!(plain.len(), 5 + 27 * 4, "row {plain:?}");
        }
    }

    #[test]
    fn counts_surface_in_the_rendered_grid() {
        let mut table = seed_table();
        table.insert(50, 3);

        let out = render_graph(&table, wednesday_noon());
        let plain = strip_ansi_codes(&out).to_string();
        assert!(plain.contains("  3 "));
    }
}
