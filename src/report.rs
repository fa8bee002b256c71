//! Plain-text rendering of a `ScheduleReport`: title banner, Gantt chart and
//! timing table.

use std::io::{self, Write};

use comfy_table::presets::ASCII_FULL;
use comfy_table::{CellAlignment, Table};

use crate::constants::GANTT_CELL_WIDTH;
use crate::{Metrics, ScheduleReport, ScheduleRow, TimeSlice};

const HEADER: [&str; 7] = ["ID", "Priority", "Burst", "Arrival", "Wait", "Turnaround", "Exit"];

/// Writes the full report of one scheduling discipline.
pub fn write_report<W: Write>(w: &mut W, report: &ScheduleReport) -> io::Result<()> {
    write_title(w, report.title())?;
    write_gantt(w, report.slices())?;
    write_schedule(w, report.rows(), report.metrics())
}

pub fn write_title<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let rule = "-".repeat(title.len() * 2);
    writeln!(w, "{}", rule)?;
    writeln!(w, "{} {}", " ".repeat(title.len() / 2), title)?;
    writeln!(w, "{}", rule)
}

/// One line of centred pids, then one line of slice start times closed by
/// the stop of the last slice.
pub fn write_gantt<W: Write>(w: &mut W, slices: &[TimeSlice]) -> io::Result<()> {
    writeln!(w, "Gantt schedule")?;
    write!(w, "|")?;
    for slice in slices {
        let pid = slice.pid().to_string();
        let padding = " ".repeat(GANTT_CELL_WIDTH.saturating_sub(pid.len()) / 2);
        write!(w, "{}{}{}|", padding, pid, padding)?;
    }
    writeln!(w)?;

    for slice in slices {
        write!(w, "{}\t", slice.start())?;
    }
    if let Some(last) = slices.last() {
        write!(w, "{}", last.stop())?;
    }
    write!(w, "\n\n")
}

pub fn write_schedule<W: Write>(w: &mut W, rows: &[ScheduleRow], metrics: &Metrics) -> io::Result<()> {
    writeln!(w, "Schedule table")?;

    let mut table = Table::new();
    table.load_preset(ASCII_FULL).set_header(HEADER.map(str::to_uppercase).to_vec());

    for row in rows {
        table.add_row(vec![
            row.id().to_string(),
            row.priority().to_string(),
            row.burst().to_string(),
            row.arrival().to_string(),
            row.wait().to_string(),
            row.turnaround().to_string(),
            row.completion().to_string(),
        ]);
    }
    table.add_row(footer(metrics));

    for column in table.column_iter_mut() {
        column.set_cell_alignment(CellAlignment::Right);
    }

    writeln!(w, "{}", table)
}

/// Averages and throughput, each under its heading in a two-line cell.
fn footer(metrics: &Metrics) -> Vec<String> {
    vec![
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format!("Average\n{:.2}", metrics.average_wait()),
        format!("Average\n{:.2}", metrics.average_turnaround()),
        format!("Throughput\n{:.2}/t", metrics.throughput()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{FirstComeFirstServed, Scheduler};
    use crate::{Process, ProcessSet};

    fn render(report: &ScheduleReport) -> String {
        let mut out = Vec::new();
        write_report(&mut out, report).expect("writing to a Vec never fails");
        String::from_utf8(out).expect("report is utf-8")
    }

    /// Trimmed cell contents of one table line.
    fn cells(line: &str) -> Vec<&str> {
        let parts: Vec<&str> = line.split('|').map(str::trim).collect();
        parts[1..parts.len() - 1].to_vec()
    }

    #[test]
    fn test_title_banner() {
        let mut out = Vec::new();
        write_title(&mut out, "Priority").unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "----------------\n     Priority\n----------------\n"
        );
    }

    #[test]
    fn test_gantt_lines() {
        let slices = [TimeSlice::new(1, 0, 5), TimeSlice::new(12, 5, 8)];
        let mut out = Vec::new();
        write_gantt(&mut out, &slices).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Gantt schedule\n|   1   |   12   |\n0\t5\t8\n\n"
        );
    }

    #[test]
    fn test_table_lists_rows_and_footer() {
        let processes = ProcessSet::new(vec![
            Process::new(1, 5, 0, 0),
            Process::new(2, 3, 0, 0),
            Process::new(3, 8, 0, 0),
        ]);
        let text = render(&FirstComeFirstServed.run(&processes));
        let lines: Vec<Vec<&str>> = text.lines().filter(|l| l.starts_with('|')).map(cells).collect();

        assert!(lines.contains(&vec!["ID", "PRIORITY", "BURST", "ARRIVAL", "WAIT", "TURNAROUND", "EXIT"]));
        assert!(lines.contains(&vec!["3", "0", "8", "0", "8", "16", "16"]));
        assert!(lines.contains(&vec!["", "", "", "", "Average", "Average", "Throughput"]));
        assert!(lines.contains(&vec!["", "", "", "", "4.33", "9.67", "0.19/t"]));
    }
}
