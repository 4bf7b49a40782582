use jobtrack::tracker::{JobApplicationTracker, StatusReportSummary};
use std::io::{self, Write};

pub(crate) fn render_applications(
    out: &mut impl Write,
    tracker: &JobApplicationTracker,
) -> io::Result<()> {
    writeln!(out, "{}", tracker.name())?;
    writeln!(out, "ID | DATE APPLIED | COMPANY | ROLE | STATUS")?;
    for (id, application) in tracker.applications().iter().enumerate() {
        writeln!(out, "{id} | {application}")?;
    }
    if tracker.is_empty() {
        writeln!(out, "TIP: add your first job application with `jobtrack add`.")?;
    }
    Ok(())
}

/// Percentages are rendered with two decimals; the core keeps the raw ratio.
pub(crate) fn render_summary(
    out: &mut impl Write,
    summary: &StatusReportSummary,
) -> io::Result<()> {
    writeln!(out, "Number of Job Applications Per Status Category")?;
    for entry in &summary.breakdown {
        writeln!(out, "{}: {}", entry.status, entry.count)?;
    }

    writeln!(out)?;
    writeln!(out, "Percentage of Total Job Applications Per Status Category")?;
    if summary.total == 0 {
        writeln!(out, "No job applications tracked yet.")?;
        return Ok(());
    }
    for entry in &summary.breakdown {
        let share = entry.percentage.unwrap_or_default() * 100.0;
        writeln!(out, "{}: {:.2}%", entry.status, share)?;
    }
    Ok(())
}
