use anyhow::Result;
use cinedb_storage::{QueryRunner, StatementOutcome, StatementReport};
use std::fmt::Write as _;
use std::path::Path;

const SECTION_RULE_WIDTH: usize = 60;

pub(crate) fn run_query(db_path: &Path, sql_file: &Path) -> Result<()> {
    let runner = QueryRunner::open(db_path)?;
    println!("Connected to database: {}", db_path.display());

    let reports = runner.run_file(sql_file)?;
    println!("Found {} queries in {}\n", reports.len(), sql_file.display());

    for report in &reports {
        print!("{}", render_report(report));
    }

    let failed = reports
        .iter()
        .filter(|r| matches!(r.outcome, StatementOutcome::Failed { .. }))
        .count();
    if failed == 0 {
        println!("All queries executed successfully.");
    } else {
        println!("{failed} of {} queries failed.", reports.len());
    }
    Ok(())
}

fn render_report(report: &StatementReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Query {}:", report.index);
    let _ = writeln!(out, "  {}", report.preview);
    let _ = writeln!(out, "{}", "-".repeat(SECTION_RULE_WIDTH));

    match &report.outcome {
        StatementOutcome::Rows(output) if output.total_rows == 0 => {
            let _ = writeln!(out, "No results.");
        },
        StatementOutcome::Rows(output) => {
            let header = output.columns.join(" | ");
            let _ = writeln!(out, "Results:");
            let _ = writeln!(out, "    {header}");
            let _ = writeln!(out, "{}", "-".repeat(header.len() + 4));
            for row in &output.rows {
                let _ = writeln!(out, "    {}", row.join(" | "));
            }
            if output.omitted_rows() > 0 {
                let _ = writeln!(out, "    ...({} more rows)", output.omitted_rows());
            }
        },
        StatementOutcome::Failed { error } => {
            let _ = writeln!(out, "Error executing query {}: {error}", report.index);
        },
    }

    let _ = writeln!(out, "\n{}\n", "=".repeat(SECTION_RULE_WIDTH));
    out
}
