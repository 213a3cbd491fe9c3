//! List-screen rendering.
//!
//! A listing renders one of four mutually exclusive row-region states, in
//! priority order: busy, error, empty, populated. Populated listings carry a
//! pagination footer with the bounded page-number window.

use colored::Colorize;

use registro_core::{
    Candidate, Entity, ListState, PageEntry, Person, RecordBrowser, RecordStore,
};

use crate::output;

/// Row rendering for one entity kind.
pub trait Tabular {
    /// Column headers, in display order.
    fn headers() -> &'static [&'static str];

    /// One display cell per header.
    fn columns(&self) -> Vec<String>;
}

fn cell(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

fn cell_bool(value: Option<bool>) -> String {
    match value {
        Some(true) => "yes".to_string(),
        Some(false) => "no".to_string(),
        None => "-".to_string(),
    }
}

impl Tabular for Person {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "EMAIL", "PHONE", "CITY", "ACTIVE"]
    }

    fn columns(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            cell(self.name.as_deref()),
            cell(self.email.as_deref()),
            cell(self.phone.as_deref()),
            cell(self.city.as_deref()),
            cell_bool(self.active),
        ]
    }
}

impl Tabular for Candidate {
    fn headers() -> &'static [&'static str] {
        &["ID", "FULL NAME", "BALLOT NAME", "PARTY", "OFFICE", "CITY", "ELECTED"]
    }

    fn columns(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            cell(self.full_name.as_deref()),
            cell(self.ballot_name.as_deref()),
            cell(self.party.as_deref()),
            cell(self.office.as_deref()),
            cell(self.candidacy_city.as_deref()),
            cell_bool(self.elected),
        ]
    }
}

/// Render the row region and, when populated, the pagination footer.
///
/// The error state prints the browser's fixed display message and exits
/// nonzero so scripts can tell a failed listing from an empty one.
pub fn render<E, S>(browser: &RecordBrowser<E, S>)
where
    E: Entity + Tabular,
    S: RecordStore,
{
    match browser.state() {
        ListState::Busy => {
            eprintln!("{}", "Loading…".dimmed());
        }
        ListState::Error(message) => {
            output::error(message);
            std::process::exit(1);
        }
        ListState::Empty => {
            eprintln!("{}", "No records found.".dimmed());
        }
        ListState::Rows(rows) => {
            render_table(rows);
            render_footer(browser);
        }
    }
}

fn render_table<E: Tabular>(rows: &[E]) {
    let headers = E::headers();
    let cells: Vec<Vec<String>> = rows.iter().map(Tabular::columns).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (i, value) in row.iter().enumerate() {
            widths[i] = widths[i].max(value.chars().count());
        }
    }

    let header_line = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header_line.dimmed());

    for row in &cells {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, value)| format!("{:<width$}", value, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line.trim_end());
    }
}

fn render_footer<E, S>(browser: &RecordBrowser<E, S>)
where
    E: Entity + Tabular,
    S: RecordStore,
{
    let strip = browser
        .window()
        .iter()
        .map(|entry| match entry {
            PageEntry::Page(n) if *n == browser.page() => format!("[{}]", n).bold().to_string(),
            PageEntry::Page(n) => n.to_string(),
            PageEntry::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");

    println!();
    println!(
        "{}  {}",
        strip,
        format!(
            "Page {} of {} · {} records",
            browser.page(),
            browser.total_pages(),
            browser.total_count()
        )
        .dimmed()
    );
}
