use comfy_table::Cell;

use super::format::{header_cell, new_table, truncate_text};
use crate::store::StoredApplication;

const TEXT_WIDTH: usize = 40;
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub(crate) fn render_application_table(applications: &[StoredApplication], use_color: bool) -> String {
    let mut table = new_table();
    table.set_header(
        [
            "Username",
            "Full name",
            "Group",
            "Level",
            "Direction",
            "Languages",
            "Submitted (UTC)",
        ]
        .map(|h| header_cell(h, use_color)),
    );

    for stored in applications {
        let app = &stored.application;
        table.add_row(vec![
            Cell::new(&app.username),
            Cell::new(&app.full_name),
            Cell::new(&app.group_number),
            Cell::new(&app.programming_level),
            Cell::new(app.direction.as_deref().unwrap_or("-")),
            Cell::new(truncate_text(&app.known_languages, TEXT_WIDTH)),
            Cell::new(stored.submitted_at.format(TIME_FORMAT)),
        ]);
    }

    format!("{table}\n{} application(s)", applications.len())
}

/// Field/value table for a single application
pub(crate) fn render_application_detail(stored: &StoredApplication, use_color: bool) -> String {
    let app = &stored.application;
    let mut table = new_table();
    table.set_header(["Field", "Value"].map(|h| header_cell(h, use_color)));

    let submitted = stored.submitted_at.format(TIME_FORMAT).to_string();
    let rows: [(&str, &str); 9] = [
        ("Username", app.username.as_str()),
        ("Full name", app.full_name.as_str()),
        ("Group", app.group_number.as_str()),
        ("Level", app.programming_level.as_str()),
        ("Direction", app.direction.as_deref().unwrap_or("-")),
        ("Languages", app.known_languages.as_str()),
        ("Motivation", app.motivation.as_str()),
        ("Teaching experience", app.teaching_experience.as_str()),
        ("Submitted (UTC)", submitted.as_str()),
    ];
    for (field, value) in rows {
        table.add_row(vec![Cell::new(field), Cell::new(value)]);
    }

    table.to_string()
}
