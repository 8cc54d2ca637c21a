use comfy_table::{
    Attribute, Cell, Color, ContentArrangement, Table, modifiers::UTF8_SOLID_INNER_BORDERS,
    presets::UTF8_FULL,
};

pub(super) fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let cell = Cell::new(text);
    if use_color {
        cell.fg(Color::Cyan).add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

/// Shorten free text to `max_chars` characters for table cells
pub(super) fn truncate_text(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        let keep: String = head.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{keep}...")
    } else {
        head
    }
}
