//! Tables printed by `inspect`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use als_codec::Version;
use als_model::{Project, TrackKind, UserTrack};

/// Print the overview and track tables.
pub fn print_summary(project: &Project, version: Version) {
    println!("{}", overview_table(project, version));
    if !project.tracks.is_empty() {
        println!("{}", track_table(project));
    }
}

/// Version, creator and element counts.
pub fn overview_table(project: &Project, version: Version) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Property"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![Cell::new("Version"), Cell::new(version)]);
    table.add_row(vec![
        Cell::new("Creator"),
        Cell::new(&project.version_info.creator),
    ]);
    for kind in TrackKind::ALL {
        let count = project.tracks_of_kind(kind).count();
        table.add_row(vec![
            Cell::new(format!("{kind} tracks")),
            count_cell(count),
        ]);
    }
    table.add_row(vec![Cell::new("Clips"), count_cell(project.clip_count())]);
    table.add_row(vec![Cell::new("Scenes"), count_cell(project.scenes.len())]);
    table.add_row(vec![
        Cell::new("Loop").add_attribute(Attribute::Dim),
        Cell::new(format!(
            "{} + {}{}",
            project.transport.loop_start,
            project.transport.loop_length,
            if project.transport.loop_on { "" } else { " (off)" }
        )),
    ]);
    table
}

/// One row per user track, in document order.
pub fn track_table(project: &Project) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Kind"),
        header_cell("Name"),
        header_cell("Group"),
        header_cell("Clips"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    for (index, track) in project.tracks.iter().enumerate() {
        let group = track.base().track_group_id;
        table.add_row(vec![
            Cell::new(index + 1),
            kind_cell(track),
            Cell::new(track.name()),
            if group < 0 {
                dim_cell("-")
            } else {
                Cell::new(group)
            },
            count_cell(track.clip_count()),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn kind_cell(track: &UserTrack) -> Cell {
    let color = match track.kind() {
        TrackKind::Audio => Color::Yellow,
        TrackKind::Midi => Color::Green,
        TrackKind::Group => Color::Blue,
        TrackKind::Return => Color::Magenta,
    };
    Cell::new(track.kind()).fg(color)
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
