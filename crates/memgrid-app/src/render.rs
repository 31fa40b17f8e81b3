//! Text renderer for the grid view.

use std::fmt::Write;

use memgrid_core::GridView;
use memgrid_core::visible::{SidebarEntry, VisibleSlot};

const CELL_WIDTH: usize = 9;

/// Render sidebar, neighborhood and status line as one text frame.
pub fn frame(view: &GridView) -> String {
    let mut out = String::new();
    let cursor = view.cursor();
    let title = view
        .active_memory()
        .map(|m| m.display_title())
        .unwrap_or_default();
    let _ = writeln!(
        out,
        "== {} [{}, {}] {title} ==",
        view.navigator().active_category_name(),
        cursor.category,
        cursor.item,
    );

    for entry in view.sidebar() {
        let _ = writeln!(out, "{}", sidebar_line(&entry));
    }
    out.push('\n');

    let ipc = view.layout().items_per_category();
    let grid = view.visible_grid();
    for row in grid.rows() {
        let accent = row
            .iter()
            .find(|s| s.address.col == 0)
            .map(|s| s.tint().to_hex())
            .unwrap_or_default();
        let cells: Vec<String> = row
            .iter()
            .map(|slot| cell(view, slot, ipc))
            .collect();
        let _ = writeln!(out, "{accent} {}", cells.join(""));
    }

    if let Some(slot) = view.overlay().slot() {
        let _ = writeln!(out, "\n[detail open: slot {slot}]");
    }
    out
}

fn sidebar_line(entry: &SidebarEntry) -> String {
    let marker = if entry.active { '>' } else { ' ' };
    let indent = " ".repeat((entry.emphasis.offset_x / 10.0) as usize);
    format!(
        "{marker} {indent}{} ({:.1})",
        entry.label, entry.emphasis.opacity
    )
}

fn cell(view: &GridView, slot: &VisibleSlot, ipc: usize) -> String {
    let Some(id) = slot.slot else {
        return " ".repeat(CELL_WIDTH);
    };
    let (category, item) = id.split(ipc);
    let filled = view.store().get(id).is_some_and(|m| m.has_video());
    let label = format!(
        "{category}:{item:02}{}",
        if filled { "*" } else { "" }
    );
    let label = if slot.address.is_center() {
        format!("[{label}]")
    } else {
        label
    };
    format!("{label:^width$}", width = CELL_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use memgrid_core::NavCommand;
    use memgrid_core::config::GridConfig;

    fn view() -> GridView {
        GridView::mount(&GridConfig::default()).unwrap()
    }

    #[test]
    fn frame_marks_active_category_and_center() {
        let text = frame(&view());
        assert!(text.starts_with("== Clubs [2, 10] Emplacement 11 =="));
        assert!(text.contains("> ") && text.contains("Clubs (1.0)"));
        assert!(text.contains("[2:10]"));
        assert!(text.contains("#E85C5C "));
        // Two rows up, Partenaires is drawn at 40% opacity.
        assert!(text.contains("#86B89E66 "));
    }

    #[test]
    fn edge_rows_render_blank() {
        let mut v = view();
        v.command(NavCommand::JumpToCategory(0));
        let text = frame(&v);
        let grid_lines: Vec<&str> = text
            .lines()
            .skip_while(|l| !l.is_empty())
            .skip(1)
            .collect();
        assert_eq!(grid_lines.len(), 5);
        assert!(grid_lines[0].trim_start_matches(|c: char| c != ' ').trim().is_empty());
        assert!(grid_lines[2].contains("[0:10]"));
    }

    #[test]
    fn open_overlay_is_shown() {
        let mut v = view();
        v.open_detail();
        assert!(frame(&v).contains("[detail open: slot 50]"));
    }
}
