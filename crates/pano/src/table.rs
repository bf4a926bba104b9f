use pano_core::Snapshot;

pub struct TableFormatter {
    index_width: usize,
    id_width: usize,
    title_width: usize,
    tabs_width: usize,
    active_width: usize,
}

impl TableFormatter {
    pub fn new(snapshot: &Snapshot) -> Self {
        let title_width = snapshot
            .groups
            .iter()
            .map(|g| g.display_title().chars().count())
            .max()
            .unwrap_or(16)
            .clamp(5, 50); // Between "Title" header min and reasonable terminal width max

        Self {
            index_width: 3,
            id_width: 6,
            title_width,
            tabs_width: 4,
            active_width: 6,
        }
    }

    pub fn print_table(&self, snapshot: &Snapshot) {
        self.print_header();
        for (index, group) in snapshot.groups.iter().enumerate() {
            let active = snapshot.active_group == Some(group.id);
            self.print_row(index, group, active);
        }
        self.print_footer();
    }

    fn print_header(&self) {
        println!("{}", self.top_border());
        println!("{}", self.header_row());
        println!("{}", self.separator());
    }

    fn print_footer(&self) {
        println!("{}", self.bottom_border());
    }

    fn print_row(&self, index: usize, group: &pano_core::Group, active: bool) {
        println!(
            "│ {:<width_index$} │ {:<width_id$} │ {:<width_title$} │ {:<width_tabs$} │ {:<width_active$} │",
            index,
            group.id,
            truncate(group.display_title(), self.title_width),
            group.tabs.len(),
            if active { "*" } else { "" },
            width_index = self.index_width,
            width_id = self.id_width,
            width_title = self.title_width,
            width_tabs = self.tabs_width,
            width_active = self.active_width,
        );
    }

    fn top_border(&self) -> String {
        format!(
            "┌{}┬{}┬{}┬{}┬{}┐",
            "─".repeat(self.index_width + 2),
            "─".repeat(self.id_width + 2),
            "─".repeat(self.title_width + 2),
            "─".repeat(self.tabs_width + 2),
            "─".repeat(self.active_width + 2),
        )
    }

    fn header_row(&self) -> String {
        format!(
            "│ {:<width_index$} │ {:<width_id$} │ {:<width_title$} │ {:<width_tabs$} │ {:<width_active$} │",
            "#",
            "Id",
            "Title",
            "Tabs",
            "Active",
            width_index = self.index_width,
            width_id = self.id_width,
            width_title = self.title_width,
            width_tabs = self.tabs_width,
            width_active = self.active_width,
        )
    }

    fn separator(&self) -> String {
        format!(
            "├{}┼{}┼{}┼{}┼{}┤",
            "─".repeat(self.index_width + 2),
            "─".repeat(self.id_width + 2),
            "─".repeat(self.title_width + 2),
            "─".repeat(self.tabs_width + 2),
            "─".repeat(self.active_width + 2),
        )
    }

    fn bottom_border(&self) -> String {
        format!(
            "└{}┴{}┴{}┴{}┴{}┘",
            "─".repeat(self.index_width + 2),
            "─".repeat(self.id_width + 2),
            "─".repeat(self.title_width + 2),
            "─".repeat(self.tabs_width + 2),
            "─".repeat(self.active_width + 2),
        )
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings
/// including emoji and multi-byte characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        // Safely truncate at character boundaries, not byte boundaries
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
