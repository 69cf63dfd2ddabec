//! Per-pattern progress bars with a batch bar for large directories

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Display state of one pattern file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FileState {
    label: String,
    collapsed: usize,
    total: usize,
}

/// Shows collapsed/total cells for the most recent pattern files
///
/// At most `MAX_INDIVIDUAL_PROGRESS_BARS` bars are shown as a rolling window;
/// larger batches additionally get one bar counting finished files.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    files: Vec<FileState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static CELL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.green/white}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Patterns: [{bar:40.green/white}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a progress manager without bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Create the bars for `file_count` pattern files
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(CELL_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Start (or restart after a retry) the bar of one file
    pub fn start_file(&mut self, index: usize, path: &Path, total_cells: usize) {
        let label = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.files.len() {
            self.files.resize(index + 1, FileState::default());
        }
        if let Some(state) = self.files.get_mut(index) {
            *state = FileState {
                label,
                collapsed: 0,
                total: total_cells,
            };
        }
        self.update_bars();
    }

    /// Report how many cells of a file are collapsed
    pub fn update_cells(&mut self, index: usize, collapsed: usize) {
        if let Some(state) = self.files.get_mut(index) {
            state.collapsed = collapsed;
        }
        self.update_bars();
    }

    /// Mark a file as done and advance the batch bar
    pub fn complete_file(&mut self, index: usize) {
        if let Some(batch_bar) = &self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.files.get_mut(index) {
            state.label = format!("✓ {}", state.label);
            state.collapsed = state.total;
        }
        self.update_bars();
    }

    /// Clear every bar
    pub fn finish(&self) {
        if let Some(batch_bar) = &self.batch_bar {
            batch_bar.finish_with_message("All patterns generated");
        }
        let _ = self.multi_progress.clear();
    }

    fn update_bars(&self) {
        let active: Vec<&FileState> = self
            .files
            .iter()
            .filter(|state| !state.label.is_empty())
            .collect();
        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar, state) in self.file_bars.iter().zip(visible) {
            bar.set_length(state.total as u64);
            bar.set_position(state.collapsed as u64);
            let width = state.total.to_string().len();
            bar.set_message(format!("{:>width$}/{}", state.collapsed, state.total));
            bar.set_prefix(state.label.clone());
        }

        for bar in self.file_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
