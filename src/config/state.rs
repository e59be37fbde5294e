// src/config/state.rs
use super::options::AppOptions;
use crate::data::{CalendarFilter, ProjectFilter};

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Project shown on the detail tab (repository card "Ver detalhes")
    pub selected_project_id: Option<String>,

    pub project_filter: ProjectFilter,
    pub calendar_filter: CalendarFilter,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            current_page_index: 0,
            selected_project_id: None,
            project_filter: ProjectFilter::default(),
            calendar_filter: CalendarFilter::default(),
        }
    }
}

impl GuiState {
    /// Initial viewport size in points.
    pub fn inner_size(&self) -> [f32; 2] {
        [self.window_w as f32, self.window_h as f32]
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_follows_window_fields() {
        let mut gui = GuiState::default();
        assert_eq!(gui.inner_size(), [1100.0, 700.0]);
        gui.window_w = 800;
        gui.window_h = 600;
        assert_eq!(gui.inner_size(), [800.0, 600.0]);
    }
}
