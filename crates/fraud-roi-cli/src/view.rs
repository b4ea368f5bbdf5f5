use serde::Serialize;

/// Top-level tab of the presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Positioning,
    Roi,
    Plan,
}

/// Expand/collapse state owned by the display layer. The model never sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub section: Section,
    pub expanded_attribute: Option<String>,
    pub show_counter_positions: bool,
    pub expanded_counter: Option<usize>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            section: Section::Positioning,
            expanded_attribute: Some("speed".to_string()),
            show_counter_positions: false,
            expanded_counter: None,
        }
    }
}

impl ViewState {
    pub fn select_section(&mut self, section: Section) {
        self.section = section;
    }

    /// Expand `id`, or collapse it if it is already the expanded row.
    pub fn toggle_attribute(&mut self, id: &str) {
        if self.is_attribute_expanded(id) {
            self.expanded_attribute = None;
        } else {
            self.expanded_attribute = Some(id.to_string());
        }
    }

    pub fn is_attribute_expanded(&self, id: &str) -> bool {
        self.expanded_attribute.as_deref() == Some(id)
    }

    pub fn toggle_counter_positions(&mut self) {
        self.show_counter_positions = !self.show_counter_positions;
    }

    /// At most one counter-position is open at a time.
    pub fn toggle_counter(&mut self, index: usize) {
        if self.expanded_counter == Some(index) {
            self.expanded_counter = None;
        } else {
            self.expanded_counter = Some(index);
        }
    }

    pub fn is_counter_expanded(&self, index: usize) -> bool {
        self.show_counter_positions && self.expanded_counter == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let view = ViewState::default();
        assert_eq!(view.section, Section::Positioning);
        assert!(view.is_attribute_expanded("speed"));
        assert!(!view.show_counter_positions);
        assert_eq!(view.expanded_counter, None);
    }

    #[test]
    fn test_attribute_toggle_is_exclusive() {
        let mut view = ViewState::default();
        view.toggle_attribute("fp");
        assert!(view.is_attribute_expanded("fp"));
        assert!(!view.is_attribute_expanded("speed"));
        view.toggle_attribute("fp");
        assert_eq!(view.expanded_attribute, None);
    }

    #[test]
    fn test_counter_hidden_until_section_shown() {
        let mut view = ViewState::default();
        view.toggle_counter(1);
        assert!(!view.is_counter_expanded(1));
        view.toggle_counter_positions();
        assert!(view.is_counter_expanded(1));
        view.toggle_counter(2);
        assert!(!view.is_counter_expanded(1));
        assert!(view.is_counter_expanded(2));
        view.toggle_counter(2);
        assert_eq!(view.expanded_counter, None);
    }

    #[test]
    fn test_select_section() {
        let mut view = ViewState::default();
        view.select_section(Section::Roi);
        assert_eq!(view.section, Section::Roi);
    }
}
