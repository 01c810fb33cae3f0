//! Состояние поля с подсказками, привязанного к справочнику.
//!
//! Текст в поле сам по себе ничего не значит: отправка разрешена только
//! после явного выбора элемента из подсказок.

use super::traits::AggregatePickerResult;

/// Максимум подсказок в списке
pub const SUGGESTION_LIMIT: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct Typeahead<T> {
    text: String,
    selected: Option<T>,
    open: bool,
}

impl<T> Default for Typeahead<T> {
    fn default() -> Self {
        Self {
            text: String::new(),
            selected: None,
            open: false,
        }
    }
}

impl<T: AggregatePickerResult + Clone> Typeahead<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Typing drops a selection whose name no longer matches the text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if self
            .selected
            .as_ref()
            .is_some_and(|item| item.display_name() != self.text)
        {
            self.selected = None;
        }
        self.open = !self.text.trim().is_empty();
    }

    /// Case-insensitive substring matches over the whole catalog, at most
    /// [`SUGGESTION_LIMIT`]. Lazy; call again to restart.
    pub fn suggestions<'a>(&'a self, catalog: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        let needle = self.text.trim().to_lowercase();
        let limit = if self.open && !needle.is_empty() {
            SUGGESTION_LIMIT
        } else {
            0
        };
        catalog
            .iter()
            .filter(move |item| item.display_name().to_lowercase().contains(&needle))
            .take(limit)
    }

    pub fn select(&mut self, item: T) {
        self.text = item.display_name();
        self.selected = Some(item);
        self.open = false;
    }

    /// Hide the list, keeping text and selection
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The explicitly selected entry, if the text still names it
    pub fn selected_for_submit(&self) -> Result<&T, String> {
        match &self.selected {
            Some(item) if item.display_name() == self.text => Ok(item),
            _ => Err("Please select a product from the suggestions".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(&'static str);

    impl AggregatePickerResult for Item {
        fn id(&self) -> String {
            self.0.to_string()
        }
        fn display_name(&self) -> String {
            self.0.to_string()
        }
    }

    fn catalog() -> Vec<Item> {
        vec![
            Item("Laptop"),
            Item("Laptop Stand"),
            Item("Desk Lamp"),
            Item("USB Cable"),
        ]
    }

    fn names<'a>(items: impl Iterator<Item = &'a Item>) -> Vec<&'static str> {
        items.map(|i| i.0).collect()
    }

    #[test]
    fn test_case_insensitive_substring() {
        let catalog = catalog();
        let mut picker = Typeahead::new();
        picker.set_text("LAP");
        assert_eq!(names(picker.suggestions(&catalog)), vec!["Laptop", "Laptop Stand"]);
        picker.set_text("la");
        assert_eq!(
            names(picker.suggestions(&catalog)),
            vec!["Laptop", "Laptop Stand", "Desk Lamp"]
        );
    }

    #[test]
    fn test_empty_text_has_no_suggestions() {
        let catalog = catalog();
        let mut picker = Typeahead::new();
        picker.set_text("   ");
        assert_eq!(picker.suggestions(&catalog).count(), 0);
    }

    #[test]
    fn test_suggestions_are_bounded() {
        let many: Vec<Item> = std::iter::repeat(Item("Cable")).take(20).collect();
        let mut picker = Typeahead::new();
        picker.set_text("cab");
        assert_eq!(picker.suggestions(&many).count(), SUGGESTION_LIMIT);
    }

    #[test]
    fn test_exact_name_typed_without_selection_is_rejected() {
        let mut picker = Typeahead::<Item>::new();
        picker.set_text("Laptop");
        assert!(picker.selected_for_submit().is_err());
    }

    #[test]
    fn test_selection_closes_list_and_submits() {
        let catalog = catalog();
        let mut picker = Typeahead::new();
        picker.set_text("stand");
        let choice = picker.suggestions(&catalog).next().cloned().unwrap();
        picker.select(choice);
        assert!(!picker.is_open());
        assert_eq!(picker.text(), "Laptop Stand");
        assert_eq!(picker.suggestions(&catalog).count(), 0);
        assert_eq!(picker.selected_for_submit().unwrap(), &Item("Laptop Stand"));
    }

    #[test]
    fn test_close_hides_suggestions_until_next_input() {
        let catalog = catalog();
        let mut picker = Typeahead::new();
        picker.set_text("lap");
        picker.close();
        assert!(!picker.is_open());
        assert_eq!(picker.text(), "lap");
        assert_eq!(picker.suggestions(&catalog).count(), 0);

        picker.set_text("lapt");
        assert_eq!(names(picker.suggestions(&catalog)), vec!["Laptop", "Laptop Stand"]);
    }

    #[test]
    fn test_editing_text_after_selection_drops_it() {
        let mut picker = Typeahead::new();
        picker.select(Item("Laptop"));
        picker.set_text("Laptop ");
        assert!(picker.selected().is_none());
        assert!(picker.selected_for_submit().is_err());
    }
}
