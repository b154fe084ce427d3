use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::menu::errors::MenuError;
use crate::menu::input::Prompt;

pub trait ExerciseHandler {
    fn handle(&self, prompt: &mut dyn Prompt) -> Result<Value, MenuError>;
}

pub struct SimpleHandler<F>(pub F);

impl<F> ExerciseHandler for SimpleHandler<F>
where
    F: Fn(&mut dyn Prompt) -> Result<Value, MenuError>,
{
    fn handle(&self, prompt: &mut dyn Prompt) -> Result<Value, MenuError> {
        (self.0)(prompt)
    }
}

/// Wrap a closure or fn item as a shareable handler.
pub fn simple<F>(f: F) -> Arc<dyn ExerciseHandler>
where
    F: Fn(&mut dyn Prompt) -> Result<Value, MenuError> + 'static,
{
    Arc::new(SimpleHandler(f))
}

struct MenuEntry {
    key: String,
    title: String,
    handler: Arc<dyn ExerciseHandler>,
}

/// Numbered exercise table.
pub struct Menu {
    entries: Vec<MenuEntry>,
    index: HashMap<String, usize>,
}

impl Menu {
    pub fn builder() -> MenuBuilder {
        MenuBuilder::default()
    }

    pub fn dispatch(&self, choice: &str, prompt: &mut dyn Prompt) -> Result<Value, MenuError> {
        let choice = choice.trim();
        let idx = self
            .index
            .get(choice)
            .ok_or_else(|| MenuError::UnknownOption(choice.to_string()))?;
        self.entries[*idx].handler.handle(prompt)
    }

    pub fn title(&self, choice: &str) -> Option<&str> {
        self.index
            .get(choice.trim())
            .map(|&idx| self.entries[idx].title.as_str())
    }

    pub fn help(&self) -> String {
        let mut output = String::from("Available exercises:\n");
        for entry in &self.entries {
            output.push_str(&format!(" {:>2}) {}\n", entry.key, entry.title));
        }
        output
    }
}

#[derive(Default)]
pub struct MenuBuilder {
    entries: Vec<MenuEntry>,
}

impl MenuBuilder {
    /// Register `handler` under `key`. A later entry with the same key replaces the earlier one.
    pub fn entry(mut self, key: &str, title: &str, handler: Arc<dyn ExerciseHandler>) -> Self {
        self.entries.retain(|e| e.key != key);
        self.entries.push(MenuEntry {
            key: key.to_string(),
            title: title.to_string(),
            handler,
        });
        self
    }

    pub fn build(self) -> Menu {
        let index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.key.clone(), i))
            .collect();
        Menu { entries: self.entries, index }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct NoInput;
    impl Prompt for NoInput {
        fn ask(&mut self, _prompt: &str) -> Result<String, MenuError> {
            Err(MenuError::EndOfInput)
        }
    }

    fn menu() -> Menu {
        Menu::builder()
            .entry("1", "first", simple(|_| Ok(json!({"n": 1}))))
            .entry("2", "second", simple(|p| p.ask("x: ").map(Value::String)))
            .build()
    }

    #[test]
    fn test_dispatch() {
        let m = menu();
        assert_eq!(m.dispatch(" 1 ", &mut NoInput).unwrap(), json!({"n": 1}));
        assert!(matches!(m.dispatch("2", &mut NoInput), Err(MenuError::EndOfInput)));
        assert!(matches!(m.dispatch("7", &mut NoInput), Err(MenuError::UnknownOption(_))));
    }

    #[test]
    fn test_replace_entry() {
        let m = Menu::builder()
            .entry("1", "old", simple(|_| Ok(json!(0))))
            .entry("1", "new", simple(|_| Ok(json!(1))))
            .build();
        assert_eq!(m.title("1"), Some("new"));
        assert_eq!(m.dispatch("1", &mut NoInput).unwrap(), json!(1));
    }

    #[test]
    fn test_help() {
        let help_text = menu().help();
        assert!(help_text.starts_with("Available exercises:"));
        assert!(help_text.contains("  1) first"));
        assert!(help_text.contains("  2) second"));
    }
}
