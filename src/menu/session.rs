use std::env;
use std::io::{BufRead, Write};

use log::{debug, info, warn};
use serde_json::Value;

use crate::menu::{
    errors::MenuError,
    exercises,
    handler::Menu,
    input::{Console, Prompt},
};
use crate::utils::math::FactorialMethod;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputFormat { Text, Json }

impl OutputFormat {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub prompt: String,
    pub output: OutputFormat,
    pub max_stream_reads: usize,
    pub factorial_method: FactorialMethod,
    /// Largest n accepted by the factorial exercise.
    pub max_factorial: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".into(),
            output: OutputFormat::Text,
            max_stream_reads: 10_000,
            factorial_method: FactorialMethod::Exact,
            max_factorial: 10_000,
        }
    }
}

impl SessionConfig {
    /// Read `MENU_PROMPT`, `MENU_OUTPUT`, `MAX_STREAM_READS`, `FACTORIAL_METHOD`
    /// and `MAX_FACTORIAL`, falling back to the defaults for anything missing
    /// or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let max_stream_reads = env::var("MAX_STREAM_READS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(defaults.max_stream_reads);
        let max_factorial = env::var("MAX_FACTORIAL")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&n: &i64| n >= 0)
            .unwrap_or(defaults.max_factorial);

        Self {
            prompt: env::var("MENU_PROMPT").unwrap_or(defaults.prompt),
            output: env::var("MENU_OUTPUT")
                .map(|v| OutputFormat::from_name(&v))
                .unwrap_or(defaults.output),
            max_stream_reads,
            factorial_method: env::var("FACTORIAL_METHOD")
                .map(|v| FactorialMethod::from_name(&v))
                .unwrap_or(defaults.factorial_method),
            max_factorial,
        }
    }
}

pub fn build_menu(cfg: &SessionConfig) -> Menu {
    exercises::register(Menu::builder(), cfg).build()
}

/// Render a handler result as `key: value` lines.
pub fn render_text(value: &Value) -> String {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{}: {}", k, render_scalar(v)))
            .collect::<Vec<_>>()
            .join("\n"),
        other => render_scalar(other),
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null => "undefined".into(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(render_scalar).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

pub struct Session {
    cfg: SessionConfig,
    menu: Menu,
}

impl Session {
    pub fn new(cfg: SessionConfig) -> Self {
        let menu = build_menu(&cfg);
        Self::with_menu(cfg, menu)
    }

    pub fn with_menu(cfg: SessionConfig, menu: Menu) -> Self {
        Self { cfg, menu }
    }

    fn render(&self, value: &Value) -> String {
        match self.cfg.output {
            OutputFormat::Text => render_text(value),
            OutputFormat::Json => value.to_string(),
        }
    }

    /// Menu loop. Returns the number of exercises that ran successfully.
    pub fn run<R: BufRead, W: Write>(&self, reader: R, writer: W) -> Result<usize, MenuError> {
        let mut console = Console::new(reader, writer);
        let mut completed = 0;
        info!("Session started with {:?} output", self.cfg.output);
        console.say(&self.menu.help())?;

        loop {
            let choice = match console.ask(&self.cfg.prompt) {
                Ok(line) => line.trim().to_lowercase(),
                Err(MenuError::EndOfInput) => break,
                Err(e) => return Err(e),
            };

            match choice.as_str() {
                "" => continue,
                "0" | "q" | "quit" | "exit" => break,
                "h" | "help" | "?" => {
                    console.say(&self.menu.help())?;
                    continue;
                }
                _ => {}
            }

            debug!("Dispatching choice '{}' ({:?})", choice, self.menu.title(&choice));
            match self.menu.dispatch(&choice, &mut console) {
                Ok(value) => {
                    completed += 1;
                    let out = self.render(&value);
                    console.say(&out)?;
                }
                Err(MenuError::EndOfInput) => {
                    warn!("Input ended in the middle of exercise '{}'", choice);
                    break;
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!("Exercise '{}' failed: {}", choice, e);
                    console.say(&format!("error: {}", e))?;
                }
            }
        }

        info!("Session finished after {} exercises", completed);
        Ok(completed)
    }
}
