//! Shared output formatting for ticklist CLI commands.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

pub const SCHEMA_VERSION: &str = "ticklist.v1";

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub quiet: bool,
}

#[derive(Debug, Clone)]
pub struct HumanOutput {
    header: String,
    summary: Vec<(String, String)>,
    details: Vec<String>,
    warnings: Vec<String>,
    next_steps: Vec<String>,
}

impl HumanOutput {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            summary: Vec::new(),
            details: Vec::new(),
            warnings: Vec::new(),
            next_steps: Vec::new(),
        }
    }

    pub fn push_summary(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.summary.push((key.into(), value.into()));
    }

    pub fn push_detail(&mut self, value: impl Into<String>) {
        self.details.push(value.into());
    }

    pub fn push_warning(&mut self, value: impl Into<String>) {
        self.warnings.push(value.into());
    }

    pub fn push_next_step(&mut self, value: impl Into<String>) {
        self.next_steps.push(value.into());
    }
}

pub fn emit_success<T: Serialize>(
    options: OutputOptions,
    command: &str,
    data: &T,
    human: Option<&HumanOutput>,
) -> Result<()> {
    if options.json {
        let mut payload = envelope(command, "success");
        payload.insert("data".to_string(), serde_json::to_value(data)?);
        if let Some(human) = human {
            insert_lines(&mut payload, "warnings", &human.warnings);
            insert_lines(&mut payload, "next_steps", &human.next_steps);
        }

        // One line per envelope so shell pipelines can split on newlines.
        println!("{}", Value::Object(payload));
        return Ok(());
    }

    if options.quiet {
        return Ok(());
    }

    if let Some(human) = human {
        println!("{}", format_human(human));
    }

    Ok(())
}

pub fn emit_error(command: &str, err: &crate::error::Error, json: bool) -> Result<()> {
    let next_steps = error_next_steps(err);

    if json {
        let mut body = serde_json::Map::new();
        body.insert("message".to_string(), err.to_string().into());
        body.insert("code".to_string(), err.exit_code().into());
        body.insert("kind".to_string(), error_kind(err).into());
        if let Some(details) = err.details() {
            body.insert("details".to_string(), details);
        }

        let mut payload = envelope(command, "error");
        payload.insert("error".to_string(), Value::Object(body));
        insert_lines(&mut payload, "next_steps", &next_steps);

        println!("{}", Value::Object(payload));
        return Ok(());
    }

    eprintln!("error: {err}");
    if let Some(hint) = next_steps.first() {
        eprintln!("hint: {hint}");
    }
    Ok(())
}

pub fn format_human(output: &HumanOutput) -> String {
    let mut text = output.header.clone();

    if !output.summary.is_empty() {
        text.push_str("\n\nSummary:");
        for (key, value) in &output.summary {
            if value.is_empty() {
                text.push_str(&format!("\n- {key}"));
            } else {
                text.push_str(&format!("\n- {key}: {value}"));
            }
        }
    }

    let sections = [
        ("Details", &output.details),
        ("Warnings", &output.warnings),
        ("Next steps", &output.next_steps),
    ];
    for (title, items) in sections {
        if items.is_empty() {
            continue;
        }
        text.push_str(&format!("\n\n{title}:"));
        for item in items {
            text.push_str(&format!("\n- {item}"));
        }
    }

    text
}

pub fn infer_command_name_from_args() -> String {
    std::env::args()
        .skip(1)
        .find(|arg| !arg.starts_with('-'))
        .unwrap_or_else(|| "ticklist".to_string())
}

fn envelope(command: &str, status: &'static str) -> serde_json::Map<String, Value> {
    let mut payload = serde_json::Map::new();
    payload.insert("schema_version".to_string(), SCHEMA_VERSION.into());
    payload.insert("command".to_string(), command.into());
    payload.insert("status".to_string(), status.into());
    payload
}

fn insert_lines(payload: &mut serde_json::Map<String, Value>, key: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    let items = lines.iter().map(|line| Value::String(line.clone())).collect();
    payload.insert(key.to_string(), Value::Array(items));
}

fn error_kind(err: &crate::error::Error) -> &'static str {
    match err.exit_code() {
        2 => "user_error",
        _ => "operation_failed",
    }
}

fn error_next_steps(err: &crate::error::Error) -> Vec<String> {
    use crate::error::Error;

    match err {
        Error::EmptyText => vec!["ticklist add \"<text>\"".to_string()],
        Error::TextTooLong { limit, .. } => {
            vec![format!("shorten the text to {limit} characters or fewer")]
        }
        Error::NothingToExport => vec!["add a task first: ticklist add \"<text>\"".to_string()],
        Error::InvalidConfig(_) | Error::ConfigParse(_) => {
            vec!["fix config.toml then retry".to_string()]
        }
        Error::LockFailed(_) => vec!["close other ticklist processes then retry".to_string()],
        _ => Vec::new(),
    }
}
