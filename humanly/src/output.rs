use crate::cli::OutputFormat;

mod human;
mod json;

/// One humanized result, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub(crate) struct Rendered {
    pub function: &'static str,
    pub input: String,
    pub output: String,
}

pub(crate) trait OutputFormatter {
    fn print(&self, rendered: &Rendered) -> anyhow::Result<()>;
}

pub(crate) fn formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::HumanReadable => Box::new(human::HumanReadableOutput),
        OutputFormat::Json => Box::new(json::JsonOutput),
    }
}
