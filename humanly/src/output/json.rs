use std::io::Write as _;

use anyhow::Context as _;

use super::{OutputFormatter, Rendered};

pub(crate) struct JsonOutput;

impl OutputFormatter for JsonOutput {
    fn print(&self, rendered: &Rendered) -> anyhow::Result<()> {
        let mut out = std::io::stdout().lock();
        serde_json::to_writer(&mut out, rendered).context("encode json line")?;
        writeln!(out).context("write to stdout")
    }
}
