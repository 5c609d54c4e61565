use std::io::Write as _;

use anyhow::Context as _;

use super::{OutputFormatter, Rendered};

pub(crate) struct HumanReadableOutput;

impl OutputFormatter for HumanReadableOutput {
    fn print(&self, rendered: &Rendered) -> anyhow::Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", rendered.output).context("write to stdout")
    }
}
