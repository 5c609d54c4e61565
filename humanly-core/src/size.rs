use crate::format::FloatFormat;
use crate::scale::{Label, Ladder, Rung, scale};

const DECIMAL: [&str; 8] = ["KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
const BINARY: [&str; 8] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"];
const GNU: [&str; 8] = ["K", "M", "G", "T", "P", "E", "Z", "Y"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SizeOptions {
    /// Powers of 1024 instead of 1000.
    pub binary: bool,
    /// Single-letter suffixes with no separating space ("1.5K").
    pub gnu: bool,
    pub format: FloatFormat,
}

impl SizeOptions {
    #[must_use]
    pub fn with_binary(mut self, binary: bool) -> Self {
        self.binary = binary;
        self
    }

    #[must_use]
    pub fn with_gnu(mut self, gnu: bool) -> Self {
        self.gnu = gnu;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: FloatFormat) -> Self {
        self.format = format;
        self
    }

    fn base(self) -> f64 {
        if self.binary { 1024.0 } else { 1000.0 }
    }

    fn suffixes(self) -> &'static [&'static str; 8] {
        match (self.gnu, self.binary) {
            (true, _) => &GNU,
            (false, true) => &BINARY,
            (false, false) => &DECIMAL,
        }
    }

    fn rungs(self) -> [Rung; 8] {
        let base = self.base();
        let suffixes = self.suffixes();
        let mut unit = 1.0;
        std::array::from_fn(|idx| {
            unit *= base;
            Rung::new(unit, Label::fixed(suffixes[idx]))
        })
    }
}

/// Human-readable byte count: "1.5 KB", "1.0 KiB", "1.5K", "300 bytes".
///
/// Values past the yotta unit stay expressed in it.
#[must_use]
pub fn naturalsize(value: impl Into<i128>, opts: &SizeOptions) -> String {
    let value: i128 = value.into();
    let sign = if value < 0 { "-" } else { "" };
    let magnitude = value.unsigned_abs();

    let rungs = opts.rungs();
    let scaled = scale(magnitude as f64, &Ladder::new(Label::fixed("bytes"), &rungs));

    match (scaled.is_base(), opts.gnu) {
        (true, true) => format!("{sign}{magnitude}"),
        (true, false) => format!("{sign}{magnitude} bytes"),
        (false, true) => format!(
            "{sign}{}{}",
            opts.format.render(scaled.quantity),
            scaled.label.plural
        ),
        (false, false) => format!(
            "{sign}{} {}",
            opts.format.render(scaled.quantity),
            scaled.label.plural
        ),
    }
}
