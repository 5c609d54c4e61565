//! Table-driven unit selection shared by every humanizer.
//!
//! A [`Ladder`] holds rungs in ascending threshold order. [`scale`] walks them from the
//! largest down and picks the first rung whose threshold the magnitude meets.

/// Singular/plural wording of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub singular: &'static str,
    pub plural: &'static str,
    /// Indefinite article used for the word form of a count of one ("a", "an").
    pub article: &'static str,
}

impl Label {
    #[must_use]
    pub const fn new(singular: &'static str, plural: &'static str) -> Self {
        Self {
            singular,
            plural,
            article: "a",
        }
    }

    /// Label whose singular and plural spellings are the same (`KB`, `million`).
    #[must_use]
    pub const fn fixed(label: &'static str) -> Self {
        Self::new(label, label)
    }

    #[must_use]
    pub const fn with_article(mut self, article: &'static str) -> Self {
        self.article = article;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rung {
    pub threshold: f64,
    /// Unit size the magnitude is divided by once this rung wins.
    pub divisor: f64,
    pub label: Label,
}

impl Rung {
    #[must_use]
    pub const fn new(threshold: f64, label: Label) -> Self {
        Self {
            threshold,
            divisor: threshold,
            label,
        }
    }

    /// Rung whose entry threshold differs from its unit size (months enter at 4.35 weeks
    /// but count 30.5 days each).
    #[must_use]
    pub const fn with_divisor(threshold: f64, divisor: f64, label: Label) -> Self {
        Self {
            threshold,
            divisor,
            label,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Ladder<'a> {
    pub base: Label,
    pub rungs: &'a [Rung],
    /// Magnitudes at or above this have no word form and resolve to the base label.
    pub ceiling: Option<f64>,
}

impl<'a> Ladder<'a> {
    #[must_use]
    pub const fn new(base: Label, rungs: &'a [Rung]) -> Self {
        Self {
            base,
            rungs,
            ceiling: None,
        }
    }

    #[must_use]
    pub const fn with_ceiling(mut self, ceiling: f64) -> Self {
        self.ceiling = Some(ceiling);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaled {
    pub quantity: f64,
    pub label: Label,
    /// Index of the winning rung; `None` for the base unit.
    pub rung: Option<usize>,
}

impl Scaled {
    /// Whole units, truncated toward zero.
    #[must_use]
    pub fn count(&self) -> i128 {
        self.quantity.trunc() as i128
    }

    #[must_use]
    pub fn is_one(&self) -> bool {
        self.count() == 1
    }

    #[must_use]
    pub fn is_base(&self) -> bool {
        self.rung.is_none()
    }

    /// Word-style phrase: "a second", "an hour", "3 days".
    #[must_use]
    pub fn word_phrase(&self) -> String {
        if self.is_one() {
            format!("{} {}", self.label.article, self.label.singular)
        } else {
            format!("{} {}", self.count(), self.label.plural)
        }
    }
}

/// Picks the coarsest rung whose threshold `magnitude` meets.
///
/// `magnitude` must be finite and non-negative; callers strip the sign first.
#[must_use]
pub fn scale(magnitude: f64, ladder: &Ladder<'_>) -> Scaled {
    let base = Scaled {
        quantity: magnitude,
        label: ladder.base,
        rung: None,
    };

    if ladder.ceiling.is_some_and(|ceiling| magnitude >= ceiling) {
        log::trace!("magnitude {magnitude} is past the ladder ceiling");
        return base;
    }

    ladder
        .rungs
        .iter()
        .enumerate()
        .rev()
        .find(|(_, rung)| magnitude >= rung.threshold)
        .map_or(base, |(idx, rung)| {
            log::trace!(
                "magnitude {magnitude} resolved to {} (threshold {})",
                rung.label.plural,
                rung.threshold
            );
            Scaled {
                quantity: magnitude / rung.divisor,
                label: rung.label,
                rung: Some(idx),
            }
        })
}
