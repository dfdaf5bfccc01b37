//! Sentiment labels and per-class score triples shared by both judges.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-way mood label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Sentiment {
    /// Fixed class order. Ties between classes resolve to the earliest entry.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// Returns the human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    /// Returns the short class key used in score tables
    pub fn key(&self) -> &'static str {
        match self {
            Sentiment::Positive => "pos",
            Sentiment::Neutral => "neu",
            Sentiment::Negative => "neg",
        }
    }

    /// Maps a rulebook score onto a label. Both thresholds are strict.
    pub fn from_score(score: f64) -> Self {
        if score > 1.0 {
            Sentiment::Positive
        } else if score < -1.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// One value per class, keyed `pos` / `neu` / `neg` on the wire
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassScores {
    pub pos: f64,
    pub neu: f64,
    pub neg: f64,
}

impl ClassScores {
    pub fn get(&self, class: Sentiment) -> f64 {
        match class {
            Sentiment::Positive => self.pos,
            Sentiment::Neutral => self.neu,
            Sentiment::Negative => self.neg,
        }
    }

    pub fn set(&mut self, class: Sentiment, value: f64) {
        match class {
            Sentiment::Positive => self.pos = value,
            Sentiment::Neutral => self.neu = value,
            Sentiment::Negative => self.neg = value,
        }
    }

    pub fn sum(&self) -> f64 {
        self.pos + self.neu + self.neg
    }

    /// Class holding the highest value, scanning in `Sentiment::ALL` order
    pub fn arg_max(&self) -> Sentiment {
        let mut best = Sentiment::Positive;
        let mut best_value = self.pos;
        for class in &Sentiment::ALL[1..] {
            let value = self.get(*class);
            if value > best_value {
                best = *class;
                best_value = value;
            }
        }
        best
    }

    /// Softmax over the three values.
    ///
    /// The maximum is subtracted before exponentiating so large negative
    /// log-posteriors do not underflow to an all-zero vector.
    pub fn softmax(&self) -> ClassScores {
        let max = self.pos.max(self.neu).max(self.neg);
        let mut exp = ClassScores::default();
        for class in Sentiment::ALL {
            exp.set(class, (self.get(class) - max).exp());
        }
        let total = exp.sum();
        ClassScores {
            pos: exp.pos / total,
            neu: exp.neu / total,
            neg: exp.neg / total,
        }
    }
}
