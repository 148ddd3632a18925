use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// One dataset entry describing a single dinosaur.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DinosaurRecord {
    #[serde(rename = "dinosaurId", alias = "id")]
    pub id: String,
    pub name: String,
    pub pronunciation: String,
    #[serde(default)]
    pub meaning_of_name: String,
    #[serde(default)]
    pub diet: String,
    pub length_in_meters: f64,
    pub period: String,
    pub mya: Mya,
    pub info: String,
}

/// "Millions of years ago": either a point estimate or an inclusive range
/// where `start` is the earlier (larger) bound.
///
/// Serialized as a JSON array of one or two numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<Value>")]
pub enum Mya {
    Point(f64),
    Range { start: f64, end: f64 },
}

impl Mya {
    /// The most recent value, i.e. the smallest number in the sequence.
    pub fn min(&self) -> f64 {
        match *self {
            Mya::Point(v) => v,
            Mya::Range { start, end } => start.min(end),
        }
    }

    /// Whether a dinosaur with this span counts as alive at `mya`.
    ///
    /// A point estimate also matches one unit below it, never above.
    pub fn contains(&self, mya: f64) -> bool {
        match *self {
            Mya::Point(v) => mya == v || mya == v - 1.0,
            Mya::Range { start, end } => start >= mya && mya >= end,
        }
    }

    pub fn to_vec(&self) -> Vec<f64> {
        match *self {
            Mya::Point(v) => vec![v],
            Mya::Range { start, end } => vec![start, end],
        }
    }

    pub fn to_json(&self) -> Value {
        Value::Array(self.to_vec().into_iter().map(json_number).collect())
    }
}

/// Whole finite numbers become JSON integers (`65`, not `65.0`); the rest stay
/// floats. Non-finite values have no JSON form and become `null`.
pub fn json_number(value: f64) -> Value {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT {
        Value::from(value as i64)
    } else {
        serde_json::Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

impl TryFrom<Vec<f64>> for Mya {
    type Error = String;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        match values.as_slice() {
            [v] => Ok(Mya::Point(*v)),
            [start, end] => Ok(Mya::Range {
                start: *start,
                end: *end,
            }),
            other => Err(format!(
                "mya must hold one or two numbers, got {}",
                other.len()
            )),
        }
    }
}

impl From<Mya> for Vec<Value> {
    fn from(mya: Mya) -> Self {
        mya.to_vec().into_iter().map(json_number).collect()
    }
}

/// A record field that can be projected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    Pronunciation,
    MeaningOfName,
    Diet,
    LengthInMeters,
    Period,
    Mya,
    Info,
}

impl Field {
    pub const NAMES: [&'static str; 10] = [
        "dinosaurId",
        "id",
        "name",
        "pronunciation",
        "meaningOfName",
        "diet",
        "lengthInMeters",
        "period",
        "mya",
        "info",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "dinosaurId",
            Field::Name => "name",
            Field::Pronunciation => "pronunciation",
            Field::MeaningOfName => "meaningOfName",
            Field::Diet => "diet",
            Field::LengthInMeters => "lengthInMeters",
            Field::Period => "period",
            Field::Mya => "mya",
            Field::Info => "info",
        }
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dinosaurId" | "id" => Ok(Field::Id),
            "name" => Ok(Field::Name),
            "pronunciation" => Ok(Field::Pronunciation),
            "meaningOfName" => Ok(Field::MeaningOfName),
            "diet" => Ok(Field::Diet),
            "lengthInMeters" => Ok(Field::LengthInMeters),
            "period" => Ok(Field::Period),
            "mya" => Ok(Field::Mya),
            "info" => Ok(Field::Info),
            other => Err(format!("unknown dinosaur field: {}", other)),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
