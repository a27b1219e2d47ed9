use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 菜單分類，只有三種合法值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Course {
    Starter,
    Main,
    Dessert,
}

impl Course {
    pub const ALL: [Course; 3] = [Course::Starter, Course::Main, Course::Dessert];

    pub fn as_str(&self) -> &'static str {
        match self {
            Course::Starter => "Starter",
            Course::Main => "Main",
            Course::Dessert => "Dessert",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown course '{0}', expected one of: Starter, Main, Dessert")]
pub struct UnknownCourse(pub String);

impl FromStr for Course {
    type Err = UnknownCourse;

    /// Exact, case-sensitive match; surrounding whitespace is not stripped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Course::ALL
            .into_iter()
            .find(|course| course.as_str() == s)
            .ok_or_else(|| UnknownCourse(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("price is empty")]
    Empty,
    #[error("price is not a finite decimal number")]
    Malformed,
    #[error("price cannot be negative")]
    Negative,
    #[error("price has more than 28 significant decimal places")]
    TooPrecise,
    #[error("price is too large")]
    TooLarge,
}

/// Exact non-negative amount: `mantissa / 10^scale`.
///
/// Trailing fractional zeros are always stripped, so equal amounts compare
/// equal whatever scale they were typed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Price {
    mantissa: u128,
    scale: u32,
}

impl Price {
    pub const MAX_SCALE: u32 = 28;

    pub const fn from_cents(cents: u64) -> Self {
        Self::normalized(cents as u128, 2)
    }

    const fn normalized(mut mantissa: u128, mut scale: u32) -> Self {
        while scale > 0 && mantissa % 10 == 0 {
            mantissa /= 10;
            scale -= 1;
        }
        Self { mantissa, scale }
    }

    pub fn mantissa(&self) -> u128 {
        self.mantissa
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa == 0
    }
}

impl fmt::Display for Price {
    /// Canonical form: at least two fractional digits, more only when the
    /// amount needs them ("5.00", "1.999").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divisor = 10u128.pow(self.scale);
        let whole = self.mantissa / divisor;
        let fraction = self.mantissa % divisor;

        match self.scale {
            0 => write!(f, "{}.00", whole),
            1 => write!(f, "{}.{}0", whole, fraction),
            scale => write!(f, "{}.{:0width$}", whole, fraction, width = scale as usize),
        }
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Price {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let whole = |p: &Price| p.mantissa / 10u128.pow(p.scale);
        // 小數部分補齊到相同位數再比較
        let fraction = |p: &Price| (p.mantissa % 10u128.pow(p.scale)) * 10u128.pow(Self::MAX_SCALE - p.scale);
        whole(self)
            .cmp(&whole(other))
            .then_with(|| fraction(self).cmp(&fraction(other)))
    }
}

impl FromStr for Price {
    type Err = PriceError;

    /// Accepts any finite non-negative decimal: optional sign, digits with an
    /// optional point, optional `e`/`E` exponent. `-0` is zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }

        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let price = parse_unsigned(body)?;
        if negative && !price.is_zero() {
            return Err(PriceError::Negative);
        }
        Ok(price)
    }
}

fn parse_unsigned(s: &str) -> Result<Price, PriceError> {
    let (number, exponent) = match s.find(|c: char| c == 'e' || c == 'E') {
        Some(index) => (&s[..index], parse_exponent(&s[index + 1..])?),
        None => (s, 0),
    };

    let (units, fraction) = number.split_once('.').unwrap_or((number, ""));
    if units.is_empty() && fraction.is_empty() {
        return Err(PriceError::Malformed);
    }
    if !units.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PriceError::Malformed);
    }

    let fraction = fraction.trim_end_matches('0');
    let mut mantissa: u128 = 0;
    for digit in units.bytes().chain(fraction.bytes()) {
        mantissa = mantissa
            .checked_mul(10)
            .and_then(|m| m.checked_add(u128::from(digit - b'0')))
            .ok_or(PriceError::TooLarge)?;
    }
    if mantissa == 0 {
        return Ok(Price::default());
    }

    let scale = (fraction.len() as i64)
        .checked_sub(exponent)
        .ok_or(PriceError::TooPrecise)?;
    if scale < 0 {
        let factor = u32::try_from(-scale)
            .ok()
            .and_then(|n| 10u128.checked_pow(n))
            .ok_or(PriceError::TooLarge)?;
        let mantissa = mantissa.checked_mul(factor).ok_or(PriceError::TooLarge)?;
        return Ok(Price::normalized(mantissa, 0));
    }

    let price = Price::normalized(mantissa, u32::try_from(scale).map_err(|_| PriceError::TooPrecise)?);
    if price.scale > Price::MAX_SCALE {
        return Err(PriceError::TooPrecise);
    }
    Ok(price)
}

fn parse_exponent(s: &str) -> Result<i64, PriceError> {
    let digits = s
        .strip_prefix('+')
        .or_else(|| s.strip_prefix('-'))
        .unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PriceError::Malformed);
    }
    // 超出範圍的指數不可能產生可表示的金額
    s.parse::<i64>().map_err(|_| {
        if s.starts_with('-') {
            PriceError::TooPrecise
        } else {
            PriceError::TooLarge
        }
    })
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Catalog-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub(crate) fn from_sequence(n: u64) -> Self {
        Self(n.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub(crate) id: EntryId,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) course: Course,
    pub(crate) price: Price,
}

impl MenuEntry {
    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn course(&self) -> Course {
        self.course
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

/// 使用者輸入的原始資料，尚未驗證
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntryInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub price: String,
}

impl RawEntryInput {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        course: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            course: course.into(),
            price: price.into(),
        }
    }
}
