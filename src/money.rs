use serde::{
    Deserialize,
    Deserializer,
    de,
};
use std::{
    iter::Sum,
    ops::{
        Add,
        AddAssign,
        Sub,
        SubAssign,
    },
};

/// A non-negative amount of money in centavos. The catalog document carries
/// fractional prices; they are rounded to cents once at parse time and all
/// arithmetic after that is integral, so repeated add/remove cycles restore a
/// total exactly.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() || value < 0.0 {
            return Err(de::Error::custom(format!("invalid price: {value}")));
        }
        Ok(Money((value * 100.0).round() as u64))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        Money(iter.map(|m| m.0).sum())
    }
}

/// Currency rendering is a presentation policy, not core logic; the ledger
/// delegates to whichever formatter the embedding application supplies.
pub trait PriceFormatter {
    fn format(&self, amount: Money) -> String;
}

/// pt-BR / BRL: `R$ 1.234,56`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrlFormatter;

impl PriceFormatter for BrlFormatter {
    fn format(&self, amount: Money) -> String {
        let whole = (amount.cents() / 100).to_string();
        let cents = amount.cents() % 100;
        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.bytes().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit as char);
        }
        format!("R$ {grouped},{cents:02}")
    }
}
