use serde::{Deserialize, Serialize};

/// Money amount represented in cents to avoid floating point issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Creates a new Money amount from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates a new Money amount from a whole dollar value.
    pub const fn from_dollars(dollars: i64) -> Self {
        Self {
            cents: dollars * 100,
        }
    }

    /// Returns zero money.
    pub const fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the dollar portion (whole number).
    pub fn dollars(&self) -> i64 {
        self.cents / 100
    }

    /// Returns the cents portion (remainder after dollars).
    pub fn cents_part(&self) -> i64 {
        self.cents.abs() % 100
    }

    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Multiplies by a count of units.
    pub fn multiply(&self, count: u32) -> Money {
        Money {
            cents: self.cents * i64::from(count),
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cents < 0 {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents + rhs.cents,
        }
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.cents += rhs.cents;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Tax rate expressed in basis points (1/100 of a percent).
///
/// `TaxRate::from_basis_points(1000)` is 10%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate {
    basis_points: u32,
}

impl TaxRate {
    /// A rate that never adds tax.
    pub const EXEMPT: TaxRate = TaxRate { basis_points: 0 };

    pub const fn from_basis_points(basis_points: u32) -> Self {
        Self { basis_points }
    }

    /// Creates a rate from a whole percentage.
    pub const fn from_percent(percent: u32) -> Self {
        Self {
            basis_points: percent * 100,
        }
    }

    pub fn basis_points(&self) -> u32 {
        self.basis_points
    }

    /// Computes the tax owed on `amount`, rounded half-up to the nearest cent.
    pub fn apply(&self, amount: Money) -> Money {
        let scaled = amount.cents() * i64::from(self.basis_points);
        Money::from_cents((scaled + 5_000).div_euclid(10_000))
    }
}

impl std::fmt::Display for TaxRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.basis_points / 100;
        let fraction = self.basis_points % 100;
        if fraction == 0 {
            write!(f, "{whole}%")
        } else if fraction % 10 == 0 {
            write!(f, "{whole}.{}%", fraction / 10)
        } else {
            write!(f, "{whole}.{fraction:02}%")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_from_cents() {
        let money = Money::from_cents(1234);
        assert_eq!(money.cents(), 1234);
        assert_eq!(money.dollars(), 12);
        assert_eq!(money.cents_part(), 34);
    }

    #[test]
    fn money_display() {
        assert_eq!(Money::from_cents(2420).to_string(), "$24.20");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-150).to_string(), "-$1.50");
    }

    #[test]
    fn money_sum_and_multiply() {
        let total: Money = [Money::from_dollars(10), Money::from_dollars(12)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_cents(2200));
        assert_eq!(Money::from_cents(150).multiply(3), Money::from_cents(450));
    }

    #[test]
    fn tax_rate_applies_to_whole_amounts() {
        let rate = TaxRate::from_percent(10);
        assert_eq!(rate.apply(Money::from_dollars(10)), Money::from_cents(100));
        assert_eq!(rate.apply(Money::from_dollars(12)), Money::from_cents(120));
        assert_eq!(rate.apply(Money::from_dollars(22)), Money::from_cents(220));
    }

    #[test]
    fn tax_rate_rounds_half_up() {
        let rate = TaxRate::from_percent(8);
        // 8% of $13.50 is $1.08 exactly; 8% of $0.06 is 0.48 cents
        assert_eq!(rate.apply(Money::from_cents(1350)), Money::from_cents(108));
        assert_eq!(rate.apply(Money::from_cents(6)), Money::zero());
        // 10% of $0.05 is 0.5 cents
        assert_eq!(
            TaxRate::from_percent(10).apply(Money::from_cents(5)),
            Money::from_cents(1)
        );
    }

    #[test]
    fn exempt_rate_adds_nothing() {
        assert!(TaxRate::EXEMPT.apply(Money::from_dollars(500)).is_zero());
    }

    #[test]
    fn tax_rate_display() {
        assert_eq!(TaxRate::from_percent(10).to_string(), "10%");
        assert_eq!(TaxRate::from_basis_points(850).to_string(), "8.5%");
        assert_eq!(TaxRate::from_basis_points(1025).to_string(), "10.25%");
    }
}
