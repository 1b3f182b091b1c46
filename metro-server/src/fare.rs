//! Distance-tiered fares, stored-value card discounts and day passes.
//!
//! Fares are a pure lookup: nothing here touches the network.

use std::fmt;

use serde::Serialize;

use crate::domain::{Path, QueryError};

/// One step of the fare table: journeys up to `max_km` cost `price`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareTier {
    pub max_km: f64,
    pub price: f64,
}

/// A day-pass product.
///
/// # Examples
///
/// ```
/// use metro_server::fare::DayPass;
///
/// let pass = DayPass::parse("3-day").unwrap();
/// assert_eq!(pass, DayPass::ThreeDay);
/// assert_eq!(pass.as_str(), "3-day");
///
/// assert!(DayPass::parse("weekly").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPass {
    OneDay,
    ThreeDay,
    SevenDay,
}

impl DayPass {
    /// Every product, shortest first.
    pub const ALL: [DayPass; 3] = [DayPass::OneDay, DayPass::ThreeDay, DayPass::SevenDay];

    /// Parse a product code. Codes are case-sensitive.
    pub fn parse(code: &str) -> Result<Self, QueryError> {
        match code {
            "1-day" => Ok(DayPass::OneDay),
            "3-day" => Ok(DayPass::ThreeDay),
            "7-day" => Ok(DayPass::SevenDay),
            other => Err(QueryError::InvalidTicketType(other.to_string())),
        }
    }

    /// The product code.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayPass::OneDay => "1-day",
            DayPass::ThreeDay => "3-day",
            DayPass::SevenDay => "7-day",
        }
    }

    fn index(self) -> usize {
        match self {
            DayPass::OneDay => 0,
            DayPass::ThreeDay => 1,
            DayPass::SevenDay => 2,
        }
    }
}

impl fmt::Display for DayPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Regular and card fares for one journey.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FareQuote {
    pub distance_km: f64,
    pub regular: f64,
    pub card: f64,
}

/// The fare table.
///
/// Tiers must ascend in both distance and price. The last tier's price
/// applies to any journey longer than every bound, so a table whose last
/// bound is `f64::INFINITY` simply makes that explicit.
#[derive(Debug, Clone, PartialEq)]
pub struct FareSchedule {
    tiers: Vec<FareTier>,
    day_passes: [f64; 3],
    card_discount: f64,
}

impl FareSchedule {
    /// Create a schedule from its parts.
    ///
    /// `day_passes` holds the 1-day, 3-day and 7-day prices in that order.
    pub fn new(tiers: Vec<FareTier>, day_passes: [f64; 3], card_discount: f64) -> Self {
        Self {
            tiers,
            day_passes,
            card_discount,
        }
    }

    /// A schedule with the given `(max_km, price)` tiers and default
    /// day passes and card discount.
    pub fn from_tiers(tiers: &[(f64, f64)]) -> Self {
        let defaults = Self::default();
        Self {
            tiers: tiers
                .iter()
                .map(|&(max_km, price)| FareTier { max_km, price })
                .collect(),
            ..defaults
        }
    }

    pub fn tiers(&self) -> &[FareTier] {
        &self.tiers
    }

    pub fn card_discount(&self) -> f64 {
        self.card_discount
    }

    /// Price of a single journey of `distance_km`.
    ///
    /// Returns the price of the first tier whose bound is at least the
    /// distance, or the last tier's price past the end of the table. An
    /// empty table prices everything at zero.
    pub fn regular_fare(&self, distance_km: f64) -> f64 {
        self.tiers
            .iter()
            .find(|tier| distance_km <= tier.max_km)
            .or_else(|| self.tiers.last())
            .map_or(0.0, |tier| tier.price)
    }

    /// Regular fare with the card discount, rounded half-up to 0.1.
    pub fn card_fare(&self, distance_km: f64) -> f64 {
        round_to_tenth(self.regular_fare(distance_km) * self.card_discount)
    }

    /// Price of a day-pass product given by its code.
    pub fn day_pass_fare(&self, code: &str) -> Result<f64, QueryError> {
        let pass = DayPass::parse(code)?;
        Ok(self.day_pass_price(pass))
    }

    pub fn day_pass_price(&self, pass: DayPass) -> f64 {
        self.day_passes[pass.index()]
    }

    /// Both fares for a path's total distance.
    pub fn fare_quote(&self, path: &Path) -> FareQuote {
        let distance_km = path.total_distance();
        FareQuote {
            distance_km,
            regular: self.regular_fare(distance_km),
            card: self.card_fare(distance_km),
        }
    }
}

impl Default for FareSchedule {
    /// The Wuhan metro single-journey table.
    fn default() -> Self {
        Self::new(
            vec![
                FareTier { max_km: 4.0, price: 2.0 },
                FareTier { max_km: 8.0, price: 3.0 },
                FareTier { max_km: 12.0, price: 4.0 },
                FareTier { max_km: 24.0, price: 5.0 },
                FareTier { max_km: 40.0, price: 6.0 },
                FareTier { max_km: 50.0, price: 7.0 },
                FareTier { max_km: 70.0, price: 8.0 },
                FareTier { max_km: f64::INFINITY, price: 9.0 },
            ],
            [18.0, 45.0, 90.0],
            0.9,
        )
    }
}

/// Amounts are never negative, so `round` (half away from zero) is half-up.
fn round_to_tenth(amount: f64) -> f64 {
    (amount * 10.0).round() / 10.0
}
