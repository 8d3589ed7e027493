//! This module defines various unit types and their conversions.
use float_cmp::{ApproxEq, F64Margin};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

macro_rules! unit_struct {
    ($name:ident) => {
        /// Represents a type of quantity.
        #[derive(
            Debug,
            Default,
            Clone,
            Copy,
            PartialEq,
            PartialOrd,
            Serialize,
            Deserialize,
            derive_more::Add,
            derive_more::Sub,
            derive_more::AddAssign,
            derive_more::SubAssign,
        )]
        #[serde(transparent)]
        pub struct $name(pub f64);

        impl $name {
            /// Creates a new instance of the unit type from a f64 value.
            pub fn new(val: f64) -> Self {
                Self(val)
            }

            /// Returns the value of the unit type as a f64.
            pub fn value(self) -> f64 {
                self.0
            }

            /// Whether the underlying value is neither infinite nor NaN
            pub fn is_finite(self) -> bool {
                self.0.is_finite()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                Self(iter.fold(0.0, |acc, x| acc + x.0))
            }
        }

        impl ApproxEq for $name {
            type Margin = F64Margin;

            fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
                self.0.approx_eq(other.0, margin)
            }
        }
    };
}

macro_rules! impl_dimensionless_ops {
    ($name:ident) => {
        impl std::ops::Mul<Dimensionless> for $name {
            type Output = $name;
            fn mul(self, rhs: Dimensionless) -> $name {
                $name(self.0 * rhs.0)
            }
        }

        impl std::ops::Mul<$name> for Dimensionless {
            type Output = $name;
            fn mul(self, rhs: $name) -> $name {
                $name(self.0 * rhs.0)
            }
        }

        impl std::ops::Div<Dimensionless> for $name {
            type Output = $name;
            fn div(self, rhs: Dimensionless) -> $name {
                $name(self.0 / rhs.0)
            }
        }
    };
}

macro_rules! impl_mul {
    ($Lhs:ty, $Rhs:ty, $Out:ty) => {
        impl std::ops::Mul<$Rhs> for $Lhs {
            type Output = $Out;
            fn mul(self, rhs: $Rhs) -> $Out {
                <$Out>::new(self.0 * rhs.0)
            }
        }
        impl std::ops::Mul<$Lhs> for $Rhs {
            type Output = $Out;
            fn mul(self, lhs: $Lhs) -> $Out {
                <$Out>::new(self.0 * lhs.0)
            }
        }
    };
}

// Base quantities
unit_struct!(Dimensionless);
unit_struct!(Money);
unit_struct!(Distance);
unit_struct!(Litres);

// Derived quantities
unit_struct!(MoneyPerLitre);
unit_struct!(LitresPerHundredDistance);

impl_dimensionless_ops!(Money);
impl_dimensionless_ops!(Distance);
impl_dimensionless_ops!(Litres);

// Multiplication rules
impl_mul!(Litres, MoneyPerLitre, Money);

impl From<u32> for Dimensionless {
    fn from(val: u32) -> Self {
        Self(f64::from(val))
    }
}

impl Money {
    /// Round to two decimal places, with exact halves going to the even cent.
    ///
    /// Only to be used where costs are compared or displayed; intermediate values stay unrounded.
    pub fn round_to_cents(self) -> Self {
        Self((self.0 * 100.0).round_ties_even() / 100.0)
    }
}

impl LitresPerHundredDistance {
    /// The volume of fuel burnt travelling `distance` at this consumption rate
    pub fn fuel_needed(self, distance: Distance) -> Litres {
        Litres((distance.0 / 100.0) * self.0)
    }
}
