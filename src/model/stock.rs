/// A purchasable board type. `length` is stored in inches internally even
/// though the CSV input is in feet (§6: inputs arrive in feet and are
/// multiplied by 12 on ingest).
///
/// Two `StockOption`s with identical length but different prices are
/// distinct and both considered; the engine never merges them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct StockOption {
    /// Length in inches.
    pub length: f64,
    /// Price per board.
    pub price: f64,
}

impl StockOption {
    /// Builds a `StockOption` from a length given in feet, converting to the
    /// engine's internal inches representation.
    pub fn from_feet(length_feet: f64, price: f64) -> Self {
        StockOption {
            length: length_feet * 12.0,
            price,
        }
    }

    /// Price per inch of length; used to rank stocks for the theoretical
    /// cost lower bound (§4.1) and is not otherwise a constraint.
    pub fn price_per_inch(&self) -> f64 {
        self.price / self.length
    }
}
