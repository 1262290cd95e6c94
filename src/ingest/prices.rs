/// One row of the stock price catalog CSV. `length` is in feet, matching
/// the source data; conversion to inches happens in [`super::read_stock_options`].
#[derive(Debug, serde::Deserialize)]
pub struct PriceRow {
    pub length: f64,
    pub price: f64,
}
