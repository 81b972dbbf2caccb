//! Wire types for the pricing API.

use serde::Deserialize;

/// One GPU summary row from the `/api/gpu-list` endpoint.
///
/// `gpu_name` is the join key to the history endpoint; it is not guaranteed
/// unique, so duplicate names collide in lookup. Every price field is
/// nullable on the wire.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct GpuRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub gpu_name: String,
    #[serde(default)]
    pub current_buy_price: Option<f64>,
    #[serde(default)]
    pub current_sell_cash: Option<f64>,
    #[serde(default)]
    pub current_sell_store: Option<f64>,
    #[serde(default)]
    pub historic_buy_price: Option<f64>,
    #[serde(default)]
    pub historic_sell_cash: Option<f64>,
    #[serde(default)]
    pub historic_sell_store: Option<f64>,
    #[serde(default)]
    pub online_stock_status: Option<String>,
    #[serde(default)]
    pub online_stock_count: Option<i64>,
    #[serde(default)]
    pub store_stock_status: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub box_grade: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub product_url: Option<String>,
}

impl GpuRecord {
    pub fn buy_delta(&self) -> f64 {
        price_delta(self.current_buy_price, self.historic_buy_price)
    }

    pub fn sell_cash_delta(&self) -> f64 {
        price_delta(self.current_sell_cash, self.historic_sell_cash)
    }

    pub fn sell_store_delta(&self) -> f64 {
        price_delta(self.current_sell_store, self.historic_sell_store)
    }
}

/// Current minus historic. A missing operand means "no change", not an
/// excluded record, so the delta collapses to zero.
pub fn price_delta(current: Option<f64>, historic: Option<f64>) -> f64 {
    match (current, historic) {
        (Some(current), Some(historic)) => current - historic,
        _ => 0.0,
    }
}

/// One sample from the `/api/gpu-prices` endpoint. The sequence arrives
/// ordered oldest→newest; the client trusts that ordering.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct PricePoint {
    pub date: String,
    #[serde(default)]
    pub buy_price: Option<f64>,
    #[serde(default)]
    pub sell_cash: Option<f64>,
    #[serde(default)]
    pub sell_store: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_record() {
        let raw = r#"{
            "id": 7,
            "gpu_name": "RTX 3080",
            "current_buy_price": 300.0,
            "current_sell_cash": 210.0,
            "current_sell_store": 240.0,
            "historic_buy_price": 320.0,
            "historic_sell_cash": 200.0,
            "historic_sell_store": 240.0,
            "online_stock_status": "In Stock",
            "online_stock_count": 4,
            "store_stock_status": "Low",
            "rating": 4.5,
            "box_grade": "A",
            "image": "https://example.com/3080.jpg",
            "product_url": "https://example.com/3080"
        }"#;

        let record: GpuRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.gpu_name, "RTX 3080");
        assert_eq!(record.buy_delta(), -20.0);
        assert_eq!(record.sell_cash_delta(), 10.0);
        assert_eq!(record.sell_store_delta(), 0.0);
    }

    #[test]
    fn absent_and_null_optionals_decode_to_none() {
        let record: GpuRecord =
            serde_json::from_str(r#"{"gpu_name": "RX 580", "rating": null}"#).unwrap();
        assert!(record.current_buy_price.is_none());
        assert!(record.rating.is_none());
        assert!(record.online_stock_status.is_none());
    }

    #[test]
    fn missing_operand_collapses_delta_to_zero() {
        assert_eq!(price_delta(Some(250.0), None), 0.0);
        assert_eq!(price_delta(None, Some(250.0)), 0.0);
        assert_eq!(price_delta(None, None), 0.0);
        assert_eq!(price_delta(Some(275.0), Some(250.0)), 25.0);
    }

    #[test]
    fn decodes_price_point_with_gaps() {
        let point: PricePoint =
            serde_json::from_str(r#"{"date": "2024-11-02", "buy_price": 299.0}"#).unwrap();
        assert_eq!(point.date, "2024-11-02");
        assert_eq!(point.buy_price, Some(299.0));
        assert!(point.sell_cash.is_none());
        assert!(point.sell_store.is_none());
    }
}
