//! Pure filter/sort/pagination pipeline behind the catalog grid.

use std::cmp::Ordering;
use std::str::FromStr;

use thiserror::Error;

use crate::core::model::GpuRecord;

/// Cards shown per catalog page.
pub const PAGE_SIZE: usize = 12;

/// Sort order for the catalog. The wire identifiers double as the
/// `<select>` option values, so they must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    HighestPrice,
    LowestPrice,
    BuyGainHighest,
    BuyGainLowest,
    SellCashGainHighest,
    SellCashGainLowest,
    SellStoreGainHighest,
    SellStoreGainLowest,
}

impl SortKey {
    pub const ALL: [SortKey; 9] = [
        SortKey::Name,
        SortKey::HighestPrice,
        SortKey::LowestPrice,
        SortKey::BuyGainHighest,
        SortKey::BuyGainLowest,
        SortKey::SellCashGainHighest,
        SortKey::SellCashGainLowest,
        SortKey::SellStoreGainHighest,
        SortKey::SellStoreGainLowest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::HighestPrice => "highest",
            SortKey::LowestPrice => "lowest",
            SortKey::BuyGainHighest => "buy_gain_highest",
            SortKey::BuyGainLowest => "buy_gain_lowest",
            SortKey::SellCashGainHighest => "sell_cash_gain_highest",
            SortKey::SellCashGainLowest => "sell_cash_gain_lowest",
            SortKey::SellStoreGainHighest => "sell_store_gain_highest",
            SortKey::SellStoreGainLowest => "sell_store_gain_lowest",
        }
    }

    /// Human label for the sort dropdown.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Sort by Name",
            SortKey::HighestPrice => "Sort by Highest Price (£)",
            SortKey::LowestPrice => "Sort by Lowest Price (£)",
            SortKey::BuyGainHighest => "Sort by Buy Price Gain (▲)",
            SortKey::BuyGainLowest => "Sort by Buy Price Drop (▼)",
            SortKey::SellCashGainHighest => "Sort by Cash Offer Gain (▲)",
            SortKey::SellCashGainLowest => "Sort by Cash Offer Drop (▼)",
            SortKey::SellStoreGainHighest => "Sort by Store Credit Gain (▲)",
            SortKey::SellStoreGainLowest => "Sort by Store Credit Drop (▼)",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognised sort key `{0}`")]
pub struct ParseSortKeyError(String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == raw)
            .ok_or_else(|| ParseSortKeyError(raw.to_string()))
    }
}

/// One page of the filtered, sorted catalog.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PageView {
    pub page_items: Vec<GpuRecord>,
    pub total_pages: usize,
}

/// Filter, sort, and slice the catalog. Pure and deterministic.
///
/// The filter is a case-insensitive substring match of `query` against
/// `gpu_name`; an empty query matches everything. `page` is 1-based, and the
/// engine does not clamp: a page outside `[1, total_pages]` (page 0
/// included) yields empty `page_items`. Callers clamp navigation and reset
/// to page 1 whenever the query or sort key changes. `page_size` must be
/// non-zero.
pub fn paginate(
    records: &[GpuRecord],
    query: &str,
    sort_key: SortKey,
    page: usize,
    page_size: usize,
) -> PageView {
    debug_assert!(page_size > 0);

    let needle = query.to_lowercase();
    let mut filtered: Vec<GpuRecord> = records
        .iter()
        .filter(|record| record.gpu_name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    // slice::sort_by is stable, so records with equal keys keep API order.
    filtered.sort_by(compare(sort_key));

    let total_pages = filtered.len().div_ceil(page_size);
    let page_items = match page.checked_sub(1) {
        Some(zero_based) => filtered
            .into_iter()
            .skip(zero_based.saturating_mul(page_size))
            .take(page_size)
            .collect(),
        None => Vec::new(),
    };

    PageView {
        page_items,
        total_pages,
    }
}

fn compare(sort_key: SortKey) -> impl FnMut(&GpuRecord, &GpuRecord) -> Ordering {
    move |a, b| match sort_key {
        SortKey::Name => a.gpu_name.cmp(&b.gpu_name),
        SortKey::HighestPrice => buy_price(b).total_cmp(&buy_price(a)),
        SortKey::LowestPrice => buy_price(a).total_cmp(&buy_price(b)),
        SortKey::BuyGainHighest => b.buy_delta().total_cmp(&a.buy_delta()),
        SortKey::BuyGainLowest => a.buy_delta().total_cmp(&b.buy_delta()),
        SortKey::SellCashGainHighest => b.sell_cash_delta().total_cmp(&a.sell_cash_delta()),
        SortKey::SellCashGainLowest => a.sell_cash_delta().total_cmp(&b.sell_cash_delta()),
        SortKey::SellStoreGainHighest => b.sell_store_delta().total_cmp(&a.sell_store_delta()),
        SortKey::SellStoreGainLowest => a.sell_store_delta().total_cmp(&b.sell_store_delta()),
    }
}

// A record without a current buy price sorts as zero, the same "no data, no
// signal" rule the deltas use.
fn buy_price(record: &GpuRecord) -> f64 {
    record.current_buy_price.unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, buy: Option<f64>) -> GpuRecord {
        GpuRecord {
            gpu_name: name.into(),
            current_buy_price: buy,
            ..GpuRecord::default()
        }
    }

    fn names(view: &PageView) -> Vec<&str> {
        view.page_items
            .iter()
            .map(|record| record.gpu_name.as_str())
            .collect()
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let records = vec![
            record("RTX 3080", None),
            record("rtx 3090", None),
            record("RX 6800", None),
        ];
        let view = paginate(&records, "rTx", SortKey::Name, 1, PAGE_SIZE);
        assert_eq!(names(&view), vec!["RTX 3080", "rtx 3090"]);
    }

    #[test]
    fn highest_orders_by_current_buy_price_descending() {
        let records = vec![record("RTX 3080", Some(300.0)), record("RTX 3090", Some(500.0))];
        let view = paginate(&records, "", SortKey::HighestPrice, 1, PAGE_SIZE);
        assert_eq!(names(&view), vec!["RTX 3090", "RTX 3080"]);
    }

    #[test]
    fn lowest_reverses_highest_for_distinct_prices() {
        let records = vec![
            record("A", Some(120.0)),
            record("B", Some(80.0)),
            record("C", Some(410.0)),
        ];
        let highest_view = paginate(&records, "", SortKey::HighestPrice, 1, PAGE_SIZE);
        let lowest_view = paginate(&records, "", SortKey::LowestPrice, 1, PAGE_SIZE);
        let mut highest = names(&highest_view);
        let lowest = names(&lowest_view);
        highest.reverse();
        assert_eq!(highest, lowest);
    }

    #[test]
    fn missing_historic_price_sorts_as_zero_change() {
        let mut riser = record("riser", Some(300.0));
        riser.historic_buy_price = Some(250.0);
        let mut faller = record("faller", Some(300.0));
        faller.historic_buy_price = Some(350.0);
        let no_baseline = record("no-baseline", Some(300.0));

        let records = vec![faller, no_baseline, riser];
        let view = paginate(&records, "", SortKey::BuyGainHighest, 1, PAGE_SIZE);
        assert_eq!(names(&view), vec!["riser", "no-baseline", "faller"]);
    }

    #[test]
    fn equal_keys_keep_api_order() {
        let records = vec![
            record("second", Some(100.0)),
            record("first", Some(100.0)),
            record("third", Some(100.0)),
        ];
        let view = paginate(&records, "", SortKey::HighestPrice, 1, PAGE_SIZE);
        assert_eq!(names(&view), vec!["second", "first", "third"]);
    }

    #[test]
    fn twenty_five_records_page_three_ways() {
        let records: Vec<GpuRecord> = (0..25)
            .map(|n| record(&format!("GPU {n:02}"), Some(n as f64)))
            .collect();

        let first = paginate(&records, "", SortKey::Name, 1, PAGE_SIZE);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.page_items.len(), 12);

        let last = paginate(&records, "", SortKey::Name, 3, PAGE_SIZE);
        assert_eq!(last.page_items.len(), 1);
    }

    #[test]
    fn empty_input_yields_zero_pages() {
        let view = paginate(&[], "anything", SortKey::Name, 1, PAGE_SIZE);
        assert_eq!(view.total_pages, 0);
        assert!(view.page_items.is_empty());
    }

    #[test]
    fn out_of_range_pages_are_not_clamped() {
        let records = vec![record("only", Some(1.0))];
        assert!(paginate(&records, "", SortKey::Name, 0, PAGE_SIZE)
            .page_items
            .is_empty());
        assert!(paginate(&records, "", SortKey::Name, 2, PAGE_SIZE)
            .page_items
            .is_empty());
    }

    #[test]
    fn sort_key_identifiers_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
        assert!("price_gain".parse::<SortKey>().is_err());
    }
}
