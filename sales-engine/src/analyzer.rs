use crate::{
    AnalysisError, DiscountedRevenue, RankBonus, ReportSettings, Set, aggregate, rank, validate,
};
use sales_core::{
    models::{Map, OrderLine, Product, Seller, SellerId, SellerReport, Sku},
    ports::{BonusStrategy, MarketRepository, RevenueStrategy},
};
use tracing::{Level, event};

/// Counts describing a dataset that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DatasetSummary {
    /// Known sellers
    pub sellers: usize,
    /// Known products
    pub products: usize,
    /// Purchase records
    pub purchases: usize,
    /// Sellers with at least one purchase, i.e. the length of the report
    pub active_sellers: usize,
}

/// Runs the full analysis: validation, aggregation and ranking.
///
/// The analyzer owns its settings and both strategies, and holds no other
/// state, so a single instance can analyze any number of markets.
///
/// ```
/// use rust_decimal::Decimal;
/// use sales_core::models::{OrderItem, OrderLine, Product, Seller};
/// use sales_engine::{Analyzer, MemoryMarket, ReportSettings};
///
/// let market = MemoryMarket {
///     sellers: vec![Seller {
///         id: "seller_1".into(),
///         first_name: "Ann".into(),
///         last_name: "Lee".into(),
///     }],
///     products: vec![Product {
///         sku: "SKU_001".into(),
///         purchase_price: Decimal::from(4),
///     }],
///     purchases: vec![OrderLine {
///         receipt_id: "r1".into(),
///         seller_id: "seller_1".into(),
///         customer_id: None,
///         items: vec![OrderItem {
///             sku: "SKU_001".into(),
///             discount: Decimal::ZERO,
///             quantity: 2,
///             sale_price: Decimal::from(10),
///         }],
///         total_amount: None,
///     }],
/// };
///
/// let report = Analyzer::with_settings(ReportSettings::default())
///     .analyze(&market)
///     .unwrap();
/// assert_eq!(report[0].name, "Ann Lee");
/// assert_eq!(report[0].profit, Decimal::from(12));
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer<R, B> {
    settings: ReportSettings,
    revenue: R,
    bonus: B,
}

impl Analyzer<DiscountedRevenue, RankBonus> {
    /// An analyzer using the reference revenue and bonus strategies
    pub fn with_settings(settings: ReportSettings) -> Self {
        Self::new(settings, DiscountedRevenue, RankBonus::default())
    }
}

impl Default for Analyzer<DiscountedRevenue, RankBonus> {
    fn default() -> Self {
        Self::with_settings(ReportSettings::default())
    }
}

impl<R: RevenueStrategy, B: BonusStrategy> Analyzer<R, B> {
    /// Create an analyzer from its settings and strategies
    pub fn new(settings: ReportSettings, revenue: R, bonus: B) -> Self {
        Self {
            settings,
            revenue,
            bonus,
        }
    }

    /// The settings this analyzer runs with
    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Produce the ranked seller report for `market`.
    ///
    /// The market is read once. All validation happens before aggregation
    /// starts, and either the complete report or an error is returned.
    pub fn analyze<M: MarketRepository>(
        &self,
        market: &M,
    ) -> Result<Vec<SellerReport>, AnalysisError> {
        let (sellers, products, purchases) = load(market)?;

        validate(&sellers, &products, &purchases).inspect_err(|err| {
            event!(Level::WARN, err = err.to_string(), "market data rejected");
        })?;

        let stats = aggregate(
            &sellers,
            &products,
            &purchases,
            &self.revenue,
            self.settings.revenue_policy,
        )?;

        let report = rank(stats, &self.bonus, self.settings.top_products)?;

        event!(
            Level::INFO,
            purchases = purchases.len(),
            sellers = report.len(),
            policy = ?self.settings.revenue_policy,
            "sales report complete"
        );

        Ok(report)
    }

    /// Validate `market` without producing a report.
    pub fn check<M: MarketRepository>(&self, market: &M) -> Result<DatasetSummary, AnalysisError> {
        let (sellers, products, purchases) = load(market)?;
        validate(&sellers, &products, &purchases)?;

        let active_sellers = purchases
            .iter()
            .map(|line| &line.seller_id)
            .collect::<Set<_>>()
            .len();

        Ok(DatasetSummary {
            sellers: sellers.len(),
            products: products.len(),
            purchases: purchases.len(),
            active_sellers,
        })
    }
}

type Loaded = (Map<SellerId, Seller>, Map<Sku, Product>, Vec<OrderLine>);

fn load<M: MarketRepository>(market: &M) -> Result<Loaded, AnalysisError> {
    let sellers = market.seller_index().map_err(repository_error)?;
    let products = market.product_index().map_err(repository_error)?;
    let purchases = market.list_purchases().map_err(repository_error)?;

    event!(
        Level::DEBUG,
        sellers = sellers.len(),
        products = products.len(),
        purchases = purchases.len(),
        "loaded market data"
    );

    Ok((sellers, products, purchases))
}

fn repository_error<E: std::error::Error + Send + Sync + 'static>(err: E) -> AnalysisError {
    AnalysisError::Repository(Box::new(err))
}
