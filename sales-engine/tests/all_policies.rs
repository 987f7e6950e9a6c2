#![allow(unused_macros)]
use rstest_reuse::template;

// This creates a testing "template" to run a test once per revenue policy

#[template]
#[rstest]
#[case::per_item(sales_engine::RevenuePolicy::PerItem)]
#[case::order_total(sales_engine::RevenuePolicy::OrderTotal)]
pub fn all_policies(#[case] policy: sales_engine::RevenuePolicy) -> () {}
