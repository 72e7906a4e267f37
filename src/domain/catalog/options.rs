//! Fixed option sets shared across flows.

/// The seller-side roles offered by the opening prompt.
pub const SELLER_ROLES: &[&str] = &["Seller", "Agent", "Builder"];

/// The buyer entry option on the opening prompt.
pub const BUYER_OPTION: &str = "Want to buy a property";

/// Everything the opening prompt offers: seller roles plus the buyer entry.
pub const ROLE_OPTIONS: &[&str] = &["Seller", "Agent", "Builder", BUYER_OPTION];

/// The five budget brackets offered as option chips.
pub const BUDGET_OPTIONS: &[&str] = &["Under 50L", "50L-1Cr", "1-2Cr", "2-5Cr", "Above 5Cr"];

/// Bedroom count options for residential property types.
pub const BHK_OPTIONS: &[&str] = &["1 BHK", "2 BHK", "3 BHK", "4+ BHK"];
