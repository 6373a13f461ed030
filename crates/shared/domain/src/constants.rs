//! Route paths, form field names and other fixed strings shared by the slices.

pub const HOME_PATH: &str = "/";
pub const DESIGN_PATH: &str = "/design";
pub const ORDERS_PATH: &str = "/orders";
pub const CURRENT_ORDER_PATH: &str = "/orders/current";
pub const HEALTH_PATH: &str = "/health";

pub const SESSION_COOKIE: &str = "TACO_SESSION";

// Design form fields
pub const NAME: &str = "name";
pub const INGREDIENTS: &str = "ingredients";

// Order form fields
pub const DELIVERY_NAME: &str = "deliveryName";
pub const DELIVERY_STREET: &str = "deliveryStreet";
pub const DELIVERY_CITY: &str = "deliveryCity";
pub const DELIVERY_STATE: &str = "deliveryState";
pub const DELIVERY_ZIP: &str = "deliveryZip";
pub const CC_NUMBER: &str = "ccNumber";
pub const CC_EXPIRATION: &str = "ccExpiration";
pub const CC_CVV: &str = "ccCVV";

/// Minimum number of characters in a taco name.
pub const MIN_TACO_NAME_LEN: usize = 5;
