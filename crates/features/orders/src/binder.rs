use taco_domain::constants::{
    CC_CVV, CC_EXPIRATION, CC_NUMBER, DELIVERY_CITY, DELIVERY_NAME, DELIVERY_STATE,
    DELIVERY_STREET, DELIVERY_ZIP,
};
use taco_domain::order::OrderDetails;

/// Binds the order form from its submitted pairs.
///
/// Repeated fields keep their last value, absent fields stay blank and unknown
/// fields are ignored, matching the design form.
pub(crate) fn bind_details<I, K, V>(pairs: I) -> OrderDetails
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    pairs.into_iter().fold(OrderDetails::default(), |mut details, (key, value)| {
        let slot = match key.as_ref() {
            DELIVERY_NAME => &mut details.delivery_name,
            DELIVERY_STREET => &mut details.delivery_street,
            DELIVERY_CITY => &mut details.delivery_city,
            DELIVERY_STATE => &mut details.delivery_state,
            DELIVERY_ZIP => &mut details.delivery_zip,
            CC_NUMBER => &mut details.cc_number,
            CC_EXPIRATION => &mut details.cc_expiration,
            CC_CVV => &mut details.cc_cvv,
            _ => return details,
        };
        *slot = value.into();
        details
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_value_wins_and_unknown_fields_are_dropped() {
        let details = bind_details([
            ("deliveryName", "Jane"),
            ("_csrf", "ignored"),
            ("ccCVV", "123"),
            ("deliveryName", "Jane Doe"),
        ]);
        assert_eq!(details.delivery_name, "Jane Doe");
        assert_eq!(details.cc_cvv, "123");
        assert!(details.delivery_zip.is_empty());
    }
}
