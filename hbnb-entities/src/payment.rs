/// A payment intent created by the backend at the payment provider.
///
/// The client secret is handed to the hosted payment form; the intent id is
/// sent back when the booking is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntent {
    pub client_secret: String,
    pub payment_intent_id: String,
}

pub const DEFAULT_CURRENCY: &str = "usd";
