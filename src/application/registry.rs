use crate::domain::ports::{PaymentServiceBox, PaymentServiceFactory};
use crate::domain::provider::ProviderKey;
use crate::error::{PaymentError, Result};
use crate::infrastructure::adyen::AdyenPaymentService;
use crate::infrastructure::stripe::StripePaymentService;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static GLOBAL: LazyLock<ProviderRegistry> = LazyLock::new(ProviderRegistry::with_defaults);

/// Lookup table from provider key to payment service constructor.
///
/// Keys are kept sorted, which also fixes the order providers are offered in
/// the prompt.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    services: BTreeMap<ProviderKey, PaymentServiceFactory>,
}

impl ProviderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in providers.
    pub fn with_defaults() -> Self {
        Self::new()
            .register("adyen", || Box::new(AdyenPaymentService::new()))
            .register("stripe", || Box::new(StripePaymentService::new()))
    }

    /// The process-wide registry of built-in providers, built on first use.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Adds a provider, replacing any existing entry under the same key.
    pub fn register(mut self, key: &str, factory: PaymentServiceFactory) -> Self {
        self.services.insert(ProviderKey::new(key), factory);
        self
    }

    pub fn contains(&self, key: &ProviderKey) -> bool {
        self.services.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &ProviderKey> {
        self.services.keys()
    }

    /// Normalises `raw` and checks it against the registered keys.
    pub fn parse_provider(&self, raw: &str) -> Result<ProviderKey> {
        let key = ProviderKey::new(raw);
        if self.contains(&key) {
            Ok(key)
        } else {
            Err(self.unknown(key.as_str()))
        }
    }

    /// Returns the constructor registered under `key`.
    pub fn resolve(&self, key: &ProviderKey) -> Result<PaymentServiceFactory> {
        self.services
            .get(key)
            .copied()
            .ok_or_else(|| self.unknown(key.as_str()))
    }

    /// Resolves `key` and builds a fresh service.
    pub fn create(&self, key: &ProviderKey) -> Result<PaymentServiceBox> {
        let factory = self.resolve(key)?;
        Ok(factory())
    }

    /// Registered keys joined for the provider prompt, e.g. `adyen or stripe`.
    pub fn prompt_list(&self) -> String {
        self.join(" or ")
    }

    fn join(&self, sep: &str) -> String {
        self.keys()
            .map(ProviderKey::as_str)
            .collect::<Vec<_>>()
            .join(sep)
    }

    fn unknown(&self, provider: &str) -> PaymentError {
        PaymentError::UnknownProvider {
            provider: provider.to_string(),
            known: self.join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::amount::Amount;
    use crate::domain::ports::{PaymentProcessor, PaymentProcessorBox, PaymentService};
    use std::io::Write;

    struct PaypalPaymentProcessor;

    impl PaymentProcessor for PaypalPaymentProcessor {
        fn make_payment(&self, amount: Amount, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "Made a PayPal payment of {amount}")?;
            Ok(())
        }
    }

    struct PaypalPaymentService;

    impl PaymentService for PaypalPaymentService {
        fn provider(&self) -> &'static str {
            "PayPal"
        }

        fn create_payment_processor(&self) -> PaymentProcessorBox {
            Box::new(PaypalPaymentProcessor)
        }
    }

    #[test]
    fn test_defaults_in_prompt_order() {
        let registry = ProviderRegistry::with_defaults();
        assert_eq!(registry.prompt_list(), "adyen or stripe");
        assert_eq!(registry.keys().count(), 2);
    }

    #[test]
    fn test_global_matches_defaults() {
        let global = ProviderRegistry::global();
        assert!(global.contains(&ProviderKey::new("stripe")));
        assert!(global.contains(&ProviderKey::new("adyen")));
        assert!(std::ptr::eq(global, ProviderRegistry::global()));
    }

    #[test]
    fn test_parse_provider_is_case_insensitive() {
        let registry = ProviderRegistry::with_defaults();
        let key = registry.parse_provider("ADYEN").unwrap();
        assert_eq!(key.as_str(), "adyen");
    }

    #[test]
    fn test_parse_provider_rejects_unknown() {
        let registry = ProviderRegistry::with_defaults();
        match registry.parse_provider("bogus") {
            Err(PaymentError::UnknownProvider { provider, known }) => {
                assert_eq!(provider, "bogus");
                assert_eq!(known, "adyen, stripe");
            }
            other => panic!("expected UnknownProvider, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_unknown_provider() {
        let registry = ProviderRegistry::with_defaults();
        let result = registry.resolve(&ProviderKey::new("paypal"));
        assert!(matches!(result, Err(PaymentError::UnknownProvider { .. })));
    }

    #[test]
    fn test_every_provider_reports_name_and_amount() {
        let registry = ProviderRegistry::with_defaults();
        for key in registry.keys() {
            let service = registry.create(key).unwrap();
            let mut out = Vec::new();
            service.make_payment(Amount::new(42.25), &mut out).unwrap();

            let output = String::from_utf8(out).unwrap();
            assert!(output.contains(service.provider()), "{output}");
            assert!(output.contains("42.25"), "{output}");
        }
    }

    #[test]
    fn test_register_extra_provider() {
        let registry =
            ProviderRegistry::with_defaults().register("PayPal", || Box::new(PaypalPaymentService));
        assert_eq!(registry.prompt_list(), "adyen or paypal or stripe");

        let service = registry.create(&ProviderKey::new("paypal")).unwrap();
        let mut out = Vec::new();
        service.make_payment(Amount::new(7.0), &mut out).unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .ends_with("Made a PayPal payment of 7.0\n"));
    }

    #[test]
    fn test_register_replaces_existing_key() {
        let registry =
            ProviderRegistry::with_defaults().register("stripe", || Box::new(PaypalPaymentService));
        let service = registry.create(&ProviderKey::new("stripe")).unwrap();
        assert_eq!(service.provider(), "PayPal");
        assert_eq!(registry.keys().count(), 2);
    }
}
