use std::collections::HashMap;

use async_trait::async_trait;

use super::recommend::RecommendationProvider;
use super::ProviderError;

/// Backend-agnostic recommendation-provider configuration.
///
/// `backend` must match the [`ProviderFactory::backend_name`] of a
/// registered factory. The remaining fields are passed through to that
/// factory; which of them are required is backend-specific.
///
/// | backend  | required fields          |
/// |----------|--------------------------|
/// | `gemini` | `api_key`                |
/// | `canned` | none                     |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"gemini"`).
    pub backend: String,
    /// Model identifier forwarded to the backend.
    pub model: String,
    /// Override for the service base URL; backends fall back to their
    /// default endpoint when absent.
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            backend: "canned".to_string(),
            model: "gemini-2.5-flash".to_string(),
            endpoint: None,
            api_key: None,
        }
    }
}

/// One implementation per recommendation backend. Each backend crate
/// exports a unit struct implementing this trait and registers it with a
/// [`ProviderRegistry`] at startup.
#[async_trait]
pub trait ProviderFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Build a ready-to-use provider from the configuration.
    async fn create(
        &self,
        config: &ProviderConfig,
    ) -> Result<Box<dyn RecommendationProvider>, ProviderError>;
}

/// Registry of [`ProviderFactory`] instances, keyed by backend name.
///
/// Typical lifetime:
/// 1. Create with `ProviderRegistry::new()`.
/// 2. Call `register` once per known backend.
/// 3. Call `create` with the configured backend name.
pub struct ProviderRegistry {
    factories: HashMap<&'static str, Box<dyn ProviderFactory>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a backend factory. A factory with the same name silently
    /// replaces the previous one.
    pub fn register(&mut self, factory: Box<dyn ProviderFactory>) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch to the factory matching `config.backend` and return the
    /// provider it produces.
    ///
    /// # Errors
    /// * [`ProviderError::Configuration`] — no factory is registered for
    ///   the requested backend name.
    /// * Any error the chosen factory itself returns.
    pub async fn create(
        &self,
        config: &ProviderConfig,
    ) -> Result<Box<dyn RecommendationProvider>, ProviderError> {
        let factory = self
            .factories
            .get(config.backend.as_str())
            .ok_or_else(|| {
                ProviderError::Configuration(format!(
                    "unknown backend '{}'; available: {:?}",
                    config.backend,
                    self.available_backends()
                ))
            })?;

        factory.create(config).await
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// tests
// ─────────────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::models::Dish;

    use super::{
        ProviderConfig, ProviderError, ProviderFactory, ProviderRegistry, RecommendationProvider,
    };

    // ── stub provider ────────────────────────────────────────────────────
    struct StubProvider;

    #[async_trait]
    impl RecommendationProvider for StubProvider {
        async fn recommend(&self, _query: &str) -> Result<Vec<Dish>, ProviderError> {
            Ok(Vec::new())
        }
    }

    // ── stub factory ─────────────────────────────────────────────────────
    /// A factory whose `create` flips an `AtomicBool` and returns a
    /// [`StubProvider`]. The flag lets tests prove that `create` was
    /// actually called.
    struct StubFactory {
        name: &'static str,
        called: Arc<AtomicBool>,
    }

    #[async_trait]
    impl ProviderFactory for StubFactory {
        fn backend_name(&self) -> &'static str {
            self.name
        }
        async fn create(
            &self,
            _config: &ProviderConfig,
        ) -> Result<Box<dyn RecommendationProvider>, ProviderError> {
            self.called.store(true, Ordering::SeqCst);
            Ok(Box::new(StubProvider))
        }
    }

    /// A factory that always fails — used to verify that the registry
    /// surfaces errors from the underlying factory.
    struct FailingFactory;

    #[async_trait]
    impl ProviderFactory for FailingFactory {
        fn backend_name(&self) -> &'static str {
            "failing"
        }
        async fn create(
            &self,
            _config: &ProviderConfig,
        ) -> Result<Box<dyn RecommendationProvider>, ProviderError> {
            Err(ProviderError::Connection("intentional failure".to_string()))
        }
    }

    fn stub_factory(name: &'static str) -> (Box<dyn ProviderFactory>, Arc<AtomicBool>) {
        let flag = Arc::new(AtomicBool::new(false));
        (
            Box::new(StubFactory {
                name,
                called: flag.clone(),
            }),
            flag,
        )
    }

    fn config_for(backend: &str) -> ProviderConfig {
        ProviderConfig {
            backend: backend.to_string(),
            ..ProviderConfig::default()
        }
    }

    // ── registry construction ────────────────────────────────────────────
    #[test]
    fn new_registry_has_no_backends() {
        assert!(ProviderRegistry::new().available_backends().is_empty());
    }

    #[test]
    fn available_backends_is_sorted() {
        let mut registry = ProviderRegistry::new();
        let (f1, _) = stub_factory("gemini");
        let (f2, _) = stub_factory("canned");
        registry.register(f1);
        registry.register(f2);
        assert_eq!(registry.available_backends(), vec!["canned", "gemini"]);
    }

    #[test]
    fn duplicate_registration_replaces_previous() {
        let mut registry = ProviderRegistry::new();
        let (old, _) = stub_factory("gemini");
        let (new, _) = stub_factory("gemini");
        registry.register(old);
        registry.register(new);
        assert_eq!(registry.available_backends(), vec!["gemini"]);
    }

    // ── dispatch ─────────────────────────────────────────────────────────
    #[tokio::test]
    async fn create_calls_matching_factory() {
        let mut registry = ProviderRegistry::new();
        let (factory, called) = stub_factory("gemini");
        registry.register(factory);

        let result = registry.create(&config_for("gemini")).await;

        assert!(result.is_ok(), "expected Ok, got {:#?}", result.err());
        assert!(
            called.load(Ordering::SeqCst),
            "factory create was not invoked"
        );
    }

    #[tokio::test]
    async fn unknown_backend_returns_configuration_error() {
        let registry = ProviderRegistry::new();
        assert!(matches!(
            registry.create(&config_for("nope")).await,
            Err(ProviderError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn configuration_error_names_requested_and_available_backends() {
        let mut registry = ProviderRegistry::new();
        let (f, _) = stub_factory("gemini");
        registry.register(f);

        match registry.create(&config_for("openai")).await {
            Err(ProviderError::Configuration(msg)) => {
                assert!(
                    msg.contains("openai"),
                    "error should name the requested backend"
                );
                assert!(
                    msg.contains("gemini"),
                    "error should list available backends"
                );
            }
            other => panic!("expected Configuration error, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn create_propagates_factory_error() {
        let mut registry = ProviderRegistry::new();
        registry.register(Box::new(FailingFactory));

        assert!(matches!(
            registry.create(&config_for("failing")).await,
            Err(ProviderError::Connection(_))
        ));
    }
}
