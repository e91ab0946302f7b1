//! Named handlers and validators for config-driven route tables.

use std::collections::HashMap;

use crate::config::RouteConfig;
use crate::routing::error::BuildError;
use crate::routing::matcher::RouteFilter;
use crate::routing::route::{Handler, Route, Validator};

/// Maps the names used in configuration to code.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Handler>,
    validators: HashMap<String, Validator>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. A later registration under the same name replaces the earlier one.
    pub fn register_handler(&mut self, name: impl Into<String>, handler: Handler) -> &mut Self {
        self.handlers.insert(name.into(), handler);
        self
    }

    pub fn register_validator(&mut self, name: impl Into<String>, validator: Validator) -> &mut Self {
        self.validators.insert(name.into(), validator);
        self
    }

    pub fn handler(&self, name: &str) -> Option<&Handler> {
        self.handlers.get(name)
    }

    pub fn validator(&self, name: &str) -> Option<&Validator> {
        self.validators.get(name)
    }

    /// Compile one route config, resolving its handler and validators.
    pub fn build_route(&self, config: &RouteConfig) -> Result<Route, BuildError> {
        let handler = self
            .handler(&config.handler)
            .cloned()
            .ok_or_else(|| BuildError::UnknownHandler {
                route: config.name.clone(),
                handler: config.handler.clone(),
            })?;

        let validators = config
            .validators
            .iter()
            .map(|name| {
                self.validator(name)
                    .cloned()
                    .ok_or_else(|| BuildError::UnknownValidator {
                        route: config.name.clone(),
                        validator: name.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Route::builder()
            .name(config.name.clone())
            .filter(RouteFilter::from_config(config)?)
            .validators(validators)
            .with_handler(handler))
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut handlers: Vec<_> = self.handlers.keys().collect();
        let mut validators: Vec<_> = self.validators.keys().collect();
        handlers.sort();
        validators.sort();
        f.debug_struct("HandlerRegistry")
            .field("handlers", &handlers)
            .field("validators", &validators)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{FunctionResult, QueueMessage};
    use crate::routing::route::{sync_handler_fn, validator_fn};

    fn registry() -> HandlerRegistry {
        let mut registry = HandlerRegistry::new();
        registry
            .register_handler("ok", sync_handler_fn(|_, _, _| Ok(FunctionResult::ok("ok"))))
            .register_validator("always", validator_fn(|_, _, _| Ok(true)));
        registry
    }

    #[test]
    fn test_build_route() {
        let mut config = RouteConfig::new("r1", "ok");
        config.queue_ids = Some(vec!["q1".into()]);
        config.validators = vec!["always".into()];

        let route = registry().build_route(&config).unwrap();
        assert_eq!(route.name(), Some("r1"));
        assert_eq!(route.validators().len(), 1);
        assert!(route.is_candidate(&QueueMessage::new("q1", "")));
        assert!(!route.is_candidate(&QueueMessage::new("q2", "")));
    }

    #[test]
    fn test_unknown_handler() {
        let err = registry()
            .build_route(&RouteConfig::new("r1", "missing"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Route 'r1' references unknown handler 'missing'");
    }

    #[test]
    fn test_unknown_validator() {
        let mut config = RouteConfig::new("r1", "ok");
        config.validators = vec!["always".into(), "nope".into()];

        let err = registry().build_route(&config).unwrap_err();
        assert!(matches!(err, BuildError::UnknownValidator { ref validator, .. } if validator == "nope"));
    }

    #[test]
    fn test_debug_lists_names() {
        let debug = format!("{:?}", registry());
        assert!(debug.contains("\"ok\""));
        assert!(debug.contains("\"always\""));
    }
}
