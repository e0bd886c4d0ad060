use collbridge_api::CollectionRegistrarPtr;
use collbridge_core::{ConversionService, CustomCollections, RegistryConfig, Result};
use tracing::{debug, info};

/// Every registrar compiled into this build, in registration order.
pub fn default_registrars() -> Vec<CollectionRegistrarPtr> {
    #[allow(unused_mut)]
    let mut registrars: Vec<CollectionRegistrarPtr> = Vec::new();

    #[cfg(feature = "vavr")]
    registrars.push(collbridge_vavr::vavr_registrar());

    registrars
}

/// Builds a registry from `registrars`, leaving out those disabled by
/// `config`.
pub fn build_registry(
    config: &RegistryConfig,
    registrars: Vec<CollectionRegistrarPtr>,
) -> Result<CustomCollections> {
    let enabled = registrars.into_iter().filter(|registrar| {
        let disabled = config.is_disabled(registrar.id());
        if disabled {
            debug!("Registrar {} disabled by configuration", registrar.id());
        }
        !disabled
    });

    Ok(CustomCollections::from_registrars(enabled)?)
}

/// Bootstraps the process-wide registry from the configuration and the
/// compiled-in registrars. Later calls return the published instance.
pub fn custom_collections() -> Result<&'static CustomCollections> {
    CustomCollections::global_or_try_init(|| {
        let config = RegistryConfig::load()?;
        let collections = build_registry(&config, default_registrars())?;
        info!(
            "Custom collections ready: {}",
            collections.registrar_ids().join(", ")
        );
        Ok(collections)
    })
}

/// A conversion service with the default rules and every registrar's
/// converters installed.
pub fn conversion_service(collections: &CustomCollections) -> ConversionService {
    let mut service = ConversionService::with_defaults();
    collections.install_conversions(&mut service);
    service
}

/// Starts file logging for `component`, filtered by the configured
/// `log_filter`. The returned guard flushes pending records on drop.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    let filter = RegistryConfig::load()
        .map(|config| config.log_filter().to_string())
        .unwrap_or_else(|_| "info".to_string());
    Some(collbridge_core::logging::init_logging(
        component, &filter, to_stderr,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_registrars_are_left_out() {
        let mut config = RegistryConfig::default();
        config.apply_disabled_override("vavr");

        let collections = build_registry(&config, default_registrars()).unwrap();
        assert!(collections.registrar_ids().is_empty());
        assert!(collections.custom_types().is_empty());
    }

    #[cfg(feature = "vavr")]
    #[test]
    fn default_build_includes_vavr() {
        let collections = build_registry(&RegistryConfig::default(), default_registrars()).unwrap();
        assert_eq!(collections.registrar_ids(), vec!["vavr"]);

        let service = conversion_service(&collections);
        let seq = collections.lookup_type("io.vavr.collection.Seq").unwrap();
        assert!(service.can_convert(&collbridge_api::native::ARRAY_LIST, &seq));
    }
}
