use metrics_exporter_prometheus::PrometheusHandle;
use money_match::catalog::Catalog;
use money_match::config::DataConfig;
use money_match::error::AppError;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Resolve the dataset directory (CLI override first) and load the catalog.
pub(crate) fn load_catalog(
    config: &DataConfig,
    override_dir: Option<PathBuf>,
) -> Result<Arc<Catalog>, AppError> {
    let dir = override_dir.unwrap_or_else(|| config.dir.clone());
    let catalog = Catalog::load(&dir)?;
    Ok(Arc::new(catalog))
}
