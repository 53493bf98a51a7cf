//! Logging and OpenTelemetry initialization
//!
//! Sets up `tracing` output for the server binary: JSON or human-readable
//! console output, optional rotating log files, `RUST_LOG` overrides, and an
//! optional OTLP exporter so request spans reach a collector.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    trace::{Sampler, TracerProvider},
    Resource,
};
use std::fs;
use std::time::Duration;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Keeps the file writer and OpenTelemetry pipeline alive.
///
/// Hold it for the lifetime of the process; dropping it flushes pending
/// spans and shuts the exporter down.
pub struct TelemetryGuard {
    _file_guard: Option<WorkerGuard>,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        shutdown_telemetry();
    }
}

/// Initialize the global subscriber from `config`
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<TelemetryGuard> {
    let mut otel_init_error: Option<String> = None;
    let tracer_provider = if config.opentelemetry_enabled {
        init_tracer_provider(config)
            .map_err(|e| otel_init_error = Some(e.to_string()))
            .ok()
    } else {
        None
    };

    let env_filter = build_env_filter(config);

    let file_guard = match &tracer_provider {
        Some(provider) => {
            let otel_layer = tracing_opentelemetry::layer()
                .with_tracer(provider.tracer("clinic-server"))
                .with_tracked_inactivity(true);

            let subscriber = tracing_subscriber::registry()
                .with(env_filter)
                .with(otel_layer);
            init_output_layers(subscriber, config)?
        }
        None => {
            let subscriber = tracing_subscriber::registry().with(env_filter);
            init_output_layers(subscriber, config)?
        }
    };

    if let Some(provider) = tracer_provider {
        global::set_tracer_provider(provider);
    }

    if let Some(err) = otel_init_error {
        tracing::warn!(
            error = %err,
            "Failed to initialize OpenTelemetry tracer provider, continuing without it"
        );
    }

    tracing::info!(
        otel_enabled = config.opentelemetry_enabled,
        service_name = %config.service_name,
        environment = %config.deployment_environment,
        json = config.json,
        file = config.file_enabled,
        "Logging initialized"
    );

    Ok(TelemetryGuard {
        _file_guard: file_guard,
    })
}

fn build_resource(config: &LoggingConfig) -> Resource {
    let service_version = config
        .service_version
        .clone()
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    Resource::new(vec![
        KeyValue::new("service.name", config.service_name.clone()),
        KeyValue::new("service.version", service_version),
        KeyValue::new(
            "deployment.environment",
            config.deployment_environment.clone(),
        ),
    ])
}

/// Build the OTLP (gRPC) tracer provider with a ratio sampler
fn init_tracer_provider(config: &LoggingConfig) -> anyhow::Result<TracerProvider> {
    use opentelemetry_sdk::trace::Config;

    let exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(&config.otlp_endpoint)
        .with_timeout(Duration::from_secs(config.otlp_timeout_seconds))
        .build_span_exporter()
        .map_err(|e| anyhow::anyhow!("Failed to create OTLP exporter: {}", e))?;

    let sampler = match config.trace_sample_ratio {
        r if r >= 1.0 => Sampler::AlwaysOn,
        r if r <= 0.0 => Sampler::AlwaysOff,
        r => Sampler::ParentBased(Box::new(Sampler::TraceIdRatioBased(r))),
    };

    let provider = TracerProvider::builder()
        .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
        .with_config(
            Config::default()
                .with_sampler(sampler)
                .with_resource(build_resource(config)),
        )
        .build();

    Ok(provider)
}

fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "clinic={level},clinic_server={level},tower_http=info",
            level = config.level
        ))
    })
}

/// Attach console (and optionally file) formatting layers and install the
/// subscriber globally
fn init_output_layers<S>(
    subscriber: S,
    config: &LoggingConfig,
) -> anyhow::Result<Option<WorkerGuard>>
where
    S: SubscriberExt + for<'a> tracing_subscriber::registry::LookupSpan<'a> + Send + Sync + 'static,
{
    let file = if config.file_enabled {
        Some(create_file_appender(config)?)
    } else {
        None
    };
    let (file_writer, file_guard) = match file {
        Some((writer, guard)) => (Some(writer), Some(guard)),
        None => (None, None),
    };

    if config.json {
        let console = fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_writer(std::io::stdout);
        let file_layer = file_writer.map(|writer| {
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .with_writer(writer)
        });
        subscriber.with(console).with(file_layer).init();
    } else {
        let console = fmt::layer().with_target(true).with_writer(std::io::stdout);
        let file_layer = file_writer.map(|writer| {
            fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer)
        });
        subscriber.with(console).with(file_layer).init();
    }

    Ok(file_guard)
}

fn create_file_appender(config: &LoggingConfig) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(&config.file_directory)?;

    let directory = &config.file_directory;
    let prefix = &config.file_prefix;
    let appender = match config.file_rotation.as_str() {
        "hourly" => tracing_appender::rolling::hourly(directory, prefix),
        "minutely" => tracing_appender::rolling::minutely(directory, prefix),
        "never" => tracing_appender::rolling::never(directory, format!("{prefix}.log")),
        _ => tracing_appender::rolling::daily(directory, prefix),
    };

    Ok(tracing_appender::non_blocking(appender))
}

/// Flush and shut down the global tracer provider
pub fn shutdown_telemetry() {
    global::shutdown_tracer_provider();
}
