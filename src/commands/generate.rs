//! `schemagen generate` command handler.

use crate::config::GenerateSettings;
use crate::GenerateArgs;
use anyhow::Context;
use schema_core::Schema;
use schema_generator::Generator;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for document writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a generate run.
#[derive(Debug, Clone, Default)]
pub struct GenerateMetrics {
    /// Number of documents written.
    pub documents_written: u64,
    /// Bytes written, separators included.
    pub bytes_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl GenerateMetrics {
    /// Calculate documents per second.
    pub fn documents_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.documents_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Run the generate command.
pub fn run_generate(args: GenerateArgs) -> anyhow::Result<GenerateMetrics> {
    let settings = GenerateSettings::resolve(&args)?;
    let schema = Schema::from_file(&args.schema)
        .with_context(|| format!("Failed to load schema from {:?}", args.schema))?;

    info!(
        "Generating {} document(s) from {:?} (seed={}, max_depth={})",
        settings.count,
        args.schema,
        settings.generator.seed,
        settings.generator.max_depth
    );

    let metrics = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {path:?}"))?;
            let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
            write_documents(&schema, &settings, &mut writer)?
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, stdout.lock());
            write_documents(&schema, &settings, &mut writer)?
        }
    };

    info!(
        "Generation complete: {} documents, {} bytes in {:?} ({:.2} docs/sec)",
        metrics.documents_written,
        metrics.bytes_written,
        metrics.total_duration,
        metrics.documents_per_second()
    );

    Ok(metrics)
}

/// Generate `settings.count` documents and write them to `writer`.
///
/// Compact output is one JSON document per line. Pretty output separates
/// documents with a newline as well, so it stays easy to split.
pub fn write_documents<W: Write>(
    schema: &Schema,
    settings: &GenerateSettings,
    writer: &mut W,
) -> anyhow::Result<GenerateMetrics> {
    let start_time = Instant::now();
    let mut metrics = GenerateMetrics::default();

    let mut generator = Generator::new(settings.generator.clone());
    let mut documents = generator.documents(schema, settings.count);
    if let Some(timeout) = settings.timeout {
        documents = documents.with_timeout(timeout);
    }

    for (index, result) in documents.enumerate() {
        let value = result.with_context(|| format!("Failed to generate document {index}"))?;

        let bytes = if settings.pretty {
            serde_json::to_vec_pretty(&value)?
        } else {
            serde_json::to_vec(&value)?
        };
        writer.write_all(&bytes)?;
        writeln!(writer)?;

        metrics.documents_written += 1;
        metrics.bytes_written += bytes.len() as u64 + 1;

        if metrics.documents_written % 10000 == 0 {
            debug!("Written {} documents", metrics.documents_written);
        }
    }

    writer.flush()?;
    metrics.total_duration = start_time.elapsed();
    Ok(metrics)
}
