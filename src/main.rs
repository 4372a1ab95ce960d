use mincan_cleaner::{clean_table, read_table, summarize, write_table, AppConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load_or_default(Some("config.toml"));

    let directive = format!("mincan_cleaner={}", config.logging.level);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // a load failure is reported, not propagated; nothing is written
    let table = match read_table(&config.io.input_path, &config.cleaning.missing_label) {
        Ok(table) => table,
        Err(e) => {
            tracing::error!(
                path = %config.io.input_path.display(),
                error = %e,
                "Failed to read source CSV"
            );
            return Ok(());
        }
    };

    let summary = summarize(&table, &config.io.input_path)?;
    tracing::info!(
        rows = summary.total_rows,
        columns = summary.total_columns,
        file_size_bytes = summary.file_size_bytes,
        "Source CSV read successfully"
    );

    let cleaned = clean_table(table, &config.cleaning)?;

    let rows_written = write_table(
        &cleaned,
        &config.io.output_path,
        &config.cleaning.missing_label,
    )?;
    tracing::info!(
        rows_written,
        path = %config.io.output_path.display(),
        "Cleaned CSV written"
    );

    Ok(())
}
