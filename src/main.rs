// Crop showcase PNGs so the edge sits on the white border of the component.
// Usage: cargo run --bin showcase-crop

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    showcase_crop::run()?;
    Ok(())
}
