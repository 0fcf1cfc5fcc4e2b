pub fn run() -> anyhow::Result<()> {
    println!("hemicycle {}", env!("CARGO_PKG_VERSION"));
    println!("National Assembly open-data ingestion and cache");
    Ok(())
}
