fn main() -> anyhow::Result<()> {
    libirmf::cli::run_cli()
}
