fn main() -> anyhow::Result<()> {
    genescope_cli::run()
}
