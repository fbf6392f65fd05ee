fn main() -> anyhow::Result<()> {
    median_cli::main()
}
