fn main() -> anyhow::Result<()> {
    chip_filters::run()
}
