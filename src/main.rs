use anyhow::Result;

fn main() -> Result<()> {
    searxng_provision::run()
}
