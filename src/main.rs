//! The md-linkclean command-line executable.

fn main() -> anyhow::Result<()> {
    md_linkclean::run()
}
