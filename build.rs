use anyhow::Result;
use vergen_gix::{BuildBuilder, Emitter};

fn main() -> Result<()> {
    let build = BuildBuilder::default().build_date(true).build()?;
    Emitter::default().add_instructions(&build)?.emit()
}
