use anyhow::Result;
use vergen::EmitBuilder;

// Emits VERGEN_GIT_SHA for the CLI version string; falls back to defaults outside a git checkout.
fn main() -> Result<()> {
    EmitBuilder::builder().git_sha(true).emit()?;
    Ok(())
}
