use anyhow::Result;
use authflow::cli::start;

#[tokio::main]
async fn main() -> Result<()> {
    let action = start()?;
    action.execute().await?;
    Ok(())
}
