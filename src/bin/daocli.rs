//! `daocli` - terminal client for the voting DAO.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    suivote_rs::cli::run().await
}
