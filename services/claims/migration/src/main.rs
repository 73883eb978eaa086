use sea_orm_migration::prelude::*;

use lostfound_claims_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
