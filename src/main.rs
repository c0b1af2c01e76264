#[tokio::main]
async fn main() {
    dojo_admin::run().await;
}
