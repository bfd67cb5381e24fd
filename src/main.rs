use anyhow::Result;

#[actix_web::main]
async fn main() -> Result<()> {
    let (settings, store) = mergington_activities::init_global().await?;

    let server = mergington_activities::build_http_server(&settings.http_server, store)?;
    server.await?;

    Ok(())
}
