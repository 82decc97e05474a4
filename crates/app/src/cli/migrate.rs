use thunder_app::context::AppContext;

use super::source_of;

pub(crate) async fn run(app: &AppContext) -> Result<(), String> {
    app.migrate()
        .await
        .map_err(|error| format!("{error}: {}", source_of(&error)))?;

    println!("migrations applied");

    Ok(())
}
