use thunder_app::{context::AppContext, domain::seeding::SeedReport};

pub(crate) async fn seed(app: &AppContext) -> Result<(), String> {
    let report = app
        .seeding
        .seed_all()
        .await
        .map_err(|error| format!("failed to seed database: {error}"))?;

    print_report(report);

    Ok(())
}

pub(crate) async fn reseed(app: &AppContext) -> Result<(), String> {
    let report = app
        .seeding
        .reseed()
        .await
        .map_err(|error| format!("failed to reseed database: {error}"))?;

    print_report(report);

    Ok(())
}

fn print_report(report: SeedReport) {
    println!("products seeded: {}", report.products);
    println!("testimonials seeded: {}", report.testimonials);
}
